//! Test data factories for cicd-helper types
//!
//! Not every helper is used by every test binary.

#![allow(dead_code)]

use cicd_helper::types::MergeRequest;
use std::io::Write;
use tempfile::NamedTempFile;

/// Create a merge request with default values
pub fn make_merge_request(iid: u64, source: &str) -> MergeRequest {
    MergeRequest {
        iid,
        web_url: format!("https://gitlab.com/group/app/-/merge_requests/{iid}"),
        source_branch: source.to_string(),
        target_branch: "main".to_string(),
        title: format!("MR for {source}"),
    }
}

/// JSON body GitLab returns for a merge request list entry
pub fn merge_request_json(iid: u64, source: &str) -> serde_json::Value {
    serde_json::json!({
        "id": iid + 1000,
        "iid": iid,
        "web_url": format!("https://gitlab.com/group/app/-/merge_requests/{iid}"),
        "source_branch": source,
        "target_branch": "main",
        "title": format!("MR for {source}"),
        "state": "opened"
    })
}

/// Write `content` to a temporary diff file
pub fn write_diff(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp diff");
    file.write_all(content.as_bytes()).expect("write temp diff");
    file
}

/// A small unified diff
pub const SAMPLE_DIFF: &str = "\
diff --git a/src/lib.rs b/src/lib.rs
--- a/src/lib.rs
+++ b/src/lib.rs
@@ -1,3 +1,3 @@
 fn main() {
-    println!(\"hello\");
+    println!(\"hello, world\");
 }";
