//! Diff loading and the instructional wrapper around it

use crate::error::{Error, Result};
use std::path::Path;

/// Line preceding the diff content
pub const DIFF_START_MARKER: &str = "======= START Git Diff =======";
/// Line following the diff content
pub const DIFF_END_MARKER: &str = "======= END Git Diff =======";

const DIFF_EXPLANATION: &str = "\
A Git Diff works as follows:
- Lines starting with a space character ' ' are unchanged and included for context only.
- Lines starting with a plus character '+' are added.
- Lines starting with a minus character '-' are removed.
- Lines starting with a caret character '^' are modified.
- Lines starting with a pound character '#' are comments.
- Lines starting with an at character '@' are meta data.

When working with the Git diff, you only comment on code that has been changed, added or removed as indicated in the Git diff.";

/// Read the diff at `path` and wrap it with [`diff_fragment`]
pub async fn load_diff(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::DiffNotFound(path.to_path_buf()));
    }
    let data = tokio::fs::read_to_string(path).await?;
    Ok(diff_fragment(&data))
}

/// Embed raw diff text between the start/end markers
pub fn diff_fragment(data: &str) -> String {
    format!("{DIFF_EXPLANATION}\n\n{DIFF_START_MARKER}\n{data}\n{DIFF_END_MARKER}\n")
}
