//! Issue tracker services for GitHub and GitLab
//!
//! Each command builds one service and calls one method on it.

mod factory;
mod github;
mod gitlab;

pub use factory::{create_github_service, create_gitlab_service};
pub use github::{github_api_base, GitHubService};
pub use gitlab::{gitlab_api_base, GitLabService};

use crate::error::Result;
use crate::types::{CommentTarget, MergeRequest, PostedComment};
use async_trait::async_trait;
use std::io::Write;

/// Issue comment operations shared by GitHub and GitLab
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Post a comment to an issue, returning the created comment
    async fn create_issue_comment(&self, issue: u64, body: &str) -> Result<PostedComment>;
}

/// Merge request operations (GitLab)
#[async_trait]
pub trait MergeRequestTracker: IssueTracker {
    /// Post a comment to a merge request, returning the created note
    async fn create_merge_request_comment(
        &self,
        merge_request: u64,
        body: &str,
    ) -> Result<PostedComment>;

    /// First merge request the service lists for `source_branch`
    ///
    /// Ordering is whatever the service returns by default (newest first on
    /// GitLab); nothing is sorted locally.
    async fn find_latest_merge_request(
        &self,
        source_branch: Option<&str>,
    ) -> Result<Option<MergeRequest>>;
}

/// Post `body` to the issue or merge request named by `target`
pub async fn post_comment(
    tracker: &dyn MergeRequestTracker,
    target: CommentTarget,
    body: &str,
) -> Result<PostedComment> {
    match target {
        CommentTarget::Issue(issue) => tracker.create_issue_comment(issue, body).await,
        CommentTarget::MergeRequest(mr) => tracker.create_merge_request_comment(mr, body).await,
    }
}

/// Look up the latest merge request and report it.
///
/// Found: a status line on `err` and the bare MR number as the only line on
/// `out`. Not found: a status line on `err`, nothing on `out`.
pub async fn report_latest_merge_request(
    tracker: &dyn MergeRequestTracker,
    source_branch: Option<&str>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Option<u64>> {
    let branch = source_branch.unwrap_or("any branch");

    match tracker.find_latest_merge_request(source_branch).await? {
        Some(mr) => {
            writeln!(err, "Latest merge request for {branch} is {}", mr.iid)?;
            writeln!(out, "{}", mr.iid)?;
            Ok(Some(mr.iid))
        }
        None => {
            writeln!(err, "No merge requests found for {branch}")?;
            Ok(None)
        }
    }
}
