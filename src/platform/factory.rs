//! Service factories
//!
//! Combine resolved credentials with the repository named on the command line.

use crate::auth::{GitHubAuthConfig, GitLabAuthConfig};
use crate::error::Result;
use crate::platform::{GitHubService, GitLabService};
use tracing::debug;

/// Create a GitHub service for `repo` (`owner/name`)
pub fn create_github_service(auth: &GitHubAuthConfig, repo: &str) -> Result<GitHubService> {
    debug!(repo, source = ?auth.source, "creating GitHub client");
    GitHubService::new(&auth.token, repo, auth.host.as_deref())
}

/// Create a GitLab service for `project` (`group/name` or numeric id)
pub fn create_gitlab_service(auth: &GitLabAuthConfig, project: &str) -> Result<GitLabService> {
    debug!(project, host = %auth.host, source = ?auth.source, "creating GitLab client");
    GitLabService::new(auth.token.clone(), project.to_string(), Some(&auth.host))
}
