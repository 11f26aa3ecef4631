//! GitHub issue tracker implementation

use crate::error::{Error, Result};
use crate::platform::IssueTracker;
use crate::types::{PostedComment, RepoSlug};
use async_trait::async_trait;
use octocrab::Octocrab;
use tracing::debug;

/// REST API base for a GitHub Enterprise host
pub fn github_api_base(host: &str) -> String {
    format!("https://{host}/api/v3")
}

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
    slug: RepoSlug,
}

impl GitHubService {
    /// Create a new GitHub service for `repo` (`owner/name`)
    ///
    /// `host` selects a GitHub Enterprise instance; `None` means github.com.
    pub fn new(token: &str, repo: &str, host: Option<&str>) -> Result<Self> {
        Self::build(token, repo, host.map(github_api_base))
    }

    /// Create a service talking to an explicit API base (e.g. `http://127.0.0.1:1234`)
    pub fn with_base_uri(token: &str, repo: &str, base_uri: &str) -> Result<Self> {
        Self::build(token, repo, Some(base_uri.to_string()))
    }

    fn build(token: &str, repo: &str, base_uri: Option<String>) -> Result<Self> {
        let slug = RepoSlug::parse(repo)?;
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        if let Some(base_uri) = base_uri {
            builder = builder
                .base_uri(base_uri)
                .map_err(|e| Error::GitHubApi(e.to_string()))?;
        }

        let client = builder.build().map_err(|e| Error::GitHubApi(e.to_string()))?;

        Ok(Self { client, slug })
    }
}

#[async_trait]
impl IssueTracker for GitHubService {
    async fn create_issue_comment(&self, issue: u64, body: &str) -> Result<PostedComment> {
        debug!(
            owner = %self.slug.owner,
            repo = %self.slug.name,
            issue,
            "creating GitHub issue comment"
        );
        let comment = self
            .client
            .issues(&self.slug.owner, &self.slug.name)
            .create_comment(issue, body)
            .await?;

        Ok(PostedComment {
            id: comment.id.0,
            html_url: comment.html_url.to_string(),
        })
    }
}
