//! GitLab issue and merge request implementation

use crate::auth::DEFAULT_GITLAB_HOST;
use crate::error::{Error, Result};
use crate::platform::{IssueTracker, MergeRequestTracker};
use crate::types::{MergeRequest, PostedComment};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// REST API base for a GitLab host
pub fn gitlab_api_base(host: &str) -> String {
    format!("https://{host}/api/v4")
}

/// GitLab service using reqwest
pub struct GitLabService {
    client: Client,
    token: String,
    api_base: String,
    project: String,
}

/// Issue or merge request, only the fields needed for a permalink
#[derive(Deserialize)]
struct Noteable {
    web_url: String,
}

#[derive(Deserialize)]
struct Note {
    id: u64,
}

/// Path segment for notes on issues vs merge requests
#[derive(Clone, Copy)]
enum NoteableKind {
    Issue,
    MergeRequest,
}

impl NoteableKind {
    const fn path(self) -> &'static str {
        match self {
            Self::Issue => "issues",
            Self::MergeRequest => "merge_requests",
        }
    }
}

impl GitLabService {
    /// Create a new GitLab service
    pub fn new(token: String, project: String, host: Option<&str>) -> Result<Self> {
        let api_base = gitlab_api_base(host.unwrap_or(DEFAULT_GITLAB_HOST));
        Self::build(token, project, api_base)
    }

    /// Create a service talking to an explicit API base (e.g. `http://localhost:1234/api/v4`)
    pub fn with_api_base(token: String, project: String, api_base: &str) -> Result<Self> {
        Self::build(token, project, api_base.trim_end_matches('/').to_string())
    }

    fn build(token: String, project: String, api_base: String) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| Error::GitLabApi(e.to_string()))?;

        Ok(Self {
            client,
            token,
            api_base,
            project,
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    fn encoded_project(&self) -> String {
        urlencoding::encode(&self.project).into_owned()
    }

    /// Fetch the issue/MR, then add a note to it.
    ///
    /// The note response carries no URL, so the permalink is built from the
    /// parent's `web_url` plus a `#note_<id>` anchor.
    async fn create_note(&self, kind: NoteableKind, iid: u64, body: &str) -> Result<PostedComment> {
        let url = self.api_url(&format!(
            "/projects/{}/{}/{}",
            self.encoded_project(),
            kind.path(),
            iid
        ));
        debug!(%url, "creating GitLab note");

        let parent: Noteable = self
            .client
            .get(&url)
            .header("PRIVATE-TOKEN", &self.token)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::GitLabApi(e.to_string()))?
            .json()
            .await?;

        let note: Note = self
            .client
            .post(format!("{url}/notes"))
            .header("PRIVATE-TOKEN", &self.token)
            .json(&serde_json::json!({ "body": body }))
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::GitLabApi(e.to_string()))?
            .json()
            .await?;

        Ok(PostedComment {
            id: note.id,
            html_url: format!("{}#note_{}", parent.web_url, note.id),
        })
    }
}

#[async_trait]
impl IssueTracker for GitLabService {
    async fn create_issue_comment(&self, issue: u64, body: &str) -> Result<PostedComment> {
        self.create_note(NoteableKind::Issue, issue, body).await
    }
}

#[async_trait]
impl MergeRequestTracker for GitLabService {
    async fn create_merge_request_comment(
        &self,
        merge_request: u64,
        body: &str,
    ) -> Result<PostedComment> {
        self.create_note(NoteableKind::MergeRequest, merge_request, body)
            .await
    }

    async fn find_latest_merge_request(
        &self,
        source_branch: Option<&str>,
    ) -> Result<Option<MergeRequest>> {
        let url = self.api_url(&format!(
            "/projects/{}/merge_requests",
            self.encoded_project()
        ));
        debug!(%url, ?source_branch, "listing GitLab merge requests");

        let mut request = self.client.get(&url).header("PRIVATE-TOKEN", &self.token);
        if let Some(branch) = source_branch {
            request = request.query(&[("source_branch", branch)]);
        }

        let mrs: Vec<MergeRequest> = request
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::GitLabApi(e.to_string()))?
            .json()
            .await?;

        Ok(mrs.into_iter().next())
    }
}
