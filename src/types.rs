//! Core types for cicd-helper

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Hosted source platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// GitHub or GitHub Enterprise
    GitHub,
    /// GitLab or self-hosted GitLab
    GitLab,
}

/// A GitHub `owner/name` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub name: String,
}

impl RepoSlug {
    /// Split `owner/name` at the last slash
    pub fn parse(repo: &str) -> Result<Self> {
        match repo.rsplit_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() => Ok(Self {
                owner: owner.to_string(),
                name: name.to_string(),
            }),
            _ => Err(Error::InvalidRepo(repo.to_string())),
        }
    }
}

/// A comment/note created on an issue or merge request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedComment {
    /// Comment or note ID
    pub id: u64,
    /// Permalink to the comment
    pub html_url: String,
}

/// A GitLab merge request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MergeRequest {
    /// Project-scoped MR number
    pub iid: u64,
    /// Web URL for the MR
    pub web_url: String,
    /// Source branch name
    pub source_branch: String,
    /// Target branch name
    pub target_branch: String,
    /// MR title
    pub title: String,
}

/// Where a GitLab comment should go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentTarget {
    /// Issue number
    Issue(u64),
    /// Merge request number
    MergeRequest(u64),
}

impl CommentTarget {
    /// Pick a target from optional issue/MR numbers.
    ///
    /// The issue wins when both are present; `None` when neither is.
    pub const fn select(issue: Option<u64>, merge_request: Option<u64>) -> Option<Self> {
        match (issue, merge_request) {
            (Some(n), _) => Some(Self::Issue(n)),
            (None, Some(n)) => Some(Self::MergeRequest(n)),
            (None, None) => None,
        }
    }
}

/// Fixed knobs for a single text-generation request
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParameters {
    /// Output length cap in tokens
    pub max_output_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            max_output_tokens: 1024,
            temperature: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_slug_parse() {
        let slug = RepoSlug::parse("octo/hello-world").unwrap();
        assert_eq!(slug.owner, "octo");
        assert_eq!(slug.name, "hello-world");
    }

    #[test]
    fn test_repo_slug_rejects_bare_name() {
        assert!(matches!(
            RepoSlug::parse("hello-world"),
            Err(Error::InvalidRepo(_))
        ));
        assert!(RepoSlug::parse("octo/").is_err());
    }

    #[test]
    fn test_comment_target_issue_takes_precedence() {
        assert_eq!(
            CommentTarget::select(Some(3), Some(7)),
            Some(CommentTarget::Issue(3))
        );
    }

    #[test]
    fn test_comment_target_merge_request_only() {
        assert_eq!(
            CommentTarget::select(None, Some(7)),
            Some(CommentTarget::MergeRequest(7))
        );
        assert_eq!(CommentTarget::select(None, None), None);
    }

    #[test]
    fn test_generation_parameters_wire_format() {
        let json = serde_json::to_value(GenerationParameters::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "maxOutputTokens": 1024, "temperature": 0.0 })
        );
    }
}
