//! Error types for cicd-helper

use std::path::PathBuf;
use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to GitHub, GitLab or Vertex AI
#[derive(Error, Debug)]
pub enum Error {
    /// Authentication error (rejected or unobtainable token)
    #[error("authentication error: {0}")]
    Auth(String),

    /// Mandatory environment variable is not set
    #[error("Please set {0} environment variable")]
    MissingEnv(&'static str),

    /// Repository identifier could not be split into owner and name
    #[error("invalid repository '{0}', expected owner/name")]
    InvalidRepo(String),

    /// GitHub API error
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// GitLab API error
    #[error("GitLab API error: {0}")]
    GitLabApi(String),

    /// Vertex AI API error
    #[error("Vertex AI API error: {0}")]
    VertexApi(String),

    /// Model answered without any prediction
    #[error("Vertex AI returned no predictions")]
    EmptyPrediction,

    /// Diff file does not exist
    #[error("{} does not exist", .0.display())]
    DiffNotFound(PathBuf),

    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<octocrab::Error> for Error {
    fn from(err: octocrab::Error) -> Self {
        Self::GitHubApi(err.to_string())
    }
}
