//! cicd-helper - glue between CI pipelines and GitHub, GitLab and Vertex AI
//!
//! Posts comments to issues and merge requests, looks up the latest merge
//! request for a branch, and asks a hosted text model to summarize, review or
//! write release notes for a Git diff.

pub mod auth;
pub mod error;
pub mod input;
pub mod platform;
pub mod types;
pub mod vertex;
