//! Google Cloud access token for Vertex AI

use crate::auth::{env_var, AuthSource};
use crate::error::{Error, Result};
use tokio::process::Command;

/// Environment variable holding a ready-made OAuth access token
pub const VERTEX_TOKEN_VAR: &str = "GOOGLE_OAUTH_ACCESS_TOKEN";

/// Vertex AI authentication configuration
#[derive(Debug, Clone)]
pub struct VertexAuthConfig {
    /// OAuth bearer token
    pub token: String,
    /// Where the token was obtained from
    pub source: AuthSource,
}

/// Get an access token for Vertex AI
///
/// Priority:
/// 1. `GOOGLE_OAUTH_ACCESS_TOKEN` environment variable
/// 2. gcloud CLI (`gcloud auth print-access-token`)
///
/// Unlike the tracker tokens, a missing token here is an error.
pub async fn get_vertex_auth() -> Result<VertexAuthConfig> {
    if let Some(token) = vertex_token_from_env() {
        return Ok(VertexAuthConfig {
            token,
            source: AuthSource::EnvVar(VERTEX_TOKEN_VAR),
        });
    }

    if let Some(token) = get_gcloud_cli_token().await {
        return Ok(VertexAuthConfig {
            token,
            source: AuthSource::Cli,
        });
    }

    Err(Error::Auth(format!(
        "No Google Cloud access token found. Run `gcloud auth login` or set {VERTEX_TOKEN_VAR}"
    )))
}

/// Access token from the environment, if set
pub fn vertex_token_from_env() -> Option<String> {
    env_var(VERTEX_TOKEN_VAR)
}

async fn get_gcloud_cli_token() -> Option<String> {
    let output = Command::new("gcloud")
        .args(["auth", "print-access-token"])
        .output()
        .await
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}
