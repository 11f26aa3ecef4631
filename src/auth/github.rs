//! GitHub authentication

use crate::auth::{env_var, first_set, AuthSource};
use crate::error::{Error, Result};
use crate::platform::github_api_base;

/// Environment variables checked for a GitHub token, in priority order
pub const GITHUB_TOKEN_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

/// GitHub authentication configuration
#[derive(Debug, Clone)]
pub struct GitHubAuthConfig {
    /// Authentication token
    pub token: String,
    /// Where the token was obtained from
    pub source: AuthSource,
    /// GitHub Enterprise host from `GH_HOST` (None for github.com)
    pub host: Option<String>,
}

/// Get GitHub authentication from the process environment
///
/// Priority:
/// 1. `GITHUB_TOKEN` environment variable
/// 2. `GH_TOKEN` environment variable
///
/// Returns `None` when no token is set; callers print guidance instead of failing.
pub fn get_github_auth() -> Option<GitHubAuthConfig> {
    github_auth_from(env_var)
}

/// Get GitHub authentication through an arbitrary variable lookup
pub fn github_auth_from(lookup: impl Fn(&str) -> Option<String>) -> Option<GitHubAuthConfig> {
    let (token, source) = first_set(&GITHUB_TOKEN_VARS, &lookup)?;
    Some(GitHubAuthConfig {
        token,
        source,
        host: lookup("GH_HOST"),
    })
}

/// Test GitHub authentication, returning the authenticated login
pub async fn test_github_auth(config: &GitHubAuthConfig) -> Result<String> {
    let mut builder = octocrab::Octocrab::builder().personal_token(config.token.clone());
    if let Some(host) = &config.host {
        builder = builder
            .base_uri(github_api_base(host))
            .map_err(|e| Error::GitHubApi(e.to_string()))?;
    }
    let octocrab = builder.build().map_err(|e| Error::GitHubApi(e.to_string()))?;

    let user = octocrab
        .current()
        .user()
        .await
        .map_err(|e| Error::Auth(format!("Invalid token: {e}")))?;

    Ok(user.login)
}
