//! GitLab authentication

use crate::auth::{env_var, first_set, AuthSource};
use crate::error::{Error, Result};
use crate::platform::gitlab_api_base;
use reqwest::Client;
use serde::Deserialize;

/// Environment variables checked for a GitLab token, in priority order
pub const GITLAB_TOKEN_VARS: [&str; 2] = ["GITLAB_TOKEN", "GL_TOKEN"];

/// Default GitLab host
pub const DEFAULT_GITLAB_HOST: &str = "gitlab.com";

/// GitLab authentication configuration
#[derive(Debug, Clone)]
pub struct GitLabAuthConfig {
    /// Authentication token
    pub token: String,
    /// Where the token was obtained from
    pub source: AuthSource,
    /// GitLab host (e.g., "gitlab.com")
    pub host: String,
}

/// Get GitLab authentication from the process environment
///
/// Priority:
/// 1. `GITLAB_TOKEN` environment variable
/// 2. `GL_TOKEN` environment variable
///
/// The host comes from `GITLAB_HOST`, defaulting to gitlab.com.
pub fn get_gitlab_auth() -> Option<GitLabAuthConfig> {
    gitlab_auth_from(env_var)
}

/// Get GitLab authentication through an arbitrary variable lookup
pub fn gitlab_auth_from(lookup: impl Fn(&str) -> Option<String>) -> Option<GitLabAuthConfig> {
    let (token, source) = first_set(&GITLAB_TOKEN_VARS, &lookup)?;
    let host = lookup("GITLAB_HOST").unwrap_or_else(|| DEFAULT_GITLAB_HOST.to_string());
    Some(GitLabAuthConfig {
        token,
        source,
        host,
    })
}

#[derive(Deserialize)]
struct GitLabUser {
    username: String,
}

/// Test GitLab authentication, returning the authenticated username
pub async fn test_gitlab_auth(config: &GitLabAuthConfig) -> Result<String> {
    let url = format!("{}/user", gitlab_api_base(&config.host));

    let user: GitLabUser = Client::new()
        .get(&url)
        .header("PRIVATE-TOKEN", &config.token)
        .send()
        .await?
        .error_for_status()
        .map_err(|e| Error::Auth(format!("Invalid token: {e}")))?
        .json()
        .await?;

    Ok(user.username)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gitlab_default_host() {
        let auth = gitlab_auth_from(|name| (name == "GL_TOKEN").then(|| "t".into())).unwrap();
        assert_eq!(auth.host, "gitlab.com");
        assert_eq!(auth.source, AuthSource::EnvVar("GL_TOKEN"));
    }

    #[test]
    fn test_gitlab_self_hosted() {
        let auth = gitlab_auth_from(|name| match name {
            "GITLAB_TOKEN" => Some("t".into()),
            "GITLAB_HOST" => Some("git.example.org".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(auth.host, "git.example.org");
    }

    #[test]
    fn test_gitlab_missing_token_ignores_host() {
        let auth = gitlab_auth_from(|name| (name == "GITLAB_HOST").then(|| "h".into()));
        assert!(auth.is_none());
    }
}
