//! Authentication for GitHub, GitLab and Vertex AI
//!
//! Tokens come from environment variables, read at the moment a client is
//! needed. The Vertex access token can also come from the gcloud CLI.

mod github;
mod gitlab;
mod vertex;

pub use github::{
    get_github_auth, github_auth_from, test_github_auth, GitHubAuthConfig, GITHUB_TOKEN_VARS,
};
pub use gitlab::{
    get_gitlab_auth, gitlab_auth_from, test_gitlab_auth, GitLabAuthConfig, DEFAULT_GITLAB_HOST,
    GITLAB_TOKEN_VARS,
};
pub use vertex::{get_vertex_auth, vertex_token_from_env, VertexAuthConfig, VERTEX_TOKEN_VAR};

use std::env;

/// Source of authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token from CLI tool (gcloud)
    Cli,
    /// Token from the named environment variable
    EnvVar(&'static str),
}

/// Read an environment variable, treating empty values as unset
pub fn env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// First variable in `names` that `lookup` resolves, with its name
fn first_set(
    names: &[&'static str],
    lookup: impl Fn(&str) -> Option<String>,
) -> Option<(String, AuthSource)> {
    names
        .iter()
        .copied()
        .find_map(|name| lookup(name).map(|token| (token, AuthSource::EnvVar(name))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_set_respects_priority() {
        let lookup = |name: &str| match name {
            "A" | "B" => Some(format!("{name}-token")),
            _ => None,
        };
        let (token, source) = first_set(&["A", "B"], lookup).unwrap();
        assert_eq!(token, "A-token");
        assert_eq!(source, AuthSource::EnvVar("A"));
    }

    #[test]
    fn test_first_set_falls_through() {
        let lookup = |name: &str| (name == "B").then(|| "b".to_string());
        let (_, source) = first_set(&["A", "B"], lookup).unwrap();
        assert_eq!(source, AuthSource::EnvVar("B"));
        assert!(first_set(&["A"], lookup).is_none());
    }
}
