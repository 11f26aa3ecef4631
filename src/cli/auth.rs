//! Auth command - test and explain authentication

use crate::cli::print_missing_token;
use crate::cli::style::Stylize;
use anstream::println;
use cicd_helper::auth::{
    get_github_auth, get_gitlab_auth, test_github_auth, test_gitlab_auth, AuthSource,
    GITHUB_TOKEN_VARS, GITLAB_TOKEN_VARS,
};
use cicd_helper::error::Result;
use cicd_helper::types::Platform;

/// What to do for a platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    /// Resolve the token and ask the service who it belongs to
    Test,
    /// Print setup instructions
    Setup,
}

/// Run an auth command
pub async fn run_auth(platform: Platform, action: AuthAction) -> Result<()> {
    match action {
        AuthAction::Test => run_auth_test(platform).await,
        AuthAction::Setup => {
            run_auth_setup(platform);
            Ok(())
        }
    }
}

fn describe(source: AuthSource) -> &'static str {
    match source {
        AuthSource::Cli => "CLI",
        AuthSource::EnvVar(name) => name,
    }
}

async fn run_auth_test(platform: Platform) -> Result<()> {
    match platform {
        Platform::GitHub => {
            println!("Testing GitHub authentication...");
            let Some(config) = get_github_auth() else {
                print_missing_token(&GITHUB_TOKEN_VARS);
                return Ok(());
            };
            let username = test_github_auth(&config).await?;
            println!("Authenticated as: {}", username.accent());
            println!("Token source: {}", describe(config.source));
            if let Some(host) = &config.host {
                println!("Host: {host}");
            }
        }
        Platform::GitLab => {
            println!("Testing GitLab authentication...");
            let Some(config) = get_gitlab_auth() else {
                print_missing_token(&GITLAB_TOKEN_VARS);
                return Ok(());
            };
            let username = test_gitlab_auth(&config).await?;
            println!("Authenticated as: {}", username.accent());
            println!("Token source: {}", describe(config.source));
            println!("Host: {}", config.host);
        }
    }
    Ok(())
}

fn run_auth_setup(platform: Platform) {
    match platform {
        Platform::GitHub => {
            println!("{}", "GitHub Authentication Setup".emphasis());
            println!("===========================");
            println!();
            println!("Set GITHUB_TOKEN (or GH_TOKEN) to a token with repo scope.");
            println!("In GitHub Actions: env: GITHUB_TOKEN: ${{{{ secrets.GITHUB_TOKEN }}}}");
            println!();
            println!("For GitHub Enterprise:");
            println!("  Set GH_HOST to your instance hostname");
        }
        Platform::GitLab => {
            println!("{}", "GitLab Authentication Setup".emphasis());
            println!("===========================");
            println!();
            println!("Set GITLAB_TOKEN (or GL_TOKEN) to a token with api scope.");
            println!("In GitLab CI, store it as a masked CI/CD variable.");
            println!();
            println!("For self-hosted GitLab:");
            println!("  Set GITLAB_HOST to your instance hostname");
        }
    }
}
