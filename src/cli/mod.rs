//! CLI commands
//!
//! Command implementations for the `cicd-helper` binary.

mod auth;
mod github;
mod gitlab;
mod style;
mod vertex;

pub use auth::{run_auth, AuthAction};
pub use github::run_github_comment;
pub use gitlab::{run_gitlab_comment, run_gitlab_merge_request};
pub use vertex::run_vertex;

use anstream::eprintln;
use cicd_helper::error::Result;
use cicd_helper::input::resolve_comment;
use style::Stylize;

/// Explicit `--comment`, or everything on stdin until it is closed
async fn read_comment(comment: Option<String>) -> Result<String> {
    if comment.is_none() {
        eprintln!(
            "{}",
            "Reading the comment from stdin. Press Ctrl+D when done.".muted()
        );
    }
    resolve_comment(comment, tokio::io::stdin()).await
}

fn missing_token_message(vars: &[&str]) -> String {
    format!("Please set the {} environment variable.", vars.join(" or "))
}

/// Guidance for a tracker command run without its token
fn print_missing_token(vars: &[&str]) {
    anstream::println!("{}", missing_token_message(vars).warn().for_stdout());
}

/// Same guidance on stderr, for commands whose stdout is captured by pipelines
fn eprint_missing_token(vars: &[&str]) {
    eprintln!("{}", missing_token_message(vars).warn().for_stderr());
}
