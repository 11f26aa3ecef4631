//! github-comment command - post a comment to a GitHub issue

use crate::cli::style::{check, hyperlink_url, Stream};
use crate::cli::{print_missing_token, read_comment};
use anstream::println;
use cicd_helper::auth::{get_github_auth, GITHUB_TOKEN_VARS};
use cicd_helper::error::Result;
use cicd_helper::platform::{create_github_service, IssueTracker};

/// Run the github-comment command
pub async fn run_github_comment(repo: &str, issue: u64, comment: Option<String>) -> Result<()> {
    let Some(auth) = get_github_auth() else {
        print_missing_token(&GITHUB_TOKEN_VARS);
        return Ok(());
    };

    let body = read_comment(comment).await?;
    let service = create_github_service(&auth, repo)?;
    let posted = service.create_issue_comment(issue, &body).await?;

    println!(
        "{} Posted a comment to GitHub issue. Link: {}",
        check(),
        hyperlink_url(Stream::Stdout, &posted.html_url)
    );
    Ok(())
}
