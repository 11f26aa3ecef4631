//! gitlab-comment and gitlab-mergerequest commands

use crate::cli::style::{check, hyperlink_url, Stream, Stylize};
use crate::cli::{eprint_missing_token, print_missing_token, read_comment};
use anstream::println;
use cicd_helper::auth::{get_gitlab_auth, GITLAB_TOKEN_VARS};
use cicd_helper::error::Result;
use cicd_helper::platform::{create_gitlab_service, post_comment, report_latest_merge_request};
use cicd_helper::types::CommentTarget;

/// Run the gitlab-comment command
pub async fn run_gitlab_comment(
    project: &str,
    issue: Option<u64>,
    merge_request: Option<u64>,
    comment: Option<String>,
) -> Result<()> {
    let Some(target) = CommentTarget::select(issue, merge_request) else {
        println!(
            "{}",
            "Please specify either an issue or a merge request to comment on"
                .warn()
                .for_stdout()
        );
        return Ok(());
    };

    let Some(auth) = get_gitlab_auth() else {
        print_missing_token(&GITLAB_TOKEN_VARS);
        return Ok(());
    };

    let body = read_comment(comment).await?;
    let service = create_gitlab_service(&auth, project)?;
    let posted = post_comment(&service, target, &body).await?;

    let kind = match target {
        CommentTarget::Issue(_) => "issue",
        CommentTarget::MergeRequest(_) => "MR",
    };
    println!(
        "{} Posted a comment to Gitlab {kind}. Link: {}",
        check(),
        hyperlink_url(Stream::Stdout, &posted.html_url)
    );
    Ok(())
}

/// Run the gitlab-mergerequest command
///
/// The MR number is the only plain line on stdout so pipelines can capture it.
pub async fn run_gitlab_merge_request(project: &str, source: Option<&str>) -> Result<()> {
    let Some(auth) = get_gitlab_auth() else {
        eprint_missing_token(&GITLAB_TOKEN_VARS);
        return Ok(());
    };

    let service = create_gitlab_service(&auth, project)?;
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    report_latest_merge_request(&service, source, &mut stdout.lock(), &mut stderr.lock()).await?;
    Ok(())
}
