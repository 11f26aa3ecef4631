//! cicd-helper - CI/CD glue for GitHub, GitLab and Vertex AI
//!
//! CLI binary: comment on issues and merge requests, find the latest merge
//! request for a branch, and turn Git diffs into summaries, reviews and
//! release notes.

use anyhow::Result;
use cicd_helper::types::Platform;
use cicd_helper::vertex::{PromptKind, VertexConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;

#[derive(Parser)]
#[command(name = "cicd-helper")]
#[command(about = "CI/CD helper for GitHub, GitLab and Vertex AI")]
#[command(version)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Post a comment to a GitHub issue
    GithubComment {
        /// The repository to use (format: user/repo)
        #[arg(long)]
        repo: String,

        /// The issue number
        #[arg(long)]
        issue: u64,

        /// The comment to post (read from stdin when omitted)
        #[arg(long)]
        comment: Option<String>,
    },

    /// Post a comment to a GitLab issue or merge request
    GitlabComment {
        /// The project to use (format: user/repo)
        #[arg(long)]
        project: String,

        /// The issue number (takes precedence over --mergerequest)
        #[arg(long)]
        issue: Option<u64>,

        /// The merge request number
        #[arg(long)]
        mergerequest: Option<u64>,

        /// The comment to post (read from stdin when omitted)
        #[arg(long)]
        comment: Option<String>,
    },

    /// Find the most recent merge request for a source branch
    GitlabMergerequest {
        /// The project to use (format: user/repo)
        #[arg(long)]
        project: String,

        /// The name of the source branch of the merge request
        #[arg(long)]
        source: Option<String>,
    },

    /// Write a human-readable summary of a Git diff
    VertexCodeSummary {
        /// Path to the Git diff
        #[arg(long)]
        diff: PathBuf,
    },

    /// Review a Git diff
    VertexCodeReview {
        /// Path to the Git diff
        #[arg(long)]
        diff: PathBuf,
    },

    /// Write release notes for a Git diff
    VertexReleaseNotes {
        /// Path to the Git diff
        #[arg(long)]
        diff: PathBuf,
    },

    /// Authentication management
    Auth {
        #[command(subcommand)]
        platform: AuthPlatform,
    },
}

#[derive(Subcommand)]
enum AuthPlatform {
    /// GitHub authentication
    Github {
        #[command(subcommand)]
        action: AuthAction,
    },
    /// GitLab authentication
    Gitlab {
        #[command(subcommand)]
        action: AuthAction,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Test authentication
    Test,
    /// Show authentication setup instructions
    Setup,
}

impl From<AuthAction> for cli::AuthAction {
    fn from(action: AuthAction) -> Self {
        match action {
            AuthAction::Test => Self::Test,
            AuthAction::Setup => Self::Setup,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "cicd_helper=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::GithubComment {
            repo,
            issue,
            comment,
        } => {
            cli::run_github_comment(&repo, issue, comment).await?;
        }
        Commands::GitlabComment {
            project,
            issue,
            mergerequest,
            comment,
        } => {
            cli::run_gitlab_comment(&project, issue, mergerequest, comment).await?;
        }
        Commands::GitlabMergerequest { project, source } => {
            cli::run_gitlab_merge_request(&project, source.as_deref()).await?;
        }
        Commands::VertexCodeSummary { diff } => {
            let config = VertexConfig::from_env()?;
            cli::run_vertex(&config, PromptKind::Summary, &diff).await?;
        }
        Commands::VertexCodeReview { diff } => {
            let config = VertexConfig::from_env()?;
            cli::run_vertex(&config, PromptKind::Review, &diff).await?;
        }
        Commands::VertexReleaseNotes { diff } => {
            let config = VertexConfig::from_env()?;
            cli::run_vertex(&config, PromptKind::ReleaseNotes, &diff).await?;
        }
        Commands::Auth { platform } => match platform {
            AuthPlatform::Github { action } => {
                cli::run_auth(Platform::GitHub, action.into()).await?;
            }
            AuthPlatform::Gitlab { action } => {
                cli::run_auth(Platform::GitLab, action.into()).await?;
            }
        },
    }

    Ok(())
}
