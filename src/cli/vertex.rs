//! vertex-* commands - summaries, reviews and release notes for a diff

use anstream::println;
use cicd_helper::error::Result;
use cicd_helper::vertex::{
    code_review, code_summary, release_notes, PromptKind, VertexClient, VertexConfig,
};
use std::path::Path;
use tracing::debug;

/// Run one of the vertex-* commands and print the trimmed answer
///
/// The access token is resolved on the first request, after the diff has been
/// read, so a bad path is reported even without credentials.
pub async fn run_vertex(config: &VertexConfig, kind: PromptKind, diff: &Path) -> Result<()> {
    debug!(
        project = %config.project,
        location = %config.location,
        "creating Vertex AI client"
    );
    let client = VertexClient::new(config)?;
    let text = match kind {
        PromptKind::Summary => code_summary(&client, diff).await?,
        PromptKind::Review => code_review(&client, diff).await?,
        PromptKind::ReleaseNotes => release_notes(&client, diff).await?,
    };
    println!("{}", text.trim());
    Ok(())
}
