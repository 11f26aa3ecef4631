//! Vertex AI text generation for Git diffs
//!
//! Each operation loads a diff, wraps it in a role-specific prompt and returns
//! the model's answer.

mod client;
mod config;
mod diff;
mod prompts;

pub use client::{TextGenerator, VertexClient};
pub use config::{VertexConfig, DEFAULT_LOCATION, LOCATION_VAR, MODEL_NAME, PROJECT_VAR};
pub use diff::{diff_fragment, load_diff, DIFF_END_MARKER, DIFF_START_MARKER};
pub use prompts::{build_prompt, PromptKind};

use crate::error::Result;
use crate::types::GenerationParameters;
use std::path::Path;
use tracing::debug;

/// Generate text of the given kind for the diff at `diff_path`
pub async fn generate(
    generator: &dyn TextGenerator,
    kind: PromptKind,
    diff_path: &Path,
) -> Result<String> {
    let fragment = load_diff(diff_path).await?;
    let prompt = build_prompt(kind, &fragment);
    debug!(?kind, prompt_len = prompt.len(), "requesting generation");
    generator
        .predict(&prompt, &GenerationParameters::default())
        .await
}

/// Summary of the most important changes in a diff
pub async fn code_summary(generator: &dyn TextGenerator, diff_path: &Path) -> Result<String> {
    generate(generator, PromptKind::Summary, diff_path).await
}

/// Code review with improvement suggestions for a diff
pub async fn code_review(generator: &dyn TextGenerator, diff_path: &Path) -> Result<String> {
    generate(generator, PromptKind::Review, diff_path).await
}

/// Markdown release notes for a diff
pub async fn release_notes(generator: &dyn TextGenerator, diff_path: &Path) -> Result<String> {
    generate(generator, PromptKind::ReleaseNotes, diff_path).await
}
