//! Role-specific prompt templates

/// What the model is asked to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Human-readable summary of the changes
    Summary,
    /// Code review with suggestions
    Review,
    /// Markdown bullet-point release notes
    ReleaseNotes,
}

impl PromptKind {
    /// Fixed instruction placed before the diff
    pub const fn preamble(self) -> &'static str {
        match self {
            Self::Summary => "\
You are an experienced software engineer.

Provide a summary of the most important changes based on the following Git diff:",
            Self::Review => "\
You are an experienced software engineer.
You only comment on code that you found in the merge request diff.
Provide a code review with suggestions for the most important
improvements based on the following Git diff:",
            Self::ReleaseNotes => "\
You are an experienced tech writer.
Write short release notes as markdown bullet points for the most important changes based on the following Git diff:",
        }
    }
}

/// Full prompt: preamble, blank line, diff fragment
pub fn build_prompt(kind: PromptKind, diff_fragment: &str) -> String {
    format!("{}\n\n{diff_fragment}", kind.preamble())
}
