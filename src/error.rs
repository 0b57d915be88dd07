//! Pipeline error taxonomy
//!
//! Every failure is terminal for the current run: there are no automatic
//! retries, and a failed step leaves the caller's session state untouched.
//! The embedding application surfaces the error and lets the human restart
//! (new topic) or re-trigger the rewrite.

use thiserror::Error;

/// Errors surfaced by the content pipeline and its collaborators
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Topic was empty or whitespace-only; rejected before the research step
    #[error("topic must not be empty")]
    EmptyTopic,

    /// A required API key was not found in the environment
    #[error("missing credential: {0} is not set")]
    MissingCredential(&'static str),

    /// The search collaborator call failed (network, auth, rate limit)
    #[error("search collaborator failed: {detail}")]
    Search { detail: String },

    /// A language-model collaborator call failed (network, auth, rate limit)
    #[error("model collaborator failed: {detail}")]
    Model { detail: String },

    /// The model responded successfully but returned no completion choices
    #[error("model returned no completion choices")]
    EmptyCompletion,

    /// PDF document generation failed
    #[error("PDF export failed: {0}")]
    Export(String),
}
