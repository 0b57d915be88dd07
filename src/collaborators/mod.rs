//! External collaborator interfaces
//!
//! One trait per capability (search, generation, critique). The workflow is
//! fixed and linear, so there is no dynamic tool-dispatch layer: each step
//! is an explicit, statically-typed call taking a narrow input and returning
//! a narrow output. Production implementations are thin HTTP clients; tests
//! substitute in-memory stubs.

pub mod model;
pub mod search;

pub use model::GroqModel;
pub use search::TavilySearch;

use crate::error::PipelineError;
use crate::session::{ContentType, Tone};
use async_trait::async_trait;

/// What the research step produces for a topic
#[derive(Debug, Clone, PartialEq)]
pub struct ResearchFindings {
    /// Result contents newline-joined in the provider's relevance order
    pub notes: String,
    /// One URL per result, same order as the notes
    pub urls: Vec<String>,
}

/// Inputs for one draft (or redraft) call
#[derive(Debug, Clone, Copy)]
pub struct DraftRequest<'a> {
    pub topic: &'a str,
    pub content_type: ContentType,
    pub tone: Tone,
    pub notes: &'a str,
    /// Empty string means first draft
    pub feedback: &'a str,
}

/// Gathers verified facts and source URLs for a topic
#[async_trait]
pub trait SearchCollaborator: Send + Sync {
    /// Research a topic. Failure produces no partial notes.
    async fn research(&self, topic: &str) -> Result<ResearchFindings, PipelineError>;
}

/// Generates content from topic, format, tone, notes, and feedback
///
/// The caller instructs the model to omit meta-talk, but enforcement of
/// that is the sanitizer's job, not a guarantee of this interface.
#[async_trait]
pub trait DraftCollaborator: Send + Sync {
    /// Produce a raw draft (body text, unsanitized)
    async fn draft(&self, request: &DraftRequest<'_>) -> Result<String, PipelineError>;
}

/// Audits a draft for quality
#[async_trait]
pub trait ReviewCollaborator: Send + Sync {
    /// Critique a draft: free text with a 1-10 score and three strengths,
    /// displayed verbatim and never parsed by the orchestrator
    async fn review(&self, draft: &str) -> Result<String, PipelineError>;
}
