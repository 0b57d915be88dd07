//! Pipeline Orchestrator
//!
//! Sequences the three collaborators and the sanitizer into one linear run:
//! research → write → review → gate. A rejection at the gate re-runs the
//! write/review portion with the human's feedback; research never re-runs
//! once notes/urls exist, since rewrites affect draft quality and tone, not
//! factual grounding.
//!
//! Execution is strictly sequential: each step's input depends on the prior
//! step's output. No step is retried, no orchestrator-level timeout or
//! cancellation exists; a collaborator failure aborts the run with the
//! caller's previous state intact.

use crate::collaborators::{
    DraftCollaborator, DraftRequest, GroqModel, ReviewCollaborator, SearchCollaborator,
    TavilySearch,
};
use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::sanitizer::sanitize;
use crate::session::{ContentType, SessionState, Stage, Tone};
use tracing::info;

/// Orchestrates the content pipeline over three collaborator seams
pub struct Pipeline<S, D, R> {
    search: S,
    drafter: D,
    reviewer: R,
}

impl Pipeline<TavilySearch, GroqModel, GroqModel> {
    /// Wire up the production Tavily/Groq collaborators
    pub fn from_config(config: &PipelineConfig) -> Self {
        let model = GroqModel::new(config);
        Self::new(TavilySearch::new(config), model.clone(), model)
    }
}

impl<S, D, R> Pipeline<S, D, R>
where
    S: SearchCollaborator,
    D: DraftCollaborator,
    R: ReviewCollaborator,
{
    /// Build a pipeline from explicit collaborators
    pub fn new(search: S, drafter: D, reviewer: R) -> Self {
        Self {
            search,
            drafter,
            reviewer,
        }
    }

    /// Run a full project: research, first draft, review
    ///
    /// Rejects empty or whitespace-only topics before the research step.
    /// Returns a session waiting at the gate for a human decision.
    pub async fn begin(
        &self,
        topic: &str,
        content_type: ContentType,
        tone: Tone,
    ) -> Result<SessionState, PipelineError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(PipelineError::EmptyTopic);
        }

        let mut state = SessionState::new(topic, content_type, tone);

        state.stage = Stage::Researching;
        info!(topic, "research step starting");
        let findings = self.search.research(topic).await?;
        info!(sources = findings.urls.len(), "research step complete");
        state.notes = findings.notes;
        state.urls = findings.urls;

        self.write_and_review(state).await
    }

    /// Re-run the write/review portion with the human's feedback
    ///
    /// Never re-runs research and never mutates `notes`/`urls`. The input
    /// state is untouched; on success the returned state carries the new
    /// draft, its review, and the recorded feedback.
    pub async fn rewrite(
        &self,
        state: &SessionState,
        feedback: &str,
    ) -> Result<SessionState, PipelineError> {
        let mut next = state.clone();
        next.feedback = feedback.to_string();
        info!(topic = %next.topic, "rewrite requested");
        self.write_and_review(next).await
    }

    /// Draft (sanitized) then review, leaving the session at the gate
    async fn write_and_review(
        &self,
        mut state: SessionState,
    ) -> Result<SessionState, PipelineError> {
        state.stage = Stage::Writing;
        info!(topic = %state.topic, "write step starting");
        let raw = self
            .drafter
            .draft(&DraftRequest {
                topic: &state.topic,
                content_type: state.content_type,
                tone: state.tone,
                notes: &state.notes,
                feedback: &state.feedback,
            })
            .await?;
        let draft = sanitize(&raw);

        state.stage = Stage::Reviewing;
        info!(chars = draft.len(), "review step starting");
        let review = self.reviewer.review(&draft).await?;

        state.draft = draft;
        state.review = review;
        state.stage = Stage::Gate;
        info!("session waiting at gate");
        Ok(state)
    }
}
