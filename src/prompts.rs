//! Prompt construction for the draft and review collaborators

use crate::collaborators::DraftRequest;

/// Instruction prefix for the writer: body text only, no framing
pub const DRAFT_INSTRUCTION: &str =
    "Draft content. No intro/outro/meta-talk. Just the content:";

/// Instruction prefix for the reviewer
pub const REVIEW_INSTRUCTION: &str =
    "Critique this draft. Score 1-10 and list 3 strengths:";

/// Build the writer prompt from the session's inputs
///
/// An empty `feedback` field means a first draft; a rewrite carries the
/// human's rejection text so the model can address it.
pub fn build_draft_prompt(request: &DraftRequest<'_>) -> String {
    format!(
        "{} Topic: {}\nType: {}\nTone: {}\nNotes: {}\nFeedback: {}",
        DRAFT_INSTRUCTION,
        request.topic,
        request.content_type,
        request.tone,
        request.notes,
        request.feedback
    )
}

/// Build the reviewer prompt for a draft
pub fn build_review_prompt(draft: &str) -> String {
    format!("{} {}", REVIEW_INSTRUCTION, draft)
}
