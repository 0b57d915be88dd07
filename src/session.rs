//! Session state and pipeline vocabulary
//!
//! One record per user session, created empty at project start and carried
//! through research → write → review. Transitions return new values rather
//! than mutating a shared record, so no step sees another step's partial
//! writes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    BlogPost,
    Newsletter,
    ProductWriteUp,
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ContentType::BlogPost => "Blog Post",
            ContentType::Newsletter => "Newsletter",
            ContentType::ProductWriteUp => "Product Write-up",
        };
        f.write_str(label)
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Blog Post" => Ok(ContentType::BlogPost),
            "Newsletter" => Ok(ContentType::Newsletter),
            "Product Write-up" => Ok(ContentType::ProductWriteUp),
            other => Err(format!("unknown content type: {}", other)),
        }
    }
}

/// Supported writing tones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    FormalCorporate,
    CasualEngaging,
    TechnicalAcademic,
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tone::FormalCorporate => "Formal Corporate",
            Tone::CasualEngaging => "Casual/Engaging",
            Tone::TechnicalAcademic => "Technical/Academic",
        };
        f.write_str(label)
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Formal Corporate" => Ok(Tone::FormalCorporate),
            "Casual/Engaging" => Ok(Tone::CasualEngaging),
            "Technical/Academic" => Ok(Tone::TechnicalAcademic),
            other => Err(format!("unknown tone: {}", other)),
        }
    }
}

/// Where a session currently sits in the pipeline
///
/// `Gate` is the human decision point: publish moves to `Finished`, a
/// rejection re-runs write/review and returns to `Gate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Idle,
    Researching,
    Writing,
    Reviewing,
    Gate,
    Finished,
}

/// The per-session record threaded through all pipeline steps
///
/// Invariants:
/// - `notes`/`urls` are set exactly once per topic; rewrites never touch them
/// - `review` always describes the current `draft`
/// - `feedback` stays empty until a human rejects a draft, then holds the
///   most recent rejection's text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub topic: String,
    pub content_type: ContentType,
    pub tone: Tone,
    /// Research findings, newline-joined in the provider's relevance order
    pub notes: String,
    /// Source URLs, one per search result, same order as the notes
    pub urls: Vec<String>,
    /// Current sanitized draft
    pub draft: String,
    /// Critique of the current draft, displayed verbatim
    pub review: String,
    /// Most recent rewrite feedback; empty until the first rejection
    pub feedback: String,
    pub stage: Stage,
}

impl SessionState {
    /// Create an empty session for a new project
    pub fn new(topic: impl Into<String>, content_type: ContentType, tone: Tone) -> Self {
        Self {
            topic: topic.into(),
            content_type,
            tone,
            notes: String::new(),
            urls: Vec::new(),
            draft: String::new(),
            review: String::new(),
            feedback: String::new(),
            stage: Stage::Idle,
        }
    }

    /// Human approved the draft at the gate
    pub fn publish(mut self) -> Self {
        self.stage = Stage::Finished;
        self
    }

    /// Whether the session is waiting on a human decision
    pub fn at_gate(&self) -> bool {
        self.stage == Stage::Gate
    }

    /// Whether the session is complete and ready for export
    pub fn is_finished(&self) -> bool {
        self.stage == Stage::Finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for ct in [
            ContentType::BlogPost,
            ContentType::Newsletter,
            ContentType::ProductWriteUp,
        ] {
            assert_eq!(ct.to_string().parse::<ContentType>().unwrap(), ct);
        }
        for tone in [
            Tone::FormalCorporate,
            Tone::CasualEngaging,
            Tone::TechnicalAcademic,
        ] {
            assert_eq!(tone.to_string().parse::<Tone>().unwrap(), tone);
        }
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        assert!("Limerick".parse::<ContentType>().is_err());
        assert!("Sarcastic".parse::<Tone>().is_err());
    }

    #[test]
    fn test_new_session_is_empty_and_idle() {
        let state = SessionState::new("topic", ContentType::BlogPost, Tone::CasualEngaging);
        assert_eq!(state.stage, Stage::Idle);
        assert!(state.notes.is_empty());
        assert!(state.urls.is_empty());
        assert!(state.draft.is_empty());
        assert!(state.review.is_empty());
        assert!(state.feedback.is_empty());
    }

    #[test]
    fn test_publish_finishes_the_session() {
        let mut state = SessionState::new("topic", ContentType::Newsletter, Tone::FormalCorporate);
        state.stage = Stage::Gate;
        assert!(state.at_gate());

        let state = state.publish();
        assert!(state.is_finished());
        assert!(!state.at_gate());
    }
}
