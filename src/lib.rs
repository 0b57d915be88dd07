//! ContentAlchemist core library
//!
//! A linear content-generation pipeline: research a topic through a web
//! search API, draft content with a language model, strip the draft of AI
//! meta-commentary, and produce a quality review. A human decision gate sits
//! between review and either publish or a feedback-driven rewrite of the
//! write/review portion. Finished content can be exported as a PDF.
//!
//! The crate is a library; the embedding application owns the UI and the
//! decision gate. Typical flow:
//!
//! ```no_run
//! use content_alchemist::{ContentType, Pipeline, PipelineConfig, Tone};
//!
//! # async fn run() -> Result<(), content_alchemist::PipelineError> {
//! let config = PipelineConfig::from_env()?;
//! let pipeline = Pipeline::from_config(&config);
//!
//! let state = pipeline
//!     .begin("AI in agriculture", ContentType::BlogPost, Tone::FormalCorporate)
//!     .await?;
//!
//! // Human rejected the draft at the gate:
//! let state = pipeline.rewrite(&state, "more formal").await?;
//!
//! // Human approved:
//! let state = state.publish();
//! let pdf = content_alchemist::render_document(&state.draft, &state.topic, &state.urls)?;
//! # Ok(())
//! # }
//! ```

pub mod collaborators;
pub mod config;
pub mod error;
pub mod export;
pub mod http;
pub mod pipeline;
pub mod prompts;
pub mod sanitizer;
pub mod session;
pub mod telemetry;

pub use config::PipelineConfig;
pub use error::PipelineError;
pub use export::render_document;
pub use pipeline::Pipeline;
pub use sanitizer::sanitize;
pub use session::{ContentType, SessionState, Stage, Tone};
