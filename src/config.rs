//! Pipeline configuration and credentials
//!
//! Credentials are read from the process environment (with a `.env` file
//! loaded first when present). Missing keys are rejected here, before any
//! network call is attempted.

use crate::error::PipelineError;
use std::env;

/// Default generation model (Groq-hosted, OpenAI-compatible endpoint)
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Default sampling temperature; low for predictable drafting
pub const DEFAULT_TEMPERATURE: f32 = 0.1;

const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
const TAVILY_BASE_URL: &str = "https://api.tavily.com";

/// Configuration for the content pipeline and its collaborators
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// API key for the Groq chat-completions endpoint (draft + review)
    pub groq_api_key: String,
    /// API key for the Tavily search endpoint (research)
    pub tavily_api_key: String,
    /// Model name passed to the chat-completions endpoint
    pub model: String,
    /// Sampling temperature for both draft and review calls
    pub temperature: f32,
    /// Base URL of the chat-completions API (overridable for tests)
    pub groq_base_url: String,
    /// Base URL of the search API (overridable for tests)
    pub tavily_base_url: String,
}

impl PipelineConfig {
    /// Build a config with default model settings from explicit keys
    pub fn new(groq_api_key: impl Into<String>, tavily_api_key: impl Into<String>) -> Self {
        Self {
            groq_api_key: groq_api_key.into(),
            tavily_api_key: tavily_api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            groq_base_url: GROQ_BASE_URL.to_string(),
            tavily_base_url: TAVILY_BASE_URL.to_string(),
        }
    }

    /// Load credentials from the environment
    ///
    /// Loads `.env` from the working directory first if present, then reads
    /// `GROQ_API_KEY` and `TAVILY_API_KEY`. Empty values count as missing.
    pub fn from_env() -> Result<Self, PipelineError> {
        let _ = dotenvy::dotenv();

        let groq_api_key = require_env("GROQ_API_KEY")?;
        let tavily_api_key = require_env("TAVILY_API_KEY")?;

        Ok(Self::new(groq_api_key, tavily_api_key))
    }
}

fn require_env(name: &'static str) -> Result<String, PipelineError> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(PipelineError::MissingCredential(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;
    use std::sync::Mutex;

    // Env vars are process-global; serialize the tests that touch them.
    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    #[test]
    fn test_from_env_reads_both_keys() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::set_var("GROQ_API_KEY", "gsk-test");
        env::set_var("TAVILY_API_KEY", "tvly-test");

        let config = PipelineConfig::from_env().unwrap();
        assert_eq!(config.groq_api_key, "gsk-test");
        assert_eq!(config.tavily_api_key, "tvly-test");
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_missing_key_is_rejected_before_any_io() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::set_var("GROQ_API_KEY", "gsk-test");
        env::remove_var("TAVILY_API_KEY");

        let err = PipelineConfig::from_env().unwrap_err();
        assert!(matches!(
            err,
            PipelineError::MissingCredential("TAVILY_API_KEY")
        ));
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::set_var("GROQ_API_KEY", "   ");
        env::set_var("TAVILY_API_KEY", "tvly-test");

        let err = PipelineConfig::from_env().unwrap_err();
        assert!(matches!(
            err,
            PipelineError::MissingCredential("GROQ_API_KEY")
        ));
    }
}
