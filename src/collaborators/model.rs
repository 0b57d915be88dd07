//! Groq chat-completions client
//!
//! Drafting and reviewing share one client against the OpenAI-compatible
//! chat-completions endpoint: a single user message in, the first choice's
//! content out. Low temperature keeps redrafts close to the notes instead
//! of inventing new material.

use super::{DraftCollaborator, DraftRequest, ReviewCollaborator};
use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::http;
use crate::prompts::{build_draft_prompt, build_review_prompt};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Groq-backed draft and review collaborator
#[derive(Clone)]
pub struct GroqModel {
    client: Client,
    api_key: String,
    model: String,
    temperature: f32,
    base_url: String,
}

impl GroqModel {
    /// Create a model client from the pipeline config
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            client: http::model_client().clone(),
            api_key: config.groq_api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            base_url: config.groq_base_url.clone(),
        }
    }

    /// Send one single-message completion request and return the text
    async fn complete(&self, prompt: &str) -> Result<String, PipelineError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| PipelineError::Model {
                detail: format!("request failed: {}", e),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            tracing::warn!("[GroqModel] API error ({}): {}", status, text);
            return Err(PipelineError::Model {
                detail: format!("API error ({}): {}", status, text),
            });
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| PipelineError::Model {
            detail: format!("failed to parse response: {}", e),
        })?;

        parsed.into_content()
    }
}

#[async_trait]
impl DraftCollaborator for GroqModel {
    async fn draft(&self, request: &DraftRequest<'_>) -> Result<String, PipelineError> {
        self.complete(&build_draft_prompt(request)).await
    }
}

#[async_trait]
impl ReviewCollaborator for GroqModel {
    async fn review(&self, draft: &str) -> Result<String, PipelineError> {
        self.complete(&build_review_prompt(draft)).await
    }
}

// API request/response types

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

impl ChatResponse {
    fn into_content(self) -> Result<String, PipelineError> {
        self.choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(PipelineError::EmptyCompletion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_choice_content_is_extracted() {
        let raw = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "The draft."}},
                {"message": {"role": "assistant", "content": "Ignored."}}
            ]
        }"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.into_content().unwrap(), "The draft.");
    }

    #[test]
    fn test_no_choices_is_an_error() {
        let parsed: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(matches!(
            parsed.into_content(),
            Err(PipelineError::EmptyCompletion)
        ));
    }

    #[test]
    fn test_request_serializes_single_user_message() {
        let request = ChatRequest {
            model: "llama-3.3-70b-versatile",
            messages: vec![ChatMessage {
                role: "user",
                content: "hello",
            }],
            temperature: 0.1,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "llama-3.3-70b-versatile");
        assert_eq!(value["messages"][0]["role"], "user");
        let temperature = value["temperature"].as_f64().unwrap();
        assert!((temperature - 0.1).abs() < 1e-6);
    }
}
