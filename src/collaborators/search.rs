//! Tavily search client
//!
//! Research collaborator backed by the Tavily search API. One POST per
//! topic; the response's results are flattened into newline-joined notes
//! plus an ordered URL list for source attribution.

use super::{ResearchFindings, SearchCollaborator};
use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::http;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

/// Search depth requested from Tavily; "advanced" returns richer content
const SEARCH_DEPTH: &str = "advanced";

/// Tavily-backed research collaborator
#[derive(Clone)]
pub struct TavilySearch {
    client: Client,
    api_key: String,
    base_url: String,
}

impl TavilySearch {
    /// Create a search client from the pipeline config
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            client: http::search_client().clone(),
            api_key: config.tavily_api_key.clone(),
            base_url: config.tavily_base_url.clone(),
        }
    }
}

#[async_trait]
impl SearchCollaborator for TavilySearch {
    async fn research(&self, topic: &str) -> Result<ResearchFindings, PipelineError> {
        let body = json!({
            "api_key": self.api_key,
            "query": topic,
            "search_depth": SEARCH_DEPTH,
        });

        let response = self
            .client
            .post(format!("{}/search", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| PipelineError::Search {
                detail: format!("request failed: {}", e),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            tracing::warn!("[TavilySearch] API error ({}): {}", status, text);
            return Err(PipelineError::Search {
                detail: format!("API error ({}): {}", status, text),
            });
        }

        let parsed: SearchResponse =
            response.json().await.map_err(|e| PipelineError::Search {
                detail: format!("failed to parse response: {}", e),
            })?;

        Ok(parsed.into_findings())
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    content: String,
    url: String,
}

impl SearchResponse {
    /// Flatten results into findings, preserving the provider's relevance order
    fn into_findings(self) -> ResearchFindings {
        let notes = self
            .results
            .iter()
            .map(|r| r.content.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        let urls = self.results.into_iter().map(|r| r.url).collect();
        ResearchFindings { notes, urls }
    }
}
