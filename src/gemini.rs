//! Client for the hosted generative-language API.
//!
//! The upstream is consumed through the [`ItineraryGenerator`] trait so
//! the request cycle can be exercised in tests without network access.
//! The concrete [`GeminiClient`] is constructed explicitly from
//! configuration and passed to whoever needs it; there is no ambient
//! global client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use tracing::instrument;

use crate::{PlannerError, Result, config::GeminiConfig};

/// Consumed interface of the generative-AI collaborator.
#[async_trait]
pub trait ItineraryGenerator: Send + Sync {
    /// Send one prompt upstream and return the generated itinerary text.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// HTTP client for the Google generative-language `generateContent`
/// endpoint, with a request timeout and bounded retry with backoff.
pub struct GeminiClient {
    http: ClientWithMiddleware,
    base_url: String,
    model: String,
    api_key: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl GeminiClient {
    /// Build a client from validated configuration.
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| PlannerError::config("Missing Gemini API key"))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()
            .map_err(|e| PlannerError::general(format!("Failed to build HTTP client: {e}")))?;

        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(config.max_retries);
        let http = ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
        })
    }
}

#[async_trait]
impl ItineraryGenerator for GeminiClient {
    #[instrument(skip(self, prompt))]
    async fn generate(&self, prompt: &str) -> Result<String> {
        tracing::debug!("Calling the generative API");
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let response = self
            .http
            .post(&url)
            .json(&wire::GenerateContentRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(|e| PlannerError::upstream(format!("Generative API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PlannerError::upstream(format!(
                "Generative API returned HTTP {status}"
            )));
        }

        let response: wire::GenerateContentResponse = response.json().await.map_err(|e| {
            PlannerError::upstream(format!("Failed to parse generative API response: {e}"))
        })?;

        response
            .first_text()
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| PlannerError::upstream("Generative API returned empty content"))
    }
}

/// Request/response structures of the `generateContent` endpoint
mod wire {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize)]
    pub struct GenerateContentRequest {
        pub contents: Vec<Content>,
    }

    #[derive(Debug, Serialize)]
    pub struct Content {
        pub parts: Vec<Part>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Part {
        pub text: String,
    }

    impl GenerateContentRequest {
        pub fn from_prompt(prompt: &str) -> Self {
            Self {
                contents: vec![Content {
                    parts: vec![Part {
                        text: prompt.to_string(),
                    }],
                }],
            }
        }
    }

    #[derive(Debug, Deserialize)]
    pub struct GenerateContentResponse {
        #[serde(default)]
        pub candidates: Vec<Candidate>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Candidate {
        pub content: Option<CandidateContent>,
    }

    #[derive(Debug, Deserialize)]
    pub struct CandidateContent {
        #[serde(default)]
        pub parts: Vec<Part>,
    }

    impl GenerateContentResponse {
        /// Text of the first part of the first candidate, if any.
        pub fn first_text(self) -> Option<String> {
            self.candidates
                .into_iter()
                .next()?
                .content?
                .parts
                .into_iter()
                .next()
                .map(|part| part.text)
        }
    }
}
