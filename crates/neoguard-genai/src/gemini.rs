//! Gemini Provider Implementation
//!
//! Integration with the Google generative-language API. One prompt goes
//! in as a single-part content list, one block of generated text comes
//! back. The pipeline layers its own parsing and fallbacks on top, so
//! this client reports failures instead of retrying.
//!
//! # Authentication
//!
//! The service authenticates with an API key passed as the `key` query
//! parameter. No Authorization header is sent; bearer tokens belong to
//! the media-analysis API, which is configured separately.

use std::time::Duration;

use async_trait::async_trait;
use neoguard_domain::TextGenerator;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::GenerationError;

/// Default generative-language API base
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model used for verification prompts
pub const DEFAULT_MODEL: &str = "gemini-pro";

/// Default timeout for generation requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for a [`GeminiClient`]
///
/// Carried explicitly rather than read from the environment, so two
/// clients with different keys or models can coexist in one process.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API base, up to and including the version segment
    pub api_base_url: String,
    /// Model name, e.g. `gemini-pro`
    pub model: String,
    /// API key sent as the `key` query parameter
    pub api_key: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeminiConfig {
    /// Config with the default endpoint, model and timeout
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Client for the generateContent endpoint
pub struct GeminiClient {
    config: GeminiConfig,
    client: reqwest::Client,
}

/// Request body for generateContent
#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

/// Response body for generateContent
///
/// Every level defaults when absent so a sparse or unexpected body
/// surfaces as a missing-text failure, not a deserialization error.
#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<ResponseCandidate>,
}

#[derive(Deserialize, Default)]
struct ResponseCandidate {
    #[serde(default)]
    content: ResponseContent,
}

#[derive(Deserialize, Default)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

impl GeminiClient {
    /// Create a client from explicit settings
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use neoguard_genai::{GeminiClient, GeminiConfig};
    ///
    /// let client = GeminiClient::new(GeminiConfig::new("my-api-key"));
    /// ```
    pub fn new(config: GeminiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap();

        Self { config, client }
    }

    /// Create a client with default settings and the given key
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self::new(GeminiConfig::new(api_key))
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_base_url, self.config.model
        )
    }

    async fn generate_text(&self, prompt: &str) -> Result<String, GenerationError> {
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "sending generation request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::Transport(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "generation request rejected");
            return Err(GenerationError::Http {
                status: status.as_u16(),
            });
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            GenerationError::MalformedResponse(format!("Failed to parse response: {}", e))
        })?;

        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| {
                GenerationError::MalformedResponse("No generated text in candidates".to_string())
            })
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    type Error = GenerationError;

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        self.generate_text(prompt).await
    }
}
