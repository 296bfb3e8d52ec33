//! Media analysis client implementation.

use std::time::Duration;

use neoguard_domain::{AnalysisRequest, AnalysisResult};
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::wire::{error_message, RawAnalysisResponse};

/// Default hosted service base
pub const DEFAULT_BASE_URL: &str = "https://api.neoguard.ai/v1";

/// Default request timeout (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for a [`MediaClient`]
///
/// The hosted service requires a bearer token; self-hosted deployments
/// expose the same contract under a local base path with no auth, which
/// is why the key is optional.
#[derive(Debug, Clone)]
pub struct MediaConfig {
    /// Service base, e.g. `https://api.neoguard.ai/v1` or `/api`
    pub base_url: String,
    /// Bearer token; `None` sends no Authorization header
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl MediaConfig {
    /// Config for a service at `base_url`, unauthenticated
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Attach a bearer token
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// JSON body for URL submissions
#[derive(Serialize)]
struct UrlAnalysisBody<'a> {
    url: &'a str,
}

/// Client for the media authenticity service
pub struct MediaClient {
    config: MediaConfig,
    client: reqwest::Client,
}

impl MediaClient {
    /// Create a client from explicit settings
    pub fn new(config: MediaConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap();

        Self { config, client }
    }

    /// Submit media for analysis, dispatching on the request variant
    ///
    /// Files travel as a multipart form under the field `file`; URLs as
    /// a JSON body. Validation failures are reported before any network
    /// traffic.
    pub async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResult, ApiError> {
        request.validate().map_err(ApiError::InvalidRequest)?;

        match request {
            AnalysisRequest::File { filename, content } => self.post_file(filename, content).await,
            AnalysisRequest::Url { value } => self.post_url(&value).await,
        }
    }

    /// Submit an uploaded file for analysis
    pub async fn analyze_file(
        &self,
        filename: impl Into<String>,
        content: Vec<u8>,
    ) -> Result<AnalysisResult, ApiError> {
        self.analyze(AnalysisRequest::file(filename, content)).await
    }

    /// Submit a remote URL for analysis
    pub async fn analyze_url(&self, url: impl Into<String>) -> Result<AnalysisResult, ApiError> {
        self.analyze(AnalysisRequest::url(url)).await
    }

    /// Submit several files in one request
    ///
    /// Files are attached as multipart fields `file_0`, `file_1`, and
    /// so on, in the order given. The response is passed through
    /// undecoded; its shape is the service's business.
    pub async fn batch_analyze(
        &self,
        files: Vec<(String, Vec<u8>)>,
    ) -> Result<serde_json::Value, ApiError> {
        if files.is_empty() {
            return Err(ApiError::InvalidRequest("No files to analyze".to_string()));
        }

        let mut form = Form::new();
        for (index, (filename, content)) in files.into_iter().enumerate() {
            form = form.part(format!("file_{}", index), Part::bytes(content).file_name(filename));
        }

        debug!("submitting batch analysis");
        let request = self.authorize(self.client.post(self.url("/batch-analyze"))).multipart(form);
        let response = self.send(request).await?;
        self.take_json(response).await
    }

    /// Fetch the analysis history
    pub async fn history(&self) -> Result<serde_json::Value, ApiError> {
        let request = self.authorize(self.client.get(self.url("/history")));
        let response = self.send(request).await?;
        self.take_json(response).await
    }

    /// Fetch a single analysis report by id
    pub async fn report(&self, report_id: &str) -> Result<serde_json::Value, ApiError> {
        let request = self.authorize(self.client.get(self.url(&format!("/report/{}", report_id))));
        let response = self.send(request).await?;
        self.take_json(response).await
    }

    async fn post_file(
        &self,
        filename: String,
        content: Vec<u8>,
    ) -> Result<AnalysisResult, ApiError> {
        debug!(filename = %filename, bytes = content.len(), "submitting file for analysis");

        // Content type is left to the transport so the multipart
        // boundary is generated per request
        let form = Form::new().part("file", Part::bytes(content).file_name(filename));
        let request = self.authorize(self.client.post(self.url("/analyze"))).multipart(form);
        let response = self.send(request).await?;
        self.take_verdict(response).await
    }

    async fn post_url(&self, url: &str) -> Result<AnalysisResult, ApiError> {
        debug!(url = %url, "submitting url for analysis");

        let body = UrlAnalysisBody { url };
        let request = self.authorize(self.client.post(self.url("/analyze-url"))).json(&body);
        let response = self.send(request).await?;
        self.take_verdict(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        request
            .send()
            .await
            .map_err(|e| ApiError::Connection(format!("Request failed: {}", e)))
    }

    async fn take_verdict(&self, response: reqwest::Response) -> Result<AnalysisResult, ApiError> {
        let raw: RawAnalysisResponse = self.take_json(response).await?;
        Ok(raw.into_result())
    }

    async fn take_json<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let message = error_message(&body);
            warn!(status = status.as_u16(), message = %message, "analysis request rejected");
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(format!("Failed to parse response: {}", e)))
    }
}
