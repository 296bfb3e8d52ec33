//! NeoGuard Generative Provider Layer
//!
//! Pluggable text-generation backends for the verification pipeline.
//!
//! # Architecture
//!
//! This crate provides implementations of the `TextGenerator` trait from
//! `neoguard-domain`. The pipeline never sees a provider directly; it is
//! generic over the trait, so backends can be swapped without touching
//! pipeline code.
//!
//! # Providers
//!
//! - `MockGenerator`: Deterministic mock for testing
//! - `GeminiClient`: Google generative-language API integration
//!
//! # Examples
//!
//! ```
//! use neoguard_genai::MockGenerator;
//! use neoguard_domain::TextGenerator;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let generator = MockGenerator::new("Hello from the model!");
//! let reply = generator.generate("test prompt").await.unwrap();
//! assert_eq!(reply, "Hello from the model!");
//! # });
//! ```

#![warn(missing_docs)]

pub mod gemini;

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use neoguard_domain::TextGenerator;
use thiserror::Error;

pub use gemini::{GeminiClient, GeminiConfig};

/// Errors that can occur during text generation
#[derive(Error, Debug)]
pub enum GenerationError {
    /// Network-level failure before any HTTP status was received
    #[error("Communication error: {0}")]
    Transport(String),

    /// The service answered with a non-success status
    #[error("API request failed with status {status}")]
    Http {
        /// HTTP status code returned by the service
        status: u16,
    },

    /// The body did not carry generated text where expected
    #[error("Invalid response format from API: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Failure(String),
}

/// Mock text generator for deterministic testing
///
/// Returns pre-configured responses without any network traffic. Because
/// real prompts are long, responses are keyed by a substring: the first
/// configured fragment found inside the prompt wins, in insertion order.
/// Registering the same fragment again replaces its reply, so a test can
/// start from a healthy mock and break one step. Every prompt received
/// is recorded and can be inspected afterwards.
///
/// # Examples
///
/// ```
/// use neoguard_genai::MockGenerator;
/// use neoguard_domain::TextGenerator;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let mut generator = MockGenerator::new("default");
/// generator.add_response("weather", "Sunny all week.");
///
/// assert_eq!(generator.generate("what is the weather?").await.unwrap(), "Sunny all week.");
/// assert_eq!(generator.generate("unrelated").await.unwrap(), "default");
/// assert_eq!(generator.call_count(), 2);
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct MockGenerator {
    default_response: String,
    replies: Arc<Mutex<Vec<(String, MockReply)>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockGenerator {
    /// Create a mock that answers every prompt with a fixed response
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            replies: Arc::new(Mutex::new(Vec::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Answer prompts containing `fragment` with `response`
    pub fn add_response(&mut self, fragment: impl Into<String>, response: impl Into<String>) {
        self.set_reply(fragment.into(), MockReply::Text(response.into()));
    }

    /// Fail prompts containing `fragment` with a transport error
    pub fn add_error(&mut self, fragment: impl Into<String>) {
        self.set_reply(fragment.into(), MockReply::Failure("Mock error".to_string()));
    }

    fn set_reply(&self, fragment: String, reply: MockReply) {
        let mut replies = self.replies.lock().unwrap();
        match replies.iter_mut().find(|(existing, _)| *existing == fragment) {
            Some(slot) => slot.1 = reply,
            None => replies.push((fragment, reply)),
        }
    }

    /// Number of prompts received so far
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// Copies of every prompt received, in call order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    type Error = GenerationError;

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        let replies = self.replies.lock().unwrap();
        for (fragment, reply) in replies.iter() {
            if prompt.contains(fragment.as_str()) {
                return match reply {
                    MockReply::Text(text) => Ok(text.clone()),
                    MockReply::Failure(message) => {
                        Err(GenerationError::Transport(message.clone()))
                    }
                };
            }
        }

        Ok(self.default_response.clone())
    }
}
