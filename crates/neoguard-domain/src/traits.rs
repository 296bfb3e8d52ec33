//! Trait definitions for external interactions
//!
//! These traits define the boundary between the verification pipeline and
//! the services it calls. Concrete implementations live in other crates.

use async_trait::async_trait;

/// Trait for single-prompt text generation
///
/// Implemented by the infrastructure layer (neoguard-genai). The
/// verification pipeline issues one prompt per call and consumes the
/// raw generated text; any structure in the reply is the caller's
/// problem to parse.
#[async_trait]
pub trait TextGenerator {
    /// Error type for generation failures
    type Error;

    /// Generate a text completion for a prompt
    async fn generate(&self, prompt: &str) -> Result<String, Self::Error>;
}
