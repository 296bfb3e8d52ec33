//! Configuration for the verifier

use serde::{Deserialize, Serialize};

/// Configuration for a [`crate::ClaimVerifier`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifierConfig {
    /// Most articles to keep from a successful generation
    pub max_articles: usize,

    /// Issue the three generative calls concurrently
    ///
    /// The verdict is identical either way; concurrency only changes
    /// wall-clock time.
    pub concurrent: bool,
}

impl VerifierConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_articles == 0 {
            return Err("max_articles must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            max_articles: 3,
            concurrent: false,
        }
    }
}
