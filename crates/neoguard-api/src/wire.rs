//! Wire-format types for the media analysis service.

use neoguard_domain::{AnalysisResult, MediaType};
use serde::Deserialize;

/// Fallback message when an error body is missing or unreadable
pub(crate) const DEFAULT_ERROR_MESSAGE: &str = "API request failed";

/// Verdict as the service sends it, optional fields and all
#[derive(Debug, Deserialize)]
pub(crate) struct RawAnalysisResponse {
    pub is_fake: bool,
    pub confidence: f64,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub heatmap: Option<String>,
}

impl RawAnalysisResponse {
    /// Resolve the optional wire fields into a normalized result
    ///
    /// Anything other than an explicit `"video"` counts as an image.
    /// The media URL prefers the reported URL, then the reported
    /// filename under `/uploads/`, then stays empty.
    pub fn into_result(self) -> AnalysisResult {
        let RawAnalysisResponse {
            is_fake,
            confidence,
            media_type,
            media_url,
            filename,
            heatmap,
        } = self;

        let media_type = match media_type.as_deref() {
            Some("video") => MediaType::Video,
            _ => MediaType::Image,
        };

        let media_url = media_url
            .filter(|url| !url.is_empty())
            .or_else(|| filename.map(|name| format!("/uploads/{}", name)))
            .unwrap_or_default();

        AnalysisResult {
            is_fake,
            confidence,
            media_type,
            media_url,
            heatmap_url: heatmap,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Pull the service's error message out of a failure body
///
/// Falls back to a generic message when the body is not JSON, has no
/// `message` field, or the field is empty.
pub(crate) fn error_message(body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string())
}
