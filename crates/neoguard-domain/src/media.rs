//! Media analysis module - request and verdict types for authenticity checks

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of media a verdict applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Still image
    Image,
    /// Video clip
    Video,
}

impl MediaType {
    /// Wire name for this media type
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
        }
    }
}

impl FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(MediaType::Image),
            "video" => Ok(MediaType::Video),
            other => Err(format!("Unknown media type: {}", other)),
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A piece of media submitted for authenticity analysis
///
/// Either the raw bytes of an upload or a URL the service fetches
/// itself. The two variants travel over different endpoints and body
/// encodings, which the API client selects from the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisRequest {
    /// An uploaded file, sent as a multipart form
    File {
        /// Name the upload is submitted under
        filename: String,
        /// Raw file bytes
        content: Vec<u8>,
    },
    /// A remote URL, sent as a JSON body
    Url {
        /// Address of the media to fetch and analyze
        value: String,
    },
}

impl AnalysisRequest {
    /// Build a file-upload request
    pub fn file(filename: impl Into<String>, content: Vec<u8>) -> Self {
        Self::File {
            filename: filename.into(),
            content,
        }
    }

    /// Build a URL request
    pub fn url(value: impl Into<String>) -> Self {
        Self::Url {
            value: value.into(),
        }
    }

    /// Check the request is submittable before any network traffic
    ///
    /// Files must have a name and at least one byte of content; URLs
    /// must be non-empty after trimming.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            AnalysisRequest::File { filename, content } => {
                if filename.trim().is_empty() {
                    return Err("File name cannot be empty".to_string());
                }
                if content.is_empty() {
                    return Err("File content cannot be empty".to_string());
                }
                Ok(())
            }
            AnalysisRequest::Url { value } => {
                if value.trim().is_empty() {
                    return Err("URL cannot be empty".to_string());
                }
                Ok(())
            }
        }
    }
}

/// Normalized verdict for one analyzed media item
///
/// Built from the raw service response with its optional fields already
/// resolved, so consumers never deal with absent keys. Confidence is
/// whatever the service reported, in [0, 1]; the client does not
/// re-validate it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Whether the service judged the media to be manipulated
    pub is_fake: bool,
    /// Service confidence in the verdict, in [0, 1]
    pub confidence: f64,
    /// Kind of media analyzed; defaults to image when unreported
    pub media_type: MediaType,
    /// Where the analyzed media can be retrieved
    ///
    /// Resolved from the reported URL, then from the reported filename
    /// under `/uploads/`, then empty when the service gave neither.
    pub media_url: String,
    /// Optional heatmap overlay reference highlighting suspect regions
    pub heatmap_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_round_trip() {
        assert_eq!("image".parse::<MediaType>().unwrap(), MediaType::Image);
        assert_eq!("video".parse::<MediaType>().unwrap(), MediaType::Video);
        assert_eq!(MediaType::Video.as_str(), "video");
        assert!("audio".parse::<MediaType>().is_err());
    }

    #[test]
    fn test_media_type_serde_lowercase() {
        assert_eq!(serde_json::to_string(&MediaType::Video).unwrap(), "\"video\"");
        let parsed: MediaType = serde_json::from_str("\"image\"").unwrap();
        assert_eq!(parsed, MediaType::Image);
    }

    #[test]
    fn test_file_request_validation() {
        assert!(AnalysisRequest::file("photo.jpg", vec![0xFF, 0xD8]).validate().is_ok());
        assert!(AnalysisRequest::file("", vec![0xFF]).validate().is_err());
        assert!(AnalysisRequest::file("photo.jpg", vec![]).validate().is_err());
    }

    #[test]
    fn test_url_request_validation() {
        assert!(AnalysisRequest::url("https://example.com/a.jpg").validate().is_ok());
        assert!(AnalysisRequest::url("   ").validate().is_err());
    }
}
