//! NeoGuard Media Analysis API Client
//!
//! Client library for the media authenticity service. Files go up as
//! multipart forms, URLs as JSON bodies; either way the service answers
//! with a verdict that this crate normalizes into
//! [`neoguard_domain::AnalysisResult`].
//!
//! Unlike claim verification, media analysis has no degraded mode:
//! every transport, HTTP, or decode failure is returned to the caller
//! unchanged.
//!
//! # Example
//!
//! ```no_run
//! use neoguard_api::{MediaClient, MediaConfig};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let client = MediaClient::new(MediaConfig::default().with_api_key("my-key"));
//! let verdict = client.analyze_url("https://example.com/photo.jpg").await?;
//! println!("fake: {} ({:.1}%)", verdict.is_fake, verdict.confidence * 100.0);
//! # Ok::<(), neoguard_api::ApiError>(())
//! # });
//! ```

#![warn(missing_docs)]

mod client;
mod error;
mod wire;

pub use client::{MediaClient, MediaConfig, DEFAULT_BASE_URL};
pub use error::ApiError;
