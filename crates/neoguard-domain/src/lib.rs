//! NeoGuard Domain Layer
//!
//! This crate contains the core domain model shared by every other layer:
//! the claims being verified, the truth estimates produced for them, the
//! related-article records that accompany a verdict, and the media analysis
//! request/result pair exchanged with the detection service.
//!
//! ## Key Concepts
//!
//! - **Claim**: A non-empty textual statement submitted for verification
//! - **Truth Estimate**: A 0-100 likelihood that a claim is true, with the
//!   false likelihood always derived as its complement
//! - **Related Article**: A coverage suggestion attached to a verdict
//! - **Analysis Request/Result**: The input and normalized output of a
//!   media authenticity check
//!
//! ## Architecture
//!
//! Transport and provider implementations live in other crates. This layer
//! carries only the types, their invariants, and the [`TextGenerator`] trait
//! that the verification pipeline is written against.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod article;
pub mod claim;
pub mod estimate;
pub mod media;
pub mod traits;

// Re-exports for convenience
pub use analysis::{ClaimAnalysis, NARRATIVE_FALLBACK};
pub use article::{fallback_articles, RelatedArticle};
pub use claim::Claim;
pub use estimate::TruthEstimate;
pub use media::{AnalysisRequest, AnalysisResult, MediaType};
pub use traits::TextGenerator;
