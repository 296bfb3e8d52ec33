//! NeoGuard Claim Verifier
//!
//! Turns a textual claim into a complete verdict using a text generator.
//!
//! # Overview
//!
//! A verification run makes three independent generative calls: one for a
//! truth likelihood, one for a background narrative, one for related
//! article suggestions. Each call has its own fallback, so a failing
//! generator degrades the corresponding part of the verdict without
//! failing the run.
//!
//! # Architecture
//!
//! ```text
//! Claim → ClaimVerifier → TextGenerator → parsed steps → ClaimAnalysis
//! ```
//!
//! # Key Features
//!
//! - **Never fails**: every step substitutes a documented fallback value
//! - **Lenient number parsing**: leading-integer extraction with clamping
//! - **Strict article parsing**: schema violations reject the whole list
//! - **Sequential or concurrent**: both orderings produce the same verdict
//!
//! # Example Usage
//!
//! ```
//! use neoguard_domain::Claim;
//! use neoguard_genai::MockGenerator;
//! use neoguard_verifier::{ClaimVerifier, VerifierConfig};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let generator = MockGenerator::new("75");
//! let verifier = ClaimVerifier::new(generator, VerifierConfig::default());
//!
//! let claim = Claim::new("The moon landing was staged").unwrap();
//! let analysis = verifier.verify(&claim).await;
//!
//! assert_eq!(analysis.truth_percentage() + analysis.false_percentage(), 100);
//! # });
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod parser;
mod prompt;
mod verifier;


pub use config::VerifierConfig;
pub use error::ParseError;
pub use parser::{parse_articles_response, parse_truth_response};
pub use prompt::{articles_prompt, narrative_prompt, truth_prompt};
pub use verifier::ClaimVerifier;
