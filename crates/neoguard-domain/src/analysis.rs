//! Claim analysis module - the assembled verdict for one claim

use serde::Serialize;

use crate::article::RelatedArticle;
use crate::estimate::TruthEstimate;

/// The narrative substituted when narrative generation fails
pub const NARRATIVE_FALLBACK: &str =
    "We couldn't retrieve additional details at this time. Please try again later.";

/// The complete verdict produced by a verification run
///
/// A run always yields one of these, even when every upstream call
/// failed; the pipeline substitutes neutral or canned values per
/// component rather than surfacing an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimAnalysis {
    /// Truth likelihood for the claim
    pub estimate: TruthEstimate,
    /// Free-form narrative explaining the verdict
    pub narrative: String,
    /// Related coverage suggestions, possibly empty
    pub articles: Vec<RelatedArticle>,
}

impl ClaimAnalysis {
    /// Likelihood that the claim is true, in percent
    pub fn truth_percentage(&self) -> u8 {
        self.estimate.truth_percentage()
    }

    /// Likelihood that the claim is false, in percent
    pub fn false_percentage(&self) -> u8 {
        self.estimate.false_percentage()
    }
}
