//! Truth estimate module - the headline number of a verification run

use serde::{Deserialize, Serialize};

/// Estimated likelihood that a claim is true, as a whole percentage
///
/// The value is always within [0, 100]. The complementary false
/// likelihood is never stored; it is derived so the two can never
/// drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TruthEstimate(u8);

impl TruthEstimate {
    /// The estimate used when a generator gives no usable number: 50/50
    pub const NEUTRAL: TruthEstimate = TruthEstimate(50);

    /// Create an estimate, clamping out-of-range values into [0, 100]
    ///
    /// # Examples
    ///
    /// ```
    /// use neoguard_domain::TruthEstimate;
    ///
    /// assert_eq!(TruthEstimate::from_clamped(62).truth_percentage(), 62);
    /// assert_eq!(TruthEstimate::from_clamped(150).truth_percentage(), 100);
    /// assert_eq!(TruthEstimate::from_clamped(-3).truth_percentage(), 0);
    /// ```
    pub fn from_clamped(value: i64) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    /// Likelihood that the claim is true, in percent
    pub fn truth_percentage(&self) -> u8 {
        self.0
    }

    /// Likelihood that the claim is false, in percent
    ///
    /// Always `100 - truth_percentage()`.
    pub fn false_percentage(&self) -> u8 {
        100 - self.0
    }
}
