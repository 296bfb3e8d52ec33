//! Claim module - the statement a verification run is about

use std::fmt;

/// A claim submitted for verification
///
/// Claims are plain text with two guarantees: surrounding whitespace has
/// been stripped, and the remaining text is non-empty. Every prompt sent
/// to a text generator embeds the claim exactly as stored here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Claim(String);

impl Claim {
    /// Create a claim from raw user input
    ///
    /// Leading and trailing whitespace is trimmed before validation, so
    /// `"  \n  "` is rejected the same way `""` is.
    ///
    /// # Examples
    ///
    /// ```
    /// use neoguard_domain::Claim;
    ///
    /// let claim = Claim::new("  The moon landing was staged  ").unwrap();
    /// assert_eq!(claim.as_str(), "The moon landing was staged");
    ///
    /// assert!(Claim::new("   ").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, String> {
        let trimmed = text.into().trim().to_string();
        if trimmed.is_empty() {
            return Err("Claim text cannot be empty".to_string());
        }
        Ok(Self(trimmed))
    }

    /// Get the claim text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First `n` whitespace-separated words, joined by single spaces
    ///
    /// Used when a headline has to be synthesized from the claim itself.
    /// Claims shorter than `n` words are returned whole.
    ///
    /// # Examples
    ///
    /// ```
    /// use neoguard_domain::Claim;
    ///
    /// let claim = Claim::new("vaccines cause autism in children").unwrap();
    /// assert_eq!(claim.first_words(3), "vaccines cause autism");
    /// assert_eq!(claim.first_words(10), "vaccines cause autism in children");
    /// ```
    pub fn first_words(&self, n: usize) -> String {
        self.0
            .split_whitespace()
            .take(n)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Claim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_trims_whitespace() {
        let claim = Claim::new("\t Elvis is alive \n").unwrap();
        assert_eq!(claim.as_str(), "Elvis is alive");
    }

    #[test]
    fn test_empty_claim_rejected() {
        assert!(Claim::new("").is_err());
        assert!(Claim::new("   \t\n  ").is_err());
    }

    #[test]
    fn test_first_words_normalizes_internal_whitespace() {
        let claim = Claim::new("the   earth\tis flat").unwrap();
        assert_eq!(claim.first_words(3), "the earth is");
    }

    #[test]
    fn test_first_words_short_claim() {
        let claim = Claim::new("hoax").unwrap();
        assert_eq!(claim.first_words(3), "hoax");
    }

    #[test]
    fn test_display_matches_as_str() {
        let claim = Claim::new("5G towers spread illness").unwrap();
        assert_eq!(claim.to_string(), claim.as_str());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: accepted claims never carry edge whitespace
        #[test]
        fn test_claim_never_has_edge_whitespace(text in "\\PC*") {
            if let Ok(claim) = Claim::new(text) {
                prop_assert_eq!(claim.as_str(), claim.as_str().trim());
                prop_assert!(!claim.as_str().is_empty());
            }
        }

        /// Property: first_words(n) never yields more than n words
        #[test]
        fn test_first_words_bounded(text in "[a-z ]{1,80}", n in 0usize..10) {
            if let Ok(claim) = Claim::new(text) {
                let words = claim.first_words(n);
                prop_assert!(words.split_whitespace().count() <= n);
            }
        }
    }
}
