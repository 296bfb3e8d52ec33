//! Related article module - coverage suggestions attached to a verdict

use serde::{Deserialize, Serialize};

use crate::claim::Claim;

/// A suggested piece of coverage related to a claim
///
/// Generators return these as JSON objects; all five fields are required
/// and must be strings, so deserialization doubles as schema validation.
/// The slug is serialized under the key `url` for compatibility with the
/// generated payloads, but it is a site-relative path (`/fact-check`),
/// never a full URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedArticle {
    /// Publisher name, e.g. `"Reuters"`
    pub source: String,
    /// Short logo text shown next to the source, e.g. `"RT"`
    pub logo: String,
    /// Article headline
    pub headline: String,
    /// One or two sentence summary
    pub excerpt: String,
    /// Site-relative path slug
    #[serde(rename = "url")]
    pub url_slug: String,
}

/// The canned articles substituted when article generation fails
///
/// Always exactly two entries, both with headlines built from the
/// claim's first three words so they visibly relate to what the user
/// asked about.
pub fn fallback_articles(claim: &Claim) -> Vec<RelatedArticle> {
    let lead = claim.first_words(3);
    vec![
        RelatedArticle {
            source: "FactCheck.org".to_string(),
            logo: "FC".to_string(),
            headline: format!("Examining claims about {}", lead),
            excerpt: "Our investigation looks at the evidence behind these claims. \
                      Multiple experts have weighed in on the validity."
                .to_string(),
            url_slug: "/fact-check".to_string(),
        },
        RelatedArticle {
            source: "Reuters".to_string(),
            logo: "RT".to_string(),
            headline: format!("What's true and false about {}", lead),
            excerpt: "We verify the claims circulating online. The evidence presents \
                      a mixed picture that requires careful analysis."
                .to_string(),
            url_slug: "/news-verify".to_string(),
        },
    ]
}
