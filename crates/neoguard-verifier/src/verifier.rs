//! Core ClaimVerifier implementation

use neoguard_domain::{
    fallback_articles, Claim, ClaimAnalysis, RelatedArticle, TextGenerator, TruthEstimate,
    NARRATIVE_FALLBACK,
};
use tracing::{debug, info, warn};

use crate::config::VerifierConfig;
use crate::parser::{parse_articles_response, parse_truth_response};
use crate::prompt::{articles_prompt, narrative_prompt, truth_prompt};

/// The ClaimVerifier turns a claim into a complete verdict
///
/// Generic over the text generator so tests can drive it with a mock
/// and production can use any provider.
pub struct ClaimVerifier<G>
where
    G: TextGenerator,
{
    generator: G,
    config: VerifierConfig,
}

impl<G> ClaimVerifier<G>
where
    G: TextGenerator + Send + Sync,
    G::Error: std::fmt::Display,
{
    /// Create a new ClaimVerifier
    pub fn new(generator: G, config: VerifierConfig) -> Self {
        Self { generator, config }
    }

    /// Produce a verdict for a claim
    ///
    /// Never fails: each of the three steps substitutes its fallback
    /// (neutral estimate, apology narrative, canned articles) when its
    /// generative call or parsing fails, and the steps degrade
    /// independently of each other.
    pub async fn verify(&self, claim: &Claim) -> ClaimAnalysis {
        info!("Starting verification for claim ({} chars)", claim.as_str().len());

        let (estimate, narrative, articles) = if self.config.concurrent {
            tokio::join!(
                self.truth_step(claim),
                self.narrative_step(claim),
                self.articles_step(claim),
            )
        } else {
            (
                self.truth_step(claim).await,
                self.narrative_step(claim).await,
                self.articles_step(claim).await,
            )
        };

        let analysis = ClaimAnalysis {
            estimate,
            narrative,
            articles,
        };

        info!(
            "Verification complete: {}% true, {} articles",
            analysis.truth_percentage(),
            analysis.articles.len()
        );

        analysis
    }

    /// Estimate how likely the claim is true
    async fn truth_step(&self, claim: &Claim) -> TruthEstimate {
        match self.generator.generate(&truth_prompt(claim)).await {
            Ok(response) => match parse_truth_response(&response) {
                Some(estimate) => estimate,
                None => {
                    warn!("Truth response was not numeric, using neutral estimate");
                    TruthEstimate::NEUTRAL
                }
            },
            Err(e) => {
                warn!("Truth step failed: {}", e);
                TruthEstimate::NEUTRAL
            }
        }
    }

    /// Fetch background detail on the claim
    async fn narrative_step(&self, claim: &Claim) -> String {
        match self.generator.generate(&narrative_prompt(claim)).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Narrative step failed: {}", e);
                NARRATIVE_FALLBACK.to_string()
            }
        }
    }

    /// Fetch related article suggestions
    async fn articles_step(&self, claim: &Claim) -> Vec<RelatedArticle> {
        let prompt = articles_prompt(claim, self.config.max_articles);

        match self.generator.generate(&prompt).await {
            Ok(response) => match parse_articles_response(&response) {
                Ok(mut articles) => {
                    debug!("Parsed {} article suggestions", articles.len());
                    articles.truncate(self.config.max_articles);
                    articles
                }
                Err(e) => {
                    warn!("Article parsing failed: {}", e);
                    fallback_articles(claim)
                }
            },
            Err(e) => {
                warn!("Articles step failed: {}", e);
                fallback_articles(claim)
            }
        }
    }
}
