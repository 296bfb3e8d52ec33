//! Verify command implementation.

use crate::cli::VerifyArgs;
use crate::config::{Config, Settings};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use neoguard_domain::Claim;
use neoguard_genai::{GeminiClient, GeminiConfig};
use neoguard_verifier::{ClaimVerifier, VerifierConfig};

/// Execute the verify command.
pub async fn execute_verify(args: VerifyArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let claim = Claim::new(args.claim).map_err(CliError::InvalidInput)?;

    let profile = config.get_active_profile()?;
    let api_key = args
        .api_key
        .or_else(|| profile.genai_key.clone())
        .ok_or(CliError::MissingApiKey)?;

    let mut gemini_config = GeminiConfig::new(api_key);
    gemini_config.model = args.model.unwrap_or_else(|| profile.model.clone());

    let verifier_config = build_verifier_config(args.articles, args.concurrent, &config.settings)?;
    let verifier = ClaimVerifier::new(GeminiClient::new(gemini_config), verifier_config);

    let analysis = verifier.verify(&claim).await;

    println!("{}", formatter.format_analysis(&claim, &analysis)?);

    Ok(())
}

/// Merge command-line overrides with configured settings.
fn build_verifier_config(
    articles: Option<usize>,
    concurrent: bool,
    settings: &Settings,
) -> Result<VerifierConfig> {
    let config = VerifierConfig {
        max_articles: articles.unwrap_or(settings.max_articles),
        concurrent,
    };
    config.validate().map_err(CliError::InvalidInput)?;
    Ok(config)
}
