//! Prompt templates for the three verification steps

use neoguard_domain::Claim;

const TRUTH_INSTRUCTIONS: &str = "Respond ONLY with a number between 0 and 100 representing \
the percentage likelihood of truth.\nDo not include any other text or explanation.";

const ARTICLES_FORMAT_EXAMPLE: &str = r#"Format your response as JSON with an array of articles like this:
[
    {
        "source": "The New York Times",
        "logo": "NYT",
        "headline": "",
        "excerpt": "",
        "url": "/article-slug"
    },
    ...
]"#;

/// Prompt asking for a bare truth percentage
pub fn truth_prompt(claim: &Claim) -> String {
    format!(
        "Estimate the percentage likelihood that the following claim is true \
         based on available evidence:\nClaim: \"{}\"\n\n{}",
        claim, TRUTH_INSTRUCTIONS
    )
}

/// Prompt asking for background detail on the claim
pub fn narrative_prompt(claim: &Claim) -> String {
    format!(
        "Provide detailed information about: \"{}\".\n\
         Include relevant facts, context, and sources if available.\n\
         Format the response in clear paragraphs with proper spacing.\n\
         Focus on factual information and verifiable details.",
        claim
    )
}

/// Prompt asking for `count` related article suggestions as JSON
pub fn articles_prompt(claim: &Claim, count: usize) -> String {
    format!(
        "Generate {} related news article suggestions for the following claim:\n\
         Claim: \"{}\"\n\n\
         For each article, provide:\n\
         - A plausible news source\n\
         - A headline\n\
         - A 2-sentence excerpt\n\
         - A URL slug (fake but realistic)\n\n\
         {}",
        count, claim, ARTICLES_FORMAT_EXAMPLE
    )
}
