//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use neoguard_domain::{AnalysisResult, Claim, ClaimAnalysis, RelatedArticle};
use serde_json;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a claim verification verdict.
    pub fn format_analysis(&self, claim: &Claim, analysis: &ClaimAnalysis) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_analysis_json(claim, analysis),
            OutputFormat::Table => Ok(self.format_analysis_table(claim, analysis)),
            OutputFormat::Quiet => Ok(analysis.truth_percentage().to_string()),
        }
    }

    /// Format verdict as JSON.
    fn format_analysis_json(&self, claim: &Claim, analysis: &ClaimAnalysis) -> Result<String> {
        let value = serde_json::json!({
            "claim": claim.as_str(),
            "truth_percentage": analysis.truth_percentage(),
            "false_percentage": analysis.false_percentage(),
            "narrative": analysis.narrative,
            "articles": analysis.articles,
        });

        Ok(serde_json::to_string_pretty(&value)?)
    }

    /// Format verdict as human-readable text with an article table.
    fn format_analysis_table(&self, claim: &Claim, analysis: &ClaimAnalysis) -> String {
        let mut out = String::new();
        out.push_str(&format!("Claim: {}\n", claim.as_str()));
        out.push_str(&self.verdict_line(analysis.truth_percentage()));
        out.push_str("\n\n");
        out.push_str(analysis.narrative.trim());
        out.push_str("\n\n");
        out.push_str(&self.articles_table(&analysis.articles));
        out
    }

    /// Render the truth split, colored by band.
    fn verdict_line(&self, truth: u8) -> String {
        let line = format!("Verdict: {}% true / {}% false", truth, 100 - truth);
        let color = if truth >= 70 {
            "green"
        } else if truth >= 40 {
            "yellow"
        } else {
            "red"
        };
        self.colorize(&line, color)
    }

    /// Render related articles as a table.
    fn articles_table(&self, articles: &[RelatedArticle]) -> String {
        if articles.is_empty() {
            return self.colorize("No related articles.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Source", "Headline", "Excerpt"]);

        for article in articles {
            builder.push_record([
                article.source.as_str(),
                article.headline.as_str(),
                article.excerpt.as_str(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a media analysis result.
    pub fn format_result(&self, result: &AnalysisResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            OutputFormat::Table => Ok(self.format_result_table(result)),
            OutputFormat::Quiet => Ok(if result.is_fake { "fake" } else { "authentic" }.to_string()),
        }
    }

    /// Format a media analysis result as a table.
    fn format_result_table(&self, result: &AnalysisResult) -> String {
        let verdict = if result.is_fake {
            self.colorize("LIKELY MANIPULATED", "red")
        } else {
            self.colorize("LIKELY AUTHENTIC", "green")
        };
        let confidence = format!("{:.1}%", result.confidence * 100.0);

        let mut builder = Builder::default();
        builder.push_record(["Verdict", verdict.as_str()]);
        builder.push_record(["Confidence", confidence.as_str()]);
        builder.push_record(["Media type", result.media_type.as_str()]);
        builder.push_record(["Media", result.media_url.as_str()]);
        if let Some(heatmap) = &result.heatmap_url {
            builder.push_record(["Heatmap", heatmap.as_str()]);
        }

        let mut table = builder.build();
        table.with(Style::rounded());

        table.to_string()
    }

    /// Format an opaque JSON payload (history listings, reports, batch receipts).
    pub fn format_value(&self, value: &serde_json::Value) -> Result<String> {
        match self.format {
            OutputFormat::Quiet => Ok(value.to_string()),
            _ => Ok(serde_json::to_string_pretty(value)?),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format bulk operation result.
    pub fn bulk_result(&self, operation: &str, count: usize) -> String {
        self.success(&format!("{} {} file(s)", operation, count))
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}
