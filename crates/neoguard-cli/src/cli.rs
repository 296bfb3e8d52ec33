//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// NeoGuard CLI - Verify claims and screen media for manipulation.
#[derive(Debug, Parser)]
#[command(name = "neoguard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Profile to use
    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (bare verdicts)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Verify a claim with the generative model
    Verify(VerifyArgs),

    /// Analyze a media file or URL for manipulation
    Analyze(AnalyzeArgs),

    /// Analyze multiple media files in one submission
    Batch(BatchArgs),

    /// Show previously submitted analyses
    History,

    /// Fetch the detailed report for an analysis
    Report(ReportArgs),

    /// Manage configuration profiles
    Profile(ProfileArgs),
}

/// Arguments for the verify command.
#[derive(Debug, Parser)]
pub struct VerifyArgs {
    /// Claim text to verify
    pub claim: String,

    /// Gemini API key (overrides the profile)
    #[arg(long, env = "GEMINI_API_KEY")]
    pub api_key: Option<String>,

    /// Model name (overrides the profile)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Number of related articles to request
    #[arg(short, long)]
    pub articles: Option<usize>,

    /// Run the verification steps concurrently
    #[arg(long)]
    pub concurrent: bool,
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Path to an image or video file
    pub file: Option<String>,

    /// Analyze a hosted media URL instead of a local file
    #[arg(short, long)]
    pub url: Option<String>,
}

/// Arguments for the batch command.
#[derive(Debug, Parser)]
pub struct BatchArgs {
    /// Paths of media files to analyze
    pub files: Vec<String>,
}

/// Arguments for the report command.
#[derive(Debug, Parser)]
pub struct ReportArgs {
    /// Analysis ID returned by a previous submission
    pub id: String,
}

/// Arguments for profile management.
#[derive(Debug, Parser)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub action: ProfileAction,
}

/// Profile management actions.
#[derive(Debug, Subcommand)]
pub enum ProfileAction {
    /// List all profiles
    List,

    /// Show active profile
    Show,

    /// Switch to a different profile
    Switch {
        /// Profile name
        name: String,
    },

    /// Create or update a profile
    Set {
        /// Profile name
        name: String,
        /// Media analysis API base URL
        #[arg(long)]
        api_url: Option<String>,
        /// Media analysis API bearer token
        #[arg(long)]
        api_key: Option<String>,
        /// Gemini API key
        #[arg(long)]
        genai_key: Option<String>,
        /// Gemini model name
        #[arg(long)]
        model: Option<String>,
    },

    /// Delete a profile
    Delete {
        /// Profile name
        name: String,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
