//! NeoGuard CLI - Command-line interface for claim verification and media forensics.

use clap::Parser;
use neoguard_api::{MediaClient, MediaConfig};
use neoguard_cli::commands;
use neoguard_cli::{Cli, Command, Config, Formatter};
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> neoguard_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Log to stderr so command output stays pipeable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    // Load or create config
    let mut config = match &cli.config {
        Some(path) => Config::load_from(Path::new(path))?,
        None => Config::load().unwrap_or_else(|_| {
            let cfg = Config::default();
            cfg.save().ok();
            cfg
        }),
    };

    // Override profile if specified
    if let Some(profile_name) = cli.profile {
        config.switch_profile(profile_name)?;
    }

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Handle commands
    match cli.command {
        Command::Verify(args) => {
            commands::execute_verify(args, &config, &formatter).await?;
        }
        Command::Profile(args) => {
            commands::execute_profile(args, &mut config, &formatter).await?;
        }
        cmd => {
            // Commands that talk to the media analysis service
            let profile = config.get_active_profile()?;
            let mut media_config = MediaConfig::new(profile.api_url.clone());
            media_config.api_key = profile.api_key.clone();
            let client = MediaClient::new(media_config);

            match cmd {
                Command::Analyze(args) => {
                    commands::execute_analyze(args, &client, &formatter).await?;
                }
                Command::Batch(args) => {
                    commands::execute_batch(args, &client, &formatter).await?;
                }
                Command::History => {
                    commands::execute_history(&client, &formatter).await?;
                }
                Command::Report(args) => {
                    commands::execute_report(args, &client, &formatter).await?;
                }
                _ => unreachable!(),
            }
        }
    }

    Ok(())
}
