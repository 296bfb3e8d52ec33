//! Batch command implementation.

use crate::cli::BatchArgs;
use crate::commands::analyze::read_media_file;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use neoguard_api::MediaClient;

/// Execute the batch command.
pub async fn execute_batch(
    args: BatchArgs,
    client: &MediaClient,
    formatter: &Formatter,
) -> Result<()> {
    if args.files.is_empty() {
        return Err(CliError::InvalidInput("No files to analyze".to_string()));
    }

    let mut files = Vec::with_capacity(args.files.len());
    for path in &args.files {
        files.push(read_media_file(path)?);
    }

    let count = files.len();
    let receipt = client.batch_analyze(files).await?;

    println!("{}", formatter.bulk_result("Submitted", count));
    println!("{}", formatter.format_value(&receipt)?);

    Ok(())
}
