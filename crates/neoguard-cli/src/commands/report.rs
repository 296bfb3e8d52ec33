//! Report command implementation.

use crate::cli::ReportArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use neoguard_api::MediaClient;

/// Execute the report command.
pub async fn execute_report(
    args: ReportArgs,
    client: &MediaClient,
    formatter: &Formatter,
) -> Result<()> {
    if args.id.trim().is_empty() {
        return Err(CliError::InvalidInput(
            "Report ID cannot be empty".to_string(),
        ));
    }

    let report = client.report(&args.id).await?;

    println!("{}", formatter.format_value(&report)?);

    Ok(())
}
