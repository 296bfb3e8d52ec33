//! History command implementation.

use crate::error::Result;
use crate::output::Formatter;
use neoguard_api::MediaClient;

/// Execute the history command.
pub async fn execute_history(client: &MediaClient, formatter: &Formatter) -> Result<()> {
    let history = client.history().await?;

    println!("{}", formatter.format_value(&history)?);

    Ok(())
}
