//! Stats command - aggregate statistics for the landing view.

use anyhow::Result;

use jobdeck_core::{JobsApiClient, StatsReader};

use crate::render::TerminalStatsPanel;
use crate::Config;

/// Execute the stats command.
///
/// Statistics are advisory: a failed read prints nothing and still exits
/// cleanly (the failure is logged, never surfaced).
///
/// # Errors
///
/// Returns an error only if the output stream fails, which it does not.
pub async fn execute(config: &Config) -> Result<()> {
    let client = JobsApiClient::new(config.api_url.clone());
    let mut reader = StatsReader::new(client, TerminalStatsPanel::new(config.format.clone()));

    reader.load_stats().await;
    reader.into_panel().print();

    Ok(())
}
