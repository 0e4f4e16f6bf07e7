//! List command - filtered job listing.

use anyhow::Result;
use clap::Args;

use jobdeck_core::JobFilter;

use crate::Config;

/// Arguments for the list command.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Filter by city (substring match against the job location).
    #[arg(long)]
    pub city: Option<String>,

    /// Filter by position (substring match against the job title).
    #[arg(long)]
    pub position: Option<String>,
}

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if the list request fails; the failure detail has
/// already been surfaced as a notification.
pub async fn execute(args: ListArgs, config: &Config) -> Result<()> {
    let mut manager = super::manager_for(config);
    manager.set_filter(JobFilter::new(args.city, args.position));

    if manager.load_jobs().await {
        Ok(())
    } else {
        anyhow::bail!("job listing failed")
    }
}
