//! Show command - display a single job.

use anyhow::Result;
use clap::Args;

use jobdeck_core::{JobId, JobsApiClient};

use crate::render::print_job;
use crate::Config;

/// Arguments for the show command.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Id of the job to show.
    pub id: i64,
}

/// Execute the show command.
///
/// # Errors
///
/// Returns an error if the job cannot be fetched (including the server's
/// "Job not found").
pub async fn execute(args: ShowArgs, config: &Config) -> Result<()> {
    let client = JobsApiClient::new(config.api_url.clone());

    let job = client.fetch_job(JobId(args.id)).await?;
    print_job(&job, &config.format);

    Ok(())
}
