//! Update command - edit an existing job posting.

use anyhow::Result;
use clap::Args;

use jobdeck_core::{JobId, JobUpdate};

use crate::Config;

/// Arguments for the update command.
///
/// Only the provided fields are sent; the server updates what is present.
/// The listing URL is fixed at creation and cannot be updated.
#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Id of the job to update.
    pub id: i64,

    /// New job title.
    #[arg(long)]
    pub title: Option<String>,

    /// New hiring company.
    #[arg(long)]
    pub company: Option<String>,

    /// New job location.
    #[arg(long)]
    pub location: Option<String>,

    /// New salary text.
    #[arg(long)]
    pub salary: Option<String>,

    /// New employment type.
    #[arg(long)]
    pub job_type: Option<String>,

    /// New free-text description.
    #[arg(long)]
    pub description: Option<String>,

    /// New posting date text.
    #[arg(long)]
    pub posted_date: Option<String>,
}

impl UpdateArgs {
    fn into_update(self) -> (JobId, JobUpdate) {
        (
            JobId(self.id),
            JobUpdate {
                title: self.title,
                company: self.company,
                location: self.location,
                salary: self.salary,
                job_type: self.job_type,
                description: self.description,
                posted_date: self.posted_date,
            },
        )
    }
}

/// Execute the update command.
///
/// # Errors
///
/// Returns an error if the update fails; the failure detail has already
/// been surfaced as a notification.
pub async fn execute(args: UpdateArgs, config: &Config) -> Result<()> {
    let mut manager = super::manager_for(config);
    let (id, update) = args.into_update();

    if manager.update_job(id, update).await {
        Ok(())
    } else {
        anyhow::bail!("update failed")
    }
}
