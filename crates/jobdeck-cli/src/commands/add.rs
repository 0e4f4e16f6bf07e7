//! Add command - create a job posting.

use anyhow::Result;
use clap::Args;

use jobdeck_core::JobDraft;

use crate::Config;

/// Arguments for the add command.
///
/// Only title and company are required by convention; everything else
/// falls back to the `"N/A"` sentinel. No client-side validation happens
/// here; the server is the sole validator.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Job title.
    #[arg(long)]
    pub title: String,

    /// Hiring company.
    #[arg(long)]
    pub company: String,

    /// Job location.
    #[arg(long)]
    pub location: Option<String>,

    /// Salary text.
    #[arg(long)]
    pub salary: Option<String>,

    /// Employment type.
    #[arg(long)]
    pub job_type: Option<String>,

    /// Free-text description.
    #[arg(long)]
    pub description: Option<String>,

    /// Posting date text.
    #[arg(long)]
    pub posted_date: Option<String>,

    /// Original listing URL.
    #[arg(long)]
    pub job_url: Option<String>,
}

impl AddArgs {
    fn into_draft(self) -> JobDraft {
        JobDraft::new(self.title, self.company)
            .with_location(self.location.as_deref().unwrap_or(""))
            .with_salary(self.salary.as_deref().unwrap_or(""))
            .with_job_type(self.job_type.as_deref().unwrap_or(""))
            .with_description(self.description.as_deref().unwrap_or(""))
            .with_posted_date(self.posted_date.as_deref().unwrap_or(""))
            .with_job_url(self.job_url.as_deref().unwrap_or(""))
    }
}

/// Execute the add command.
///
/// On success the refreshed list is printed (the create is always followed
/// by one reload).
///
/// # Errors
///
/// Returns an error if the create fails; the failure detail has already
/// been surfaced as a notification.
pub async fn execute(args: AddArgs, config: &Config) -> Result<()> {
    let mut manager = super::manager_for(config);

    if manager.add_job(args.into_draft()).await {
        Ok(())
    } else {
        anyhow::bail!("add failed")
    }
}
