//! Delete command - remove a job posting.

use anyhow::Result;
use clap::Args;
use rustyline::DefaultEditor;

use jobdeck_core::JobId;

use crate::Config;

/// Arguments for the delete command.
#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Id of the job to delete.
    pub id: i64,

    /// Skip the confirmation prompt.
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Execute the delete command.
///
/// The request is gated by a yes/no confirmation unless `--yes` is given.
///
/// # Errors
///
/// Returns an error if the delete fails; the failure detail has already
/// been surfaced as a notification.
pub async fn execute(args: DeleteArgs, config: &Config) -> Result<()> {
    if !args.yes {
        let mut rl = DefaultEditor::new()?;
        if !super::confirm(&mut rl, "Are you sure you want to delete this job? [y/N] ")? {
            println!("Aborted.");
            return Ok(());
        }
    }

    let mut manager = super::manager_for(config);
    if manager.delete_job(JobId(args.id)).await {
        Ok(())
    } else {
        anyhow::bail!("delete failed")
    }
}
