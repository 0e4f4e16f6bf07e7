//! CLI subcommands.

pub mod add;
pub mod browse;
pub mod delete;
pub mod list;
pub mod show;
pub mod stats;
pub mod update;

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use jobdeck_core::{JobListManager, JobsApiClient};

use crate::Config;
use crate::render::{TerminalJobView, TerminalNotifier};

/// Builds the standard manager for one-shot commands: stdout view,
/// immediate-print notifier.
pub(crate) fn manager_for(config: &Config) -> JobListManager<TerminalJobView, TerminalNotifier> {
    JobListManager::new(
        JobsApiClient::new(config.api_url.clone()),
        TerminalJobView::new(config.format.clone()),
        TerminalNotifier,
    )
}

/// Asks a yes/no question; anything but an explicit yes declines.
pub(crate) fn confirm(rl: &mut DefaultEditor, prompt: &str) -> Result<bool> {
    match rl.readline(prompt) {
        Ok(answer) => Ok(matches!(
            answer.trim().to_lowercase().as_str(),
            "y" | "yes"
        )),
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(false),
        Err(error) => Err(error.into()),
    }
}
