//! # jobdeck-cli
//!
//! Terminal dashboard for the jobdeck job-listing API.
//!
//! ## Commands
//!
//! - `jobdeck stats` - Show aggregate statistics (landing view)
//! - `jobdeck list` - List jobs with optional filters
//! - `jobdeck show` - Show a single job
//! - `jobdeck add` - Add a job posting
//! - `jobdeck update` - Update an existing job posting
//! - `jobdeck delete` - Delete a job posting (with confirmation)
//! - `jobdeck browse` - Interactive dashboard session
//!
//! ## Configuration
//!
//! The CLI uses environment variables or command-line flags for settings:
//!
//! - `JOBDECK_API_URL` - API endpoint (default: `http://localhost:5000`)

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]
// CLI uses print! macros intentionally
#![allow(clippy::print_stdout)]
#![allow(clippy::print_stderr)]

pub mod commands;
pub mod render;

use clap::{Parser, Subcommand};

/// jobdeck - job-listing dashboard for the terminal.
#[derive(Debug, Parser)]
#[command(name = "jobdeck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API server URL.
    #[arg(long, env = "JOBDECK_API_URL", default_value = "http://localhost:5000")]
    pub api_url: String,

    /// Output format.
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Get the effective configuration.
    #[must_use]
    pub fn config(&self) -> Config {
        Config {
            api_url: self.api_url.clone(),
            format: self.format.clone(),
        }
    }
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show aggregate statistics (landing view).
    Stats,
    /// List jobs with optional filters.
    List(commands::list::ListArgs),
    /// Show a single job.
    Show(commands::show::ShowArgs),
    /// Add a job posting.
    Add(commands::add::AddArgs),
    /// Update an existing job posting.
    Update(commands::update::UpdateArgs),
    /// Delete a job posting.
    Delete(commands::delete::DeleteArgs),
    /// Interactive dashboard session.
    Browse,
}

/// Output format.
#[derive(Debug, Clone, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// Table output.
    Table,
}

/// CLI configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// API server URL.
    pub api_url: String,
    /// Output format.
    pub format: OutputFormat,
}
