//! jobdeck - terminal dashboard for the job-listing API.
//!
//! The main entry point for the `jobdeck` binary.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jobdeck_cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();
    let config = cli.config();

    // Create runtime and execute
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        match cli.command {
            Commands::Stats => jobdeck_cli::commands::stats::execute(&config).await,
            Commands::List(args) => jobdeck_cli::commands::list::execute(args, &config).await,
            Commands::Show(args) => jobdeck_cli::commands::show::execute(args, &config).await,
            Commands::Add(args) => jobdeck_cli::commands::add::execute(args, &config).await,
            Commands::Update(args) => jobdeck_cli::commands::update::execute(args, &config).await,
            Commands::Delete(args) => jobdeck_cli::commands::delete::execute(args, &config).await,
            Commands::Browse => jobdeck_cli::commands::browse::execute(&config).await,
        }
    })
}
