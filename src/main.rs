//! vidnorm
//!
//! Walks a directory tree and converts every video file that is not
//! MP4 / H.264 / AAC, keeping the original as `<name>.bak`.
//!
//! # Usage
//!
//! ```bash
//! vidnorm /srv/media --dry-run
//! vidnorm /srv/media --config vidnorm.toml --json
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::info;

use vidnorm_cli::cli::{commands, Cli};
use vidnorm_cli::config_initialization::initialize_settings;
use vidnorm_cli::utils::logging::LoggingSystem;

/// Main entry point for the vidnorm CLI application
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = initialize_settings(&cli)?;
    LoggingSystem::new(settings.logging.clone()).initialize()?;

    info!(root = %cli.directory.display(), dry_run = cli.dry_run, "Starting vidnorm");

    let summary = commands::normalize(&cli, &settings).await?;

    info!(
        compliant = summary.compliant,
        converted = summary.converted,
        would_convert = summary.would_convert,
        failed = summary.failed,
        "vidnorm completed"
    );
    Ok(())
}
