//! Command implementations

use anyhow::Result;
use tracing::{info, warn};

use crate::adapters::Settings;
use crate::app::container::{AppContainer, DefaultAppContainer};
use crate::app::walker::collect_candidates;
use crate::cli::Cli;
use crate::error::AppError;
use crate::output::{ConsoleReporter, RunSummary};

/// Normalize every candidate under the requested root.
///
/// Per-file failures are reported and counted; only an invalid root or
/// an unusable setup makes the command fail.
pub async fn normalize(cli: &Cli, settings: &Settings) -> Result<RunSummary> {
    let container = DefaultAppContainer::new(settings, cli.dry_run);
    normalize_with(&container, cli).await
}

/// Same as [`normalize`] with an explicit container
pub async fn normalize_with(container: &dyn AppContainer, cli: &Cli) -> Result<RunSummary> {
    let root = cli.directory.as_path();
    let is_directory = container
        .fs_port()
        .directory_exists(root)
        .await
        .map_err(AppError::from)?;
    if !is_directory {
        return Err(AppError::InvalidRoot {
            path: root.to_path_buf(),
        }
        .into());
    }

    let interactor = container.normalize_interactor();
    let candidates = collect_candidates(interactor.profile(), root);
    if candidates.is_empty() {
        info!(root = %root.display(), "No video files found");
    }

    let mut reporter = ConsoleReporter::new(RunSummary::new(root, cli.dry_run), cli.json);
    interactor.run(&candidates, &mut reporter).await;

    let mut summary = reporter.into_summary();
    summary.finish();

    if summary.failed > 0 {
        warn!(failed = summary.failed, "Some files could not be normalized");
    }

    if cli.json {
        println!("{}", summary.to_json().map_err(AppError::from)?);
    } else {
        println!("{}", summary.render_text());
    }

    Ok(summary)
}
