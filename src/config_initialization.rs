//! Configuration initialization and hierarchy management

use tracing::debug;

use crate::adapters::toml_config::{Settings, TomlConfigAdapter};
use crate::cli::Cli;
use crate::domain::errors::DomainError;
use crate::error::{AppError, AppResult};
use crate::utils::logging::{LogFormat, LogLevel};

/// Build the effective settings following precedence: CLI > Env > File > Defaults.
///
/// Environment variables reach the [`Cli`] through clap's `env` attributes,
/// so they already sit between explicit flags and the file.
pub fn initialize_settings(cli: &Cli) -> AppResult<Settings> {
    let settings = TomlConfigAdapter::default()
        .load(cli.config.as_deref())
        .map_err(config_error)?;

    finalize_settings(settings, cli)
}

/// Apply CLI overrides, normalize and validate
pub fn finalize_settings(mut settings: Settings, cli: &Cli) -> AppResult<Settings> {
    apply_cli_overrides(&mut settings, cli)?;

    settings.profile = settings.profile.normalized();
    settings.profile.validate().map_err(config_error)?;

    debug!(
        ffmpeg = %settings.tools.ffmpeg.display(),
        ffprobe = %settings.tools.ffprobe.display(),
        target = %settings.profile.target_extension,
        "Settings initialized"
    );
    Ok(settings)
}

fn apply_cli_overrides(settings: &mut Settings, cli: &Cli) -> AppResult<()> {
    if let Some(level) = &cli.log_level {
        settings.logging.level = level.parse::<LogLevel>().map_err(config_error)?;
    }
    if let Some(format) = &cli.log_format {
        settings.logging.format = format.parse::<LogFormat>().map_err(config_error)?;
    }
    if let Some(ffmpeg) = &cli.ffmpeg {
        settings.tools.ffmpeg = ffmpeg.clone();
    }
    if let Some(ffprobe) = &cli.ffprobe {
        settings.tools.ffprobe = ffprobe.clone();
    }
    Ok(())
}

fn config_error(err: DomainError) -> AppError {
    let message = match err {
        DomainError::BadArgs(message) => message,
        other => other.to_string(),
    };
    AppError::Config { message }
}
