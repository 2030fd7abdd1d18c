//! CLI module for vidnorm
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::Parser;

pub mod commands;

/// vidnorm - normalize a video library to MP4 / H.264 / AAC
///
/// Walks a directory tree, probes every video file and converts the ones
/// that are not compliant. Originals are kept next to the result with a
/// `.bak` suffix.
#[derive(Parser, Debug, Clone)]
#[command(name = "vidnorm")]
#[command(about = "Normalize video files to a single compatible profile")]
#[command(version)]
pub struct Cli {
    /// Root directory to scan recursively
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// Report what would be converted without touching any file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Configuration file (defaults to ./vidnorm.toml when present)
    #[arg(long, value_name = "FILE", env = "VIDNORM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, env = "VIDNORM_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Log output format (pretty, compact, json)
    #[arg(long, env = "VIDNORM_LOG_FORMAT")]
    pub log_format: Option<String>,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,

    /// ffmpeg executable
    #[arg(long, value_name = "PATH", env = "VIDNORM_FFMPEG")]
    pub ffmpeg: Option<PathBuf>,

    /// ffprobe executable
    #[arg(long, value_name = "PATH", env = "VIDNORM_FFPROBE")]
    pub ffprobe: Option<PathBuf>,
}
