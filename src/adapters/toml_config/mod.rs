// TOML config adapter - Settings loaded from a TOML file

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::errors::*;
use crate::domain::rules::ComplianceProfile;
use crate::utils::logging::LoggingConfig;

/// File picked up from the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "vidnorm.toml";

/// Complete run configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub profile: ComplianceProfile,
    pub tools: ToolSettings,
    pub logging: LoggingConfig,
}

/// External executables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    pub ffmpeg: PathBuf,
    pub ffprobe: PathBuf,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            ffmpeg: PathBuf::from("ffmpeg"),
            ffprobe: PathBuf::from("ffprobe"),
        }
    }
}

/// TOML configuration adapter
#[derive(Debug, Clone)]
pub struct TomlConfigAdapter {
    search_dir: PathBuf,
}

impl Default for TomlConfigAdapter {
    fn default() -> Self {
        Self::new(".")
    }
}

impl TomlConfigAdapter {
    /// Adapter looking for [`DEFAULT_CONFIG_FILE`] in `search_dir`
    pub fn new(search_dir: impl Into<PathBuf>) -> Self {
        Self {
            search_dir: search_dir.into(),
        }
    }

    /// Load settings.
    ///
    /// An explicit path must exist. Without one, the default file is used
    /// when present and built-in defaults otherwise.
    pub fn load(&self, explicit: Option<&Path>) -> Result<Settings, DomainError> {
        if let Some(path) = explicit {
            return Self::load_file(path);
        }

        let default_path = self.search_dir.join(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            Self::load_file(&default_path)
        } else {
            debug!("No configuration file found, using defaults");
            Ok(Settings::default())
        }
    }

    /// Read and parse one configuration file
    pub fn load_file(path: &Path) -> Result<Settings, DomainError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DomainError::BadArgs(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let settings = Self::parse(&content).map_err(|e| match e {
            DomainError::BadArgs(msg) => {
                DomainError::BadArgs(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;

        info!(path = %path.display(), "Loaded configuration");
        Ok(settings)
    }

    /// Deserialize settings from TOML text
    pub fn parse(toml_content: &str) -> Result<Settings, DomainError> {
        toml::from_str(toml_content)
            .map_err(|e| DomainError::BadArgs(format!("Failed to parse TOML config: {}", e)))
    }
}
