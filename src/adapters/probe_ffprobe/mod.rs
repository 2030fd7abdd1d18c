//! FFprobe adapter for media file probing
//!
//! Runs `ffprobe` as a subprocess and maps its JSON stream list onto
//! [`StreamDescriptor`]s.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use tokio::process::Command;
use tracing::debug;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    #[serde(default)]
    streams: Vec<FfprobeStream>,
}

#[derive(Debug, Deserialize)]
struct FfprobeStream {
    index: usize,
    codec_type: Option<String>,
    codec_name: Option<String>,
    bit_rate: Option<String>,
    #[serde(default)]
    disposition: FfprobeDisposition,
}

#[derive(Debug, Default, Deserialize)]
struct FfprobeDisposition {
    #[serde(default)]
    attached_pic: u8,
}

/// FFprobe-based probe adapter
pub struct FFprobeAdapter {
    binary: PathBuf,
}

impl FFprobeAdapter {
    /// Create new FFprobe adapter invoking the given executable
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Arguments passed before the file path
    fn base_args() -> [&'static str; 5] {
        ["-v", "error", "-print_format", "json", "-show_streams"]
    }
}

#[async_trait]
impl ProbePort for FFprobeAdapter {
    async fn probe_streams(&self, file_path: &Path) -> Result<Vec<StreamDescriptor>, DomainError> {
        debug!(path = %file_path.display(), binary = %self.binary.display(), "Probing");

        let output = Command::new(&self.binary)
            .args(Self::base_args())
            .arg(file_path)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                DomainError::probe(
                    file_path,
                    format!("could not run {}: {}", self.binary.display(), e),
                )
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let diagnostic = if stderr.trim().is_empty() {
                format!("ffprobe exited with {}", output.status)
            } else {
                stderr.trim().to_string()
            };
            return Err(DomainError::probe(file_path, diagnostic));
        }

        parse_ffprobe_json(&output.stdout).map_err(|msg| DomainError::probe(file_path, msg))
    }
}

/// Parse `ffprobe -show_streams` JSON into ordered descriptors
pub fn parse_ffprobe_json(json: &[u8]) -> Result<Vec<StreamDescriptor>, String> {
    let parsed: FfprobeOutput =
        serde_json::from_slice(json).map_err(|e| format!("invalid ffprobe output: {}", e))?;

    Ok(parsed
        .streams
        .into_iter()
        .map(|stream| {
            let codec_type = stream
                .codec_type
                .as_deref()
                .map(CodecType::parse)
                .unwrap_or(CodecType::Other);

            StreamDescriptor::new(
                stream.index,
                codec_type,
                stream.codec_name.as_deref(),
                stream.bit_rate.as_deref().and_then(parse_bit_rate),
            )
            .with_attached_picture(stream.disposition.attached_pic == 1)
        })
        .collect())
}

fn parse_bit_rate(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok().filter(|rate| *rate > 0)
}
