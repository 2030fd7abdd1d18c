// Domain models - Core types and data structures

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Codec name used when the prober reports none
pub const UNKNOWN_CODEC: &str = "unknown";

/// Broad stream category as reported by the prober
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodecType {
    Video,
    Audio,
    Subtitle,
    /// Data, attachment and unknown stream types
    Other,
}

impl CodecType {
    /// Parse the prober's `codec_type` string; anything unrecognised is `Other`
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "video" => CodecType::Video,
            "audio" => CodecType::Audio,
            "subtitle" => CodecType::Subtitle,
            _ => CodecType::Other,
        }
    }
}

impl fmt::Display for CodecType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CodecType::Video => "video",
            CodecType::Audio => "audio",
            CodecType::Subtitle => "subtitle",
            CodecType::Other => "other",
        };
        f.write_str(name)
    }
}

/// One stream of a probed media file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamDescriptor {
    pub index: usize,
    pub codec_type: CodecType,
    pub codec_name: String,
    pub bit_rate: Option<u64>,
    pub is_attached_picture: bool,
}

impl StreamDescriptor {
    /// Create a descriptor; codec names are normalised to lowercase and an
    /// empty name becomes `unknown`. A zero bitrate is treated as absent.
    pub fn new(
        index: usize,
        codec_type: CodecType,
        codec_name: Option<&str>,
        bit_rate: Option<u64>,
    ) -> Self {
        let codec_name = match codec_name.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_lowercase(),
            _ => UNKNOWN_CODEC.to_string(),
        };

        Self {
            index,
            codec_type,
            codec_name,
            bit_rate: bit_rate.filter(|rate| *rate > 0),
            is_attached_picture: false,
        }
    }

    pub fn video(index: usize, codec: &str, bit_rate: Option<u64>) -> Self {
        Self::new(index, CodecType::Video, Some(codec), bit_rate)
    }

    pub fn audio(index: usize, codec: &str, bit_rate: Option<u64>) -> Self {
        Self::new(index, CodecType::Audio, Some(codec), bit_rate)
    }

    pub fn subtitle(index: usize, codec: &str) -> Self {
        Self::new(index, CodecType::Subtitle, Some(codec), None)
    }

    pub fn other(index: usize, codec: &str) -> Self {
        Self::new(index, CodecType::Other, Some(codec), None)
    }

    /// Mark as embedded cover art. Only meaningful for video streams.
    pub fn with_attached_picture(mut self, attached: bool) -> Self {
        self.is_attached_picture = attached && self.codec_type == CodecType::Video;
        self
    }
}

/// What to do with a single stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Copy,
    TranscodeVideo,
    TranscodeAudio,
    TranscodeSubtitleToMovText,
}

/// Per-stream decision produced by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamAction {
    pub stream_index: usize,
    pub action: ActionKind,
    pub target_bit_rate: Option<u64>,
}

impl StreamAction {
    pub fn copy(stream_index: usize) -> Self {
        Self {
            stream_index,
            action: ActionKind::Copy,
            target_bit_rate: None,
        }
    }

    pub fn transcode(stream_index: usize, action: ActionKind, bit_rate: Option<u64>) -> Self {
        Self {
            stream_index,
            action,
            target_bit_rate: bit_rate,
        }
    }

    pub fn is_copy(&self) -> bool {
        self.action == ActionKind::Copy
    }
}

/// Overall compliance decision for a file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceVerdict {
    pub is_compliant: bool,
    pub reasons: Vec<String>,
}

impl ComplianceVerdict {
    pub fn from_reasons(reasons: Vec<String>) -> Self {
        Self {
            is_compliant: reasons.is_empty(),
            reasons,
        }
    }

    /// Reasons joined for display
    pub fn summary(&self) -> String {
        self.reasons.join(", ")
    }
}

/// Codec selection handed to the transcoding engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodecChoice {
    Copy,
    Encode(String),
}

impl CodecChoice {
    /// Engine-level codec argument
    pub fn as_arg(&self) -> &str {
        match self {
            CodecChoice::Copy => "copy",
            CodecChoice::Encode(encoder) => encoder,
        }
    }
}

/// Explicit per-stream directive; one per input stream, in input order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamDirective {
    pub input_index: usize,
    pub codec: CodecChoice,
    pub bit_rate: Option<u64>,
}

/// Everything needed to convert and replace one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionPlan {
    pub source_path: PathBuf,
    pub temporary_output_path: PathBuf,
    pub final_output_path: PathBuf,
    pub backup_path: PathBuf,
    pub stream_actions: Vec<StreamAction>,
    pub directives: Vec<StreamDirective>,
}

impl ConversionPlan {
    /// Engine request writing to the temporary output, overwriting leftovers
    pub fn transcode_request(&self) -> TranscodeRequest {
        TranscodeRequest {
            source: self.source_path.clone(),
            output: self.temporary_output_path.clone(),
            directives: self.directives.clone(),
            overwrite: true,
        }
    }
}

/// Request/response contract of the external transcoding engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscodeRequest {
    pub source: PathBuf,
    pub output: PathBuf,
    pub directives: Vec<StreamDirective>,
    pub overwrite: bool,
}

/// Result of a completed replacement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionSuccess {
    pub final_output_path: PathBuf,
    pub backup_path: PathBuf,
}

/// What happened to one candidate file
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    Compliant {
        path: PathBuf,
    },
    DryRun {
        path: PathBuf,
        reasons: Vec<String>,
    },
    Converted {
        path: PathBuf,
        reasons: Vec<String>,
        success: ConversionSuccess,
    },
    Failed {
        path: PathBuf,
        error: DomainError,
    },
}

impl FileOutcome {
    pub fn path(&self) -> &Path {
        match self {
            FileOutcome::Compliant { path }
            | FileOutcome::DryRun { path, .. }
            | FileOutcome::Converted { path, .. }
            | FileOutcome::Failed { path, .. } => path,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, FileOutcome::Failed { .. })
    }
}
