// Domain rules - Compliance policy and stream classification

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::errors::*;
use crate::domain::model::*;

/// Target profile the tree is normalized to.
///
/// All codec and extension sets are compared lowercase; extensions are
/// stored without a leading dot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplianceProfile {
    /// Containers that never trigger a conversion on their own
    pub compliant_containers: BTreeSet<String>,
    /// Video codecs that are copied as-is
    pub video_codecs: BTreeSet<String>,
    /// Audio codecs that are copied as-is
    pub audio_codecs: BTreeSet<String>,
    /// Text subtitle codecs rewritten to the subtitle encoder
    pub text_subtitle_codecs: BTreeSet<String>,
    /// Extension of every produced file
    pub target_extension: String,
    pub video_encoder: String,
    pub audio_encoder: String,
    pub subtitle_encoder: String,
    /// Extensions that make a file a candidate for probing
    pub candidate_extensions: BTreeSet<String>,
}

fn set_of(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|item| item.to_string()).collect()
}

impl Default for ComplianceProfile {
    fn default() -> Self {
        Self {
            compliant_containers: set_of(&["mp4", "mkv"]),
            video_codecs: set_of(&["h264", "hevc", "h265"]),
            audio_codecs: set_of(&["aac"]),
            text_subtitle_codecs: set_of(&["subrip", "ass", "ssa", "webvtt", "mov_text"]),
            target_extension: "mp4".to_string(),
            video_encoder: "libx264".to_string(),
            audio_encoder: "aac".to_string(),
            subtitle_encoder: "mov_text".to_string(),
            candidate_extensions: set_of(&[
                "mp4", "mkv", "avi", "mov", "flv", "wmv", "webm", "m4v", "mpg", "mpeg", "3gp",
            ]),
        }
    }
}

impl ComplianceProfile {
    /// Lowercase every set entry and strip leading dots from extensions
    pub fn normalized(mut self) -> Self {
        fn normalize(set: BTreeSet<String>) -> BTreeSet<String> {
            set.into_iter()
                .map(|item| item.trim().trim_start_matches('.').to_lowercase())
                .filter(|item| !item.is_empty())
                .collect()
        }

        self.compliant_containers = normalize(self.compliant_containers);
        self.video_codecs = normalize(self.video_codecs);
        self.audio_codecs = normalize(self.audio_codecs);
        self.text_subtitle_codecs = normalize(self.text_subtitle_codecs);
        self.candidate_extensions = normalize(self.candidate_extensions);
        self.target_extension = self
            .target_extension
            .trim()
            .trim_start_matches('.')
            .to_lowercase();
        self
    }

    /// Check the profile can produce sensible output paths and engine calls
    pub fn validate(&self) -> Result<(), DomainError> {
        let ext = &self.target_extension;
        if ext.is_empty() || ext.contains('.') || ext.contains('/') || ext.contains('\\') {
            return Err(DomainError::BadArgs(format!(
                "Invalid target extension: '{}'",
                ext
            )));
        }

        // Produced files must classify as compliant on the next run
        if !self.compliant_containers.contains(ext) {
            return Err(DomainError::BadArgs(format!(
                "target_extension '{}' must be listed in compliant_containers",
                ext
            )));
        }

        for (name, encoder) in [
            ("video_encoder", &self.video_encoder),
            ("audio_encoder", &self.audio_encoder),
            ("subtitle_encoder", &self.subtitle_encoder),
        ] {
            if encoder.trim().is_empty() {
                return Err(DomainError::BadArgs(format!("{} cannot be empty", name)));
            }
        }

        if self.candidate_extensions.is_empty() {
            return Err(DomainError::BadArgs(
                "candidate_extensions cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Whether a file with this extension (dot optional) is probed at all
    pub fn is_candidate_extension(&self, extension: &str) -> bool {
        let ext = extension.trim_start_matches('.').to_lowercase();
        self.candidate_extensions.contains(&ext)
    }

    fn is_compliant_container(&self, extension: &str) -> bool {
        let ext = extension.trim_start_matches('.').to_lowercase();
        self.compliant_containers.contains(&ext)
    }
}

/// Business rules deciding which streams must be re-encoded
pub struct StreamClassifier;

impl StreamClassifier {
    /// Classify a file's streams against the profile.
    ///
    /// `extension` is the file suffix as it appears on disk, including its
    /// dot (e.g. `.AVI`). It is quoted verbatim in the container reason.
    /// Returns one action per stream, in input order.
    pub fn classify(
        profile: &ComplianceProfile,
        extension: &str,
        streams: &[StreamDescriptor],
    ) -> (ComplianceVerdict, Vec<StreamAction>) {
        let mut reasons = Vec::new();

        // Container is checked first so its reason always leads
        if !profile.is_compliant_container(extension) {
            reasons.push(format!("container {}", extension));
        }

        let actions = streams
            .iter()
            .map(|stream| Self::classify_stream(profile, stream, &mut reasons))
            .collect();

        (ComplianceVerdict::from_reasons(reasons), actions)
    }

    fn classify_stream(
        profile: &ComplianceProfile,
        stream: &StreamDescriptor,
        reasons: &mut Vec<String>,
    ) -> StreamAction {
        let codec = stream.codec_name.to_lowercase();

        match stream.codec_type {
            CodecType::Video => {
                if stream.is_attached_picture {
                    // Cover art is preserved whatever its codec
                    StreamAction::copy(stream.index)
                } else if !profile.video_codecs.contains(&codec) {
                    reasons.push(format!("video codec {}", codec));
                    StreamAction::transcode(
                        stream.index,
                        ActionKind::TranscodeVideo,
                        stream.bit_rate,
                    )
                } else {
                    StreamAction::copy(stream.index)
                }
            }
            CodecType::Audio => {
                if !profile.audio_codecs.contains(&codec) {
                    reasons.push(format!("audio codec {}", codec));
                    StreamAction::transcode(
                        stream.index,
                        ActionKind::TranscodeAudio,
                        stream.bit_rate,
                    )
                } else {
                    StreamAction::copy(stream.index)
                }
            }
            CodecType::Subtitle => {
                // Subtitle format never forces a conversion by itself
                if profile.text_subtitle_codecs.contains(&codec) {
                    StreamAction::transcode(
                        stream.index,
                        ActionKind::TranscodeSubtitleToMovText,
                        None,
                    )
                } else {
                    StreamAction::copy(stream.index)
                }
            }
            CodecType::Other => StreamAction::copy(stream.index),
        }
    }
}

#[cfg(test)]
mod tests;
