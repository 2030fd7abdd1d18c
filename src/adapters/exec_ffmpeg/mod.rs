//! FFmpeg execution adapter
//!
//! Invokes the `ffmpeg` executable with an explicit per-stream mapping. Every
//! input stream gets its own `-map`, and codec/bitrate options are addressed
//! by output position, so the engine never falls back to its default stream
//! selection.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// FFmpeg-based execution adapter
pub struct FFmpegAdapter {
    binary: PathBuf,
}

impl FFmpegAdapter {
    /// Create new FFmpeg adapter invoking the given executable
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Build the full argument list for a request
    pub fn build_args(request: &TranscodeRequest) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["-nostdin".into(), "-hide_banner".into()];
        let overwrite = if request.overwrite { "-y" } else { "-n" };
        args.push(overwrite.into());
        args.push("-i".into());
        args.push(request.source.clone().into_os_string());

        for directive in &request.directives {
            args.push("-map".into());
            args.push(format!("0:{}", directive.input_index).into());
        }

        for (position, directive) in request.directives.iter().enumerate() {
            args.push(format!("-c:{}", position).into());
            args.push(directive.codec.as_arg().into());
            if let Some(bit_rate) = directive.bit_rate {
                args.push(format!("-b:{}", position).into());
                args.push(bit_rate.to_string().into());
            }
        }

        args.push(request.output.clone().into_os_string());
        args
    }
}

#[async_trait]
impl TranscodePort for FFmpegAdapter {
    async fn transcode(&self, request: &TranscodeRequest) -> Result<(), DomainError> {
        let args = Self::build_args(request);
        debug!(binary = %self.binary.display(), ?args, "Running ffmpeg");
        info!(
            source = %request.source.display(),
            output = %request.output.display(),
            streams = request.directives.len(),
            "Transcoding"
        );

        let output = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                DomainError::transcode(
                    &request.source,
                    format!("could not run {}: {}", self.binary.display(), e),
                )
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let diagnostic = if stderr.trim().is_empty() {
                format!("ffmpeg exited with {}", output.status)
            } else {
                stderr.trim().to_string()
            };
            return Err(DomainError::transcode(&request.source, diagnostic));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn args_as_strings(request: &TranscodeRequest) -> Vec<String> {
        FFmpegAdapter::build_args(request)
            .into_iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_build_args_maps_every_stream_explicitly() {
        let request = TranscodeRequest {
            source: PathBuf::from("/m/in.avi"),
            output: PathBuf::from("/m/in_temp.mp4"),
            directives: vec![
                StreamDirective {
                    input_index: 0,
                    codec: CodecChoice::Encode("libx264".to_string()),
                    bit_rate: Some(1_000_000),
                },
                StreamDirective {
                    input_index: 1,
                    codec: CodecChoice::Copy,
                    bit_rate: None,
                },
                StreamDirective {
                    input_index: 2,
                    codec: CodecChoice::Encode("mov_text".to_string()),
                    bit_rate: None,
                },
            ],
            overwrite: true,
        };

        let args = args_as_strings(&request);

        assert_eq!(
            args,
            vec![
                "-nostdin", "-hide_banner", "-y", "-i", "/m/in.avi",
                "-map", "0:0", "-map", "0:1", "-map", "0:2",
                "-c:0", "libx264", "-b:0", "1000000",
                "-c:1", "copy",
                "-c:2", "mov_text",
                "/m/in_temp.mp4",
            ]
        );
    }

    #[test]
    fn test_build_args_without_overwrite() {
        let request = TranscodeRequest {
            source: PathBuf::from("a.mkv"),
            output: PathBuf::from("a_temp.mp4"),
            directives: vec![],
            overwrite: false,
        };

        let args = args_as_strings(&request);

        assert_eq!(args[2], "-n");
        assert_eq!(args.last().map(String::as_str), Some("a_temp.mp4"));
    }

    #[test]
    fn test_output_position_follows_directive_order() {
        let request = TranscodeRequest {
            source: PathBuf::from("a.mkv"),
            output: PathBuf::from("a_temp.mp4"),
            directives: vec![
                StreamDirective {
                    input_index: 3,
                    codec: CodecChoice::Encode("aac".to_string()),
                    bit_rate: Some(96_000),
                },
                StreamDirective {
                    input_index: 5,
                    codec: CodecChoice::Copy,
                    bit_rate: None,
                },
            ],
            overwrite: true,
        };

        let args = args_as_strings(&request).join(" ");

        assert!(args.contains("-map 0:3 -map 0:5"));
        assert!(args.contains("-c:0 aac -b:0 96000 -c:1 copy"));
    }

    #[tokio::test]
    async fn test_missing_binary_is_transcode_failure() {
        let adapter = FFmpegAdapter::new("vidnorm-nonexistent-ffmpeg");
        let request = TranscodeRequest {
            source: PathBuf::from("in.avi"),
            output: PathBuf::from("in_temp.mp4"),
            directives: vec![],
            overwrite: true,
        };

        let err = adapter.transcode(&request).await.unwrap_err();

        assert_eq!(err.kind(), FailureKind::Transcode);
        assert!(!Path::new("in_temp.mp4").exists());
    }
}
