//! Conversion planning
//!
//! Turns a classifier verdict into a concrete [`ConversionPlan`]: the sibling
//! paths used by the replacement protocol and one explicit engine directive
//! per input stream.

use std::collections::HashSet;
use std::path::Path;

use tracing::debug;

use crate::domain::errors::DomainError;
use crate::domain::model::*;
use crate::domain::rules::ComplianceProfile;

pub mod paths;

pub use paths::{
    backup_path_for, final_output_path_for, is_backup_path, temporary_output_path_for, BACKUP_SUFFIX,
};

/// Builds conversion plans for non-compliant files
pub struct ConversionPlanner;

impl ConversionPlanner {
    /// Plan the conversion of `source`.
    ///
    /// Returns `Ok(None)` for compliant files, even when some subtitle
    /// actions are not plain copies.
    pub fn plan(
        profile: &ComplianceProfile,
        source: &Path,
        verdict: &ComplianceVerdict,
        actions: &[StreamAction],
    ) -> Result<Option<ConversionPlan>, DomainError> {
        if verdict.is_compliant {
            return Ok(None);
        }

        Self::check_unique_indices(source, actions)?;

        let target = profile.target_extension.as_str();
        let plan = ConversionPlan {
            source_path: source.to_path_buf(),
            temporary_output_path: temporary_output_path_for(source, target)?,
            final_output_path: final_output_path_for(source, target)?,
            backup_path: backup_path_for(source)?,
            stream_actions: actions.to_vec(),
            directives: Self::directives(profile, actions),
        };

        debug!(
            source = %plan.source_path.display(),
            temp = %plan.temporary_output_path.display(),
            output = %plan.final_output_path.display(),
            streams = plan.directives.len(),
            "Planned conversion"
        );

        Ok(Some(plan))
    }

    /// Map every action to an explicit engine directive, in input order
    pub fn directives(profile: &ComplianceProfile, actions: &[StreamAction]) -> Vec<StreamDirective> {
        actions
            .iter()
            .map(|action| {
                let codec = match action.action {
                    ActionKind::Copy => CodecChoice::Copy,
                    ActionKind::TranscodeVideo => {
                        CodecChoice::Encode(profile.video_encoder.clone())
                    }
                    ActionKind::TranscodeAudio => {
                        CodecChoice::Encode(profile.audio_encoder.clone())
                    }
                    ActionKind::TranscodeSubtitleToMovText => {
                        CodecChoice::Encode(profile.subtitle_encoder.clone())
                    }
                };

                StreamDirective {
                    input_index: action.stream_index,
                    codec,
                    bit_rate: action.target_bit_rate,
                }
            })
            .collect()
    }

    fn check_unique_indices(source: &Path, actions: &[StreamAction]) -> Result<(), DomainError> {
        let mut seen = HashSet::with_capacity(actions.len());
        for action in actions {
            if !seen.insert(action.stream_index) {
                return Err(DomainError::unexpected(
                    source,
                    format!("stream index {} reported more than once", action.stream_index),
                ));
            }
        }
        Ok(())
    }
}
