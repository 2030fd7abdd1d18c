//! File replacement engine
//!
//! Runs the transcoding engine into a temporary sibling file and only then
//! swaps it into place, keeping the original bytes under a backup name.

pub mod replacement;

pub use replacement::ReplacementProtocol;

/// Steps of the replacement sequence, used for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplacementPhase {
    /// Existence checks before anything is written
    Preflight,
    /// Engine writing the temporary output
    Transcoding,
    /// Original renamed to its backup name
    BackingUp,
    /// Temporary output renamed to the final name
    Promoting,
    Completed,
}
