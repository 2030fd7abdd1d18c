//! Utility modules

pub mod logging;
pub mod path;

pub use logging::{LogFormat, LogLevel, LoggingConfig, LoggingSystem};
pub use path::PathUtils;
