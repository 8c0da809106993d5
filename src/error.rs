//! Error taxonomy
//!
//! Generation only ever fails on input validation. Config loading adds
//! I/O and JSON failures on top.

use thiserror::Error;

/// Errors raised while validating a config or generating positions.
#[derive(Debug, Error)]
pub enum SpawnError {
    /// A parameter is out of range for the selected pattern.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    /// The random pattern was requested without an injected source.
    #[error("random pattern requires an injected random source")]
    MissingRandomSource,

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}

impl SpawnError {
    /// True for errors caused by the configuration values themselves
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            SpawnError::InvalidConfig(_) | SpawnError::MissingRandomSource | SpawnError::Json(_)
        )
    }
}
