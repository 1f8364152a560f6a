//! Error types for countersynth

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Countersynth errors
///
/// The synthesis pipeline itself is total over pre-validated configurations;
/// every variant here is produced by configuration parsing or by
/// [`validate_config`](crate::config_validate::validate_config).
#[derive(Error, Debug)]
pub enum Error {
    #[error("unsupported bit width {0} (supported widths are 2, 3 and 4)")]
    BitWidth(usize),

    #[error("sequence value {value} out of range for a {bits}-bit counter (0..={max})")]
    SequenceValue {
        value: usize,
        bits: usize,
        max: usize,
    },

    #[error("custom sequence must contain at least 2 states, got {0}")]
    SequenceLength(usize),

    #[error("reset state {value} out of range for a {bits}-bit counter (0..={max})")]
    ResetState {
        value: usize,
        bits: usize,
        max: usize,
    },

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_norway::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}
