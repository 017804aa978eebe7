//! Error types

/// Failure loading or validating `Settings`
#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    /// Settings file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings JSON is malformed
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is out of range
    #[error("Invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}
