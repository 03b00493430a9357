use std::path::PathBuf;

/// Failures talking to the processing backend.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Failed to send request: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Backend responded with status: {0}")]
    Status(reqwest::StatusCode),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} has an invalid value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Entry document not found at {0}")]
    MissingEntryDocument(PathBuf),
    #[error("Invalid bind address {0}")]
    InvalidAddress(String),
    #[error("Server I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
