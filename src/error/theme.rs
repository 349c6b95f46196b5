use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("preference storage is unavailable")]
    StorageUnavailable,
    #[error("failed to read preference {key}: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write preference {key}: {reason}")]
    Write { key: String, reason: String },
    #[error("preference file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("preference file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}
