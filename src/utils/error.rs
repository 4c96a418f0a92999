use thiserror::Error;

/// The panel-observable projection of an error. Panels never expose the
/// underlying cause; the UI only distinguishes these three cases.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("data source unavailable")]
    Unavailable,

    #[error("malformed response from data source")]
    MalformedResponse,

    #[error("location unavailable")]
    LocationUnavailable,
}

#[derive(Error, Debug)]
pub enum DashError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    #[error("Location unavailable: {reason}")]
    LocationUnavailable { reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl DashError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DashError::MalformedResponse { .. } => ErrorKind::MalformedResponse,
            DashError::LocationUnavailable { .. } => ErrorKind::LocationUnavailable,
            // Transport, IO and serialization problems all surface to the
            // panel as the source being unavailable.
            _ => ErrorKind::Unavailable,
        }
    }
}

pub type Result<T> = std::result::Result<T, DashError>;
