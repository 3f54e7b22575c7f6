use std::fmt;
use std::io;

use thiserror::Error;

/// Library-wide error type for adcraft operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Copy generation failed.
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Export template rendering failed.
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration values are present but invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Required environment variable is not set.
    #[error("Environment variable '{0}' is not set")]
    EnvironmentVariableMissing(String),

    /// No history entry with the given id.
    #[error("History entry '{0}' not found")]
    HistoryEntryNotFound(String),

    /// Storage key contains characters outside the allowed set.
    #[error("Invalid storage key '{0}': must be alphanumeric with hyphens or underscores")]
    InvalidStorageKey(String),

    /// Export requested before any result exists.
    #[error("No generated results to export")]
    NoResultToExport,

    /// A generation is already running for this session.
    #[error("A generation is already in progress")]
    GenerationInProgress,

    /// A generation outcome arrived with no generation pending.
    #[error("No generation is in progress")]
    NotGenerating,

    /// Writing the export document failed after the result was produced.
    #[error("Export failed: {0}")]
    ExportFailed(String),

    /// Campaign option value is not one of the supported choices.
    #[error("Invalid {kind} '{value}'. Available: {available}")]
    InvalidOption { kind: &'static str, value: String, available: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping errors to exit codes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidConfig(_)
            | AppError::InvalidStorageKey(_)
            | AppError::InvalidOption { .. }
            | AppError::TomlParse(_) => io::ErrorKind::InvalidInput,
            AppError::Generation(GenerationError::Validation(_)) => io::ErrorKind::InvalidInput,
            AppError::Generation(GenerationError::Transport { .. }) => io::ErrorKind::Other,
            AppError::Generation(_) | AppError::Json(_) | AppError::Template(_) => {
                io::ErrorKind::InvalidData
            }
            AppError::EnvironmentVariableMissing(_) | AppError::HistoryEntryNotFound(_) => {
                io::ErrorKind::NotFound
            }
            AppError::NoResultToExport => io::ErrorKind::NotFound,
            AppError::GenerationInProgress => io::ErrorKind::WouldBlock,
            AppError::NotGenerating => io::ErrorKind::InvalidInput,
            AppError::ExportFailed(_) => io::ErrorKind::Other,
        }
    }
}

/// Failure taxonomy of a single copy-generation call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Required campaign input is missing; no request was sent.
    #[error("{0}")]
    Validation(String),

    /// The service was unreachable or answered with a non-success status.
    #[error("Generation service request failed ({kind}): {message}")]
    Transport { kind: TransportErrorKind, message: String },

    /// The service answered without any payload.
    #[error("Generation service returned no data")]
    EmptyResponse,

    /// The payload does not match the declared response schema.
    #[error("Generation service returned a malformed response: {0}")]
    MalformedResponse(String),
}

impl GenerationError {
    /// Message shown to the user when a generation fails.
    pub fn user_message(&self) -> String {
        match self {
            GenerationError::Validation(message) => message.clone(),
            _ => "Failed to generate ad copy. Please try again.".to_string(),
        }
    }
}

/// Classification of transport failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    Timeout,
    Connect,
    Status(u16),
    Other,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportErrorKind::Timeout => write!(f, "timeout"),
            TransportErrorKind::Connect => write!(f, "connection"),
            TransportErrorKind::Status(code) => write!(f, "status {}", code),
            TransportErrorKind::Other => write!(f, "transport"),
        }
    }
}
