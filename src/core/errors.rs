//! Custom error types for translation operations

use thiserror::Error;

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Connection refused, DNS failure or any other transport failure
    #[error("Network error: {message}")]
    NetworkError {
        /// Transport failure description
        message: String,
    },

    /// Request timeout
    #[error("Request timeout")]
    TimeoutError,

    /// Service answered with a non-2xx status
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Response body is not valid JSON
    #[error("Invalid response: {message}")]
    InvalidResponseError {
        /// Parser failure description
        message: String,
    },

    /// Well-formed response lacking an expected field
    #[error("Missing required field: {field}")]
    MissingField {
        /// Path of the absent field
        field: String,
    },

    /// Caller referenced a column the frame does not have
    #[error("Column not found: {column}")]
    ColumnNotFound {
        /// Requested column name
        column: String,
    },

    /// Target language was empty
    #[error("Target language must not be empty")]
    EmptyTargetLanguage,

    /// Frame shape violation (ragged columns, duplicate names, ...)
    #[error("Invalid frame: {message}")]
    InvalidFrame {
        /// What is wrong with the frame
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Validation failure description
        message: String,
    },

    /// File operation error
    #[error("File error: {path} - {message}")]
    FileError {
        /// Offending path
        path: String,
        /// Underlying I/O failure
        message: String,
    },

    /// CSV error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),
}

/// Coarse classification of a [`TranslationError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never produced a response
    Transport,
    /// The service answered, but not with a usable 2xx JSON body
    Protocol,
    /// The JSON body lacks what the operation needs
    Data,
    /// The caller asked for something impossible
    Usage,
    /// Configuration, local I/O and everything else
    Other,
}

impl TranslationError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TranslationError::NetworkError { .. }
            | TranslationError::TimeoutError
            | TranslationError::HttpError(_) => ErrorKind::Transport,
            TranslationError::ApiError { .. } | TranslationError::InvalidResponseError { .. } => {
                ErrorKind::Protocol
            }
            TranslationError::MissingField { .. } => ErrorKind::Data,
            TranslationError::ColumnNotFound { .. }
            | TranslationError::EmptyTargetLanguage
            | TranslationError::InvalidFrame { .. } => ErrorKind::Usage,
            _ => ErrorKind::Other,
        }
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;
