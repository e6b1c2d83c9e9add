use std::path::PathBuf;

use thiserror::Error;

use crate::Symbol;

/// Validation and contract errors exposed by `stockmine-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol must start with an ASCII letter: '{ch}'")]
    SymbolInvalidStart { ch: char },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("date must be formatted as YYYY-MM-DD: '{value}'")]
    InvalidDate { value: String },
    #[error("month must be formatted as YYYY/MM: '{value}'")]
    InvalidYearMonth { value: String },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },

    #[error("rank count must be greater than zero")]
    InvalidRankCount,
    #[error("invalid grouping '{value}', expected one of contiguous, merged")]
    InvalidGrouping { value: String },
    #[error("invalid value for {key}: '{value}'")]
    InvalidSetting { key: &'static str, value: String },

    #[error("request_id must be at least 8 characters")]
    InvalidRequestId,
    #[error("schema_version must match vMAJOR.MINOR.PATCH: '{value}'")]
    InvalidSchemaVersion { value: String },

    #[error("error code cannot be empty")]
    EmptyErrorCode,
    #[error("error message cannot be empty")]
    EmptyErrorMessage,
}

/// Failures of the monthly analysis operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("no daily records to aggregate")]
    EmptyInput,

    #[error("{symbol} has {months} monthly average(s); at least 2 are needed for a standard deviation")]
    InsufficientData { symbol: Symbol, months: usize },
}

impl AnalysisError {
    /// Stable machine-readable code used in envelope errors.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::InsufficientData { .. } => "insufficient_data",
        }
    }
}

/// Failures while producing daily records from an external source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode daily records: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    #[error("record {index}: field '{field}' {reason}")]
    InvalidField {
        index: usize,
        field: &'static str,
        reason: String,
    },
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
