//! Error types for bench-report

use thiserror::Error;

/// Result type alias for bench-report operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for bench-report
///
/// Parse failures carry the offending raw input so a failed run is
/// diagnosable without re-reading the report file. All parse errors are
/// terminal: the first one aborts the whole report.
#[derive(Error, Debug)]
pub enum Error {
    /// A data line did not split into exactly 4 whitespace-separated fields.
    #[error("malformed benchmark line, expected 4 whitespace-separated fields: {line:?}")]
    MalformedLine { line: String },

    /// A numeric field (iteration count, duration magnitude, thread count)
    /// failed to parse.
    #[error("invalid {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    /// The unit field is not the one supported literal. This is a "not yet
    /// implemented" signal for the converter, not bad input data.
    #[error("unsupported unit {unit:?}, only \"ns/op\" is implemented")]
    UnsupportedUnit { unit: String },

    /// The description field did not split into exactly 5 `/`-segments.
    #[error("malformed benchmark description, expected 5 '/'-separated segments: {description:?}")]
    MalformedDescription { description: String },

    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    TemplateError(#[from] minijinja::Error),
}
