//! Error types for the fallible surfaces (request decoding, export).
//!
//! The scheduling core itself never fails: degenerate input yields an
//! empty or partial schedule instead.

use thiserror::Error;

/// Errors raised while decoding a schedule request.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("malformed request: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid clock time '{value}', expected HH:MM")]
    InvalidClockTime { value: String },
}

/// Errors raised while writing a schedule workbook.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("workbook error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("failed writing workbook to {path}: {source}")]
    Save {
        path: String,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}
