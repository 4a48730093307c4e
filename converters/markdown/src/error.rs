//! Error types for the Markdown converter.

/// Errors that can occur during Markdown conversion.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error during conversion.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 conversion error.
    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The input document could not be ingested.
    #[error("Input error: {0}")]
    Input(#[from] docmd_model::Error),
}
