use std::path::PathBuf;

/// Errors raised while ingesting a document payload.
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("document payload has no body")]
    MissingBody,

    #[error("invalid document payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unable to read {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Whether the payload itself was unusable, as opposed to failing to read it.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::MissingBody | Self::Json(_))
    }
}
