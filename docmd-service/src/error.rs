/// Errors surfaced by document sources and the conversion service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("not a document identifier or document URL: {0}")]
    InvalidIdentifier(String),

    #[error("document not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid document: {0}")]
    Model(#[from] docmd_model::Error),

    #[error("conversion failed: {0}")]
    Convert(#[from] docmd_converters_markdown::Error),

    /// Failure reported by a custom [`DocumentSource`](crate::DocumentSource).
    #[error("fetch failed: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),
}
