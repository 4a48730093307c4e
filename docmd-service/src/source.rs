//! Where documents come from.

use std::{io::ErrorKind, path::PathBuf};

use docmd_model::Document;

use crate::{Error, id::is_valid_id};

/// A source of documents keyed by identifier.
///
/// Implementations report their own failures; the service passes them on
/// without retrying.
pub trait DocumentSource {
    /// Fetch and ingest the document named `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no such document exists, or any error
    /// the source hits while fetching or ingesting it.
    fn fetch(&self, id: &str) -> Result<Document, Error>;
}

impl<S: DocumentSource + ?Sized> DocumentSource for &S {
    fn fetch(&self, id: &str) -> Result<Document, Error> {
        (**self).fetch(id)
    }
}

/// Reads `<root>/<id>.json` payloads from disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}.json"))
    }
}

impl DocumentSource for FileSource {
    #[tracing::instrument(skip(self), fields(root = %self.root.display()))]
    fn fetch(&self, id: &str) -> Result<Document, Error> {
        if !is_valid_id(id) {
            return Err(Error::InvalidIdentifier(id.to_string()));
        }
        let path = self.path_for(id);
        let payload = match std::fs::read_to_string(&path) {
            Ok(payload) => payload,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::NotFound(id.to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(docmd_model::parse(&payload)?)
    }
}
