//! Rich-text document model for `docmd`.
//!
//! The input payload is the JSON a rich-text documents API returns for a
//! single document: a title, a body of structural elements (paragraphs and
//! tables) and a table of list definitions. [`parse`] turns that payload into
//! a [`Document`], resolving named paragraph styles into [`HeadingLevel`]s and
//! bullet glyphs into [`ListKind`]s along the way.
//!
//! # Example
//!
//! ```
//! let doc = docmd_model::parse(r#"{
//!     "title": "Notes",
//!     "body": { "content": [
//!         { "paragraph": {
//!             "paragraphStyle": { "namedStyleType": "HEADING_1" },
//!             "elements": [ { "textRun": { "content": "Intro\n" } } ]
//!         } }
//!     ] }
//! }"#)?;
//! assert_eq!(doc.title, "Notes");
//! assert_eq!(doc.blocks.len(), 1);
//! # Ok::<(), docmd_model::Error>(())
//! ```

use std::{io::Read, path::Path};

use tracing::instrument;

mod error;
mod model;
mod payload;

pub use error::Error;
pub use model::{
    Block, Bullet, Document, HeadingLevel, ListKind, MAX_NESTING_LEVEL, Paragraph, RgbColor, Table,
    TableCell, TableRow, TextRun, TextStyle, UNORDERED_GLYPH,
};

use payload::RawDocument;

/// Parse a document payload from a string.
///
/// # Errors
///
/// Returns [`Error::Json`] when the payload is not valid JSON of the expected
/// shape and [`Error::MissingBody`] when it has no `body`.
#[instrument(skip(input))]
pub fn parse(input: &str) -> Result<Document, Error> {
    let raw: RawDocument = serde_json::from_str(input)?;
    let doc = raw.into_document()?;
    tracing::debug!(title = %doc.title, blocks = doc.blocks.len(), "parsed document");
    Ok(doc)
}

/// Parse a document payload from a reader.
///
/// # Errors
///
/// Same as [`parse`], plus [`Error::Io`] if reading fails.
#[instrument(skip(reader))]
pub fn parse_from_reader<R: Read>(reader: &mut R) -> Result<Document, Error> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse(&input)
}

/// Parse a document payload from a file.
///
/// # Errors
///
/// Same as [`parse`], plus [`Error::File`] if the file cannot be read.
#[instrument(skip(path))]
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document, Error> {
    let path = path.as_ref();
    let input = std::fs::read_to_string(path).map_err(|source| Error::File {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&input)
}
