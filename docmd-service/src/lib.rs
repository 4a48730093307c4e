//! Fetch, convert and cache rich-text documents.
//!
//! The conversion itself lives in `docmd-converters-markdown` and is a pure
//! function of the document. This crate supplies what sits around it:
//!
//! - [`DocumentSource`] - fetches a document by identifier ([`FileSource`]
//!   reads JSON payloads from a directory)
//! - [`ResultCache`] - rendered results kept for a freshness window
//! - [`document_id`] - identifier extraction from bare ids or document URLs
//! - [`Service`] - fetch, convert and cache in one call
//!
//! ```no_run
//! use docmd_converters_core::Options;
//! use docmd_service::{FileSource, Service};
//!
//! let service = Service::new(FileSource::new("documents"), Options::default());
//! let rendered = service.render_input("https://docs.google.com/document/d/abc123/edit")?;
//! println!("{}", rendered.content);
//! # Ok::<(), docmd_service::Error>(())
//! ```

mod cache;
mod error;
mod id;
mod service;
mod source;

pub use cache::{CachedResult, DEFAULT_MAX_AGE, ResultCache};
pub use error::Error;
pub use id::{document_id, is_valid_id};
pub use service::Service;
pub use source::{DocumentSource, FileSource};
