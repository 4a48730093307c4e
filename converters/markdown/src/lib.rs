//! Markdown converter for rich-text documents.
//!
//! Converts a [`Document`] (paragraphs with styled runs, list bullets and
//! tables) into GitHub Flavored Markdown in one pass over its blocks.
//!
//! # Example
//!
//! ```
//! use docmd_converters_core::{Converter, Options};
//! use docmd_converters_markdown::Processor;
//! use docmd_model::{Block, Document, HeadingLevel, Paragraph, TextRun};
//!
//! let doc = Document::new(
//!     "Notes",
//!     vec![Block::Paragraph(
//!         Paragraph::new(vec![TextRun::plain("Title\n")]).with_heading(HeadingLevel::Heading(2)),
//!     )],
//! );
//! let rendered = Processor::new(Options::default()).convert(&doc)?;
//! assert_eq!(rendered.title, "Notes");
//! assert_eq!(rendered.content, "## Title");
//! # Ok::<(), docmd_converters_markdown::Error>(())
//! ```
//!
//! # Rendering rules
//!
//! - **Headings** - `HEADING_N` paragraphs get `N` leading `#`
//! - **Lists** - `- ` for unordered bullets, `N. ` for ordered ones, two
//!   spaces of indent per nesting level. Numbering restarts whenever the list
//!   id changes and is shared by every nesting level of a list.
//! - **Inline styles** - strikethrough (`~~`), italic (`*`), bold (`**`),
//!   then links, innermost first
//! - **Code** - runs in the code font or on a red-tinted background become
//!   inline code, or open a fenced block when they span lines or mention
//!   PowerShell. A following blank non-code run closes the fence.
//! - **Tables** - pipe tables whose first row is the header
//!
//! # Limitations
//!
//! - Images, footnotes, headers/footers and comments are dropped
//! - Nested ordered lists are numbered continuously rather than per level
//! - A document that ends inside a code block leaves the fence unterminated
//!   (logged via `tracing::warn!`)

use docmd_converters_core::{Converter, Options, Rendered};
use docmd_model::Document;

mod error;
mod markdown_visitor;
mod state;
mod table;

pub use error::Error;
pub use markdown_visitor::MarkdownVisitor;

/// Markdown converter processor.
///
/// Holds configuration only; each conversion gets its own rendering state.
#[derive(Clone, Debug, Default)]
pub struct Processor {
    options: Options,
}

impl Converter for Processor {
    type Error = Error;

    fn new(options: Options) -> Self {
        Self { options }
    }

    fn options(&self) -> &Options {
        &self.options
    }

    #[tracing::instrument(skip_all, fields(title = %doc.title, blocks = doc.blocks.len()))]
    fn convert(&self, doc: &Document) -> Result<Rendered, Self::Error> {
        let mut buffer = Vec::new();
        let mut visitor = MarkdownVisitor::new(&mut buffer, &self.options);
        visitor.visit_document(doc)?;
        let content = String::from_utf8(buffer)?.trim().to_string();
        Ok(Rendered {
            title: doc.title.clone(),
            content,
        })
    }
}

/// Parse a document payload and convert it with default options.
///
/// # Errors
///
/// Returns [`Error::Input`] if the payload is unusable.
pub fn convert_json(input: &str) -> Result<Rendered, Error> {
    let doc = docmd_model::parse(input)?;
    Processor::new(Options::default()).convert(&doc)
}
