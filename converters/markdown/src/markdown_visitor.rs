//! Visitor implementation for Markdown conversion.
//!
//! The walk is a single pass over the document blocks. Paragraphs read and
//! update the shared [`RenderState`] (open code fence, current list and its
//! ordinal); tables are self-contained and never touch it.

use std::io::Write;

use docmd_converters_core::{
    Options,
    code::{POWERSHELL, is_code_run, mentions_powershell},
};
use docmd_model::{
    Block, Bullet, Document, HeadingLevel, ListKind, MAX_NESTING_LEVEL, Paragraph, TextRun,
    TextStyle,
};

use crate::{Error, state::RenderState, table};

const FENCE: &str = "```";

/// Markdown visitor that generates Markdown output from a document.
pub struct MarkdownVisitor<'o, W: Write> {
    writer: W,
    options: &'o Options,
    state: RenderState,
    /// Whether the last thing written was a list item.
    after_list_item: bool,
}

impl<'o, W: Write> MarkdownVisitor<'o, W> {
    /// Create a new Markdown visitor with empty rendering state.
    pub fn new(writer: W, options: &'o Options) -> Self {
        Self {
            writer,
            options,
            state: RenderState::default(),
            after_list_item: false,
        }
    }

    /// Walk every block of `doc` in order.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the underlying writer fails.
    pub fn visit_document(&mut self, doc: &Document) -> Result<(), Error> {
        for block in &doc.blocks {
            self.visit_block(block)?;
        }
        if let Some(fence) = self.state.code_fence() {
            tracing::warn!(
                language = ?fence.language,
                "document ended inside a code block, leaving the fence unterminated"
            );
        }
        Ok(())
    }

    fn visit_block(&mut self, block: &Block) -> Result<(), Error> {
        match block {
            Block::Paragraph(paragraph) => {
                tracing::trace!(runs = paragraph.runs.len(), "visiting paragraph");
                self.visit_paragraph(paragraph)
            }
            Block::Table(table) => {
                tracing::trace!(rows = table.rows.len(), "visiting table");
                self.visit_table(table)
            }
        }
    }

    fn visit_paragraph(&mut self, paragraph: &Paragraph) -> Result<(), Error> {
        if paragraph.runs.is_empty() {
            return Ok(());
        }

        let heading = match paragraph.heading {
            HeadingLevel::Heading(level) => format!("{} ", "#".repeat(usize::from(level))),
            HeadingLevel::NoHeading => String::new(),
        };
        let list_prefix = self.list_prefix(paragraph.bullet.as_ref());

        let mut text = String::new();
        let mut ends_with_fence_close = false;
        for run in &paragraph.runs {
            if self.render_run(run, &mut text) {
                ends_with_fence_close = true;
            } else if !run.content.trim().is_empty() {
                ends_with_fence_close = false;
            }
        }
        let text = text.trim_end();
        if text.trim().is_empty() {
            return Ok(());
        }

        let is_list_item = paragraph.bullet.is_some();
        if self.after_list_item && !is_list_item {
            writeln!(self.writer)?;
        }
        write!(self.writer, "{heading}{list_prefix}{text}")?;
        // A closed fence is always followed by a blank line, list item or not.
        if (is_list_item && !ends_with_fence_close) || self.state.in_code_block() {
            writeln!(self.writer)?;
        } else {
            writeln!(self.writer)?;
            writeln!(self.writer)?;
        }
        self.after_list_item = is_list_item && !ends_with_fence_close;
        Ok(())
    }

    /// Update list state for this paragraph and return its marker.
    fn list_prefix(&mut self, bullet: Option<&Bullet>) -> String {
        let Some(bullet) = bullet else {
            self.state.leave_list();
            return String::new();
        };
        self.state.enter_list(&bullet.list_id);

        let indent = "  ".repeat(bullet.nesting_level.min(MAX_NESTING_LEVEL));
        match bullet.kind {
            ListKind::Unordered => format!("{indent}- "),
            ListKind::Ordered => {
                let ordinal = self.state.next_ordinal();
                format!("{indent}{ordinal}. ")
            }
        }
    }

    /// Append the Markdown for `run` to `out`. Returns `true` when the run
    /// closed an open code block.
    fn render_run(&mut self, run: &TextRun, out: &mut String) -> bool {
        let content = run.content.as_str();
        let trimmed = content.trim();

        if is_code_run(&run.style, self.options) {
            if self.state.in_code_block() {
                out.push_str(content);
            } else if mentions_powershell(content) {
                self.state.open_code_block(Some(POWERSHELL));
                out.push_str(FENCE);
                out.push_str(POWERSHELL);
                out.push('\n');
                out.push_str(trimmed);
            } else if content.contains('\n') {
                self.state.open_code_block(None);
                out.push_str(FENCE);
                out.push('\n');
                out.push_str(trimmed);
            } else if !trimmed.is_empty() {
                out.push_str(&wrap_core(content, |core| {
                    style_core(&format!("`{core}`"), &run.style)
                }));
            } else {
                out.push_str(content);
            }
            return false;
        }

        if self.state.in_code_block() && trimmed.is_empty() {
            self.state.close_code_block();
            out.push_str(FENCE);
            out.push_str("\n\n");
            return true;
        }

        let escape = self.options.escape_text();
        out.push_str(&wrap_core(content, |core| {
            if escape {
                style_core(&escape_markdown(core), &run.style)
            } else {
                style_core(core, &run.style)
            }
        }));
        false
    }

    fn visit_table(&mut self, table: &docmd_model::Table) -> Result<(), Error> {
        if table.rows.is_empty() {
            return Ok(());
        }
        if self.after_list_item {
            writeln!(self.writer)?;
            self.after_list_item = false;
        }
        table::render_table(table, &mut self.writer)?;
        Ok(())
    }
}

/// Apply `wrap` to the trimmed core of `content`, keeping surrounding
/// whitespace outside of any delimiters. Whitespace-only content is returned
/// untouched.
fn wrap_core<F>(content: &str, wrap: F) -> String
where
    F: FnOnce(&str) -> String,
{
    let rest = content.trim_start();
    let core = rest.trim_end();
    if core.is_empty() {
        return content.to_string();
    }
    let leading = content.strip_suffix(rest).unwrap_or_default();
    let trailing = rest.strip_prefix(core).unwrap_or_default();
    format!("{leading}{}{trailing}", wrap(core))
}

/// Wrap `text` in strikethrough, italic, bold and finally link syntax, for
/// the styles actually set.
fn style_core(text: &str, style: &TextStyle) -> String {
    let mut styled = text.to_string();
    if style.strikethrough {
        styled = format!("~~{styled}~~");
    }
    if style.italic {
        styled = format!("*{styled}*");
    }
    if style.bold {
        styled = format!("**{styled}**");
    }
    if let Some(url) = &style.link {
        styled = format!("[{styled}]({url})");
    }
    styled
}

/// Escape special Markdown characters.
///
/// Only escapes characters that actually need escaping in prose context.
pub(crate) fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' | '`' | '*' | '_' | '[' | ']' | '|' => {
                result.push('\\');
                result.push(ch);
            }
            _ => result.push(ch),
        }
    }
    result
}
