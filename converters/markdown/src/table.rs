//! Pipe table rendering.
//!
//! ```text
//! | Header 1 | Header 2 |
//! | --- | --- |
//! | Cell 1 | Cell 2 |
//! ```
//!
//! The first row is always the header. Cells are flattened to plain text.

use std::io::Write;

use docmd_model::{Table, TableCell, TableRow};

use crate::Error;

/// Write `table` as a pipe table followed by a blank line.
///
/// Tables without rows produce no output.
pub(crate) fn render_table<W: Write + ?Sized>(table: &Table, writer: &mut W) -> Result<(), Error> {
    let mut rows = table.rows.iter();
    let Some(header) = rows.next() else {
        return Ok(());
    };

    render_row(header, writer)?;
    render_delimiter(header.cells.len(), writer)?;
    for row in rows {
        render_row(row, writer)?;
    }
    writeln!(writer)?;
    Ok(())
}

fn render_row<W: Write + ?Sized>(row: &TableRow, writer: &mut W) -> Result<(), Error> {
    write!(writer, "|")?;
    for cell in &row.cells {
        let text = cell_text(cell);
        if text.is_empty() {
            write!(writer, " |")?;
        } else {
            write!(writer, " {text} |")?;
        }
    }
    writeln!(writer)?;
    Ok(())
}

fn render_delimiter<W: Write + ?Sized>(columns: usize, writer: &mut W) -> Result<(), Error> {
    write!(writer, "|")?;
    for _ in 0..columns {
        write!(writer, " --- |")?;
    }
    writeln!(writer)?;
    Ok(())
}

/// Flatten a cell to a single line of unstyled text.
///
/// Line breaks between the cell's paragraphs collapse to one space and pipes
/// are escaped so the row stays well-formed.
pub(crate) fn cell_text(cell: &TableCell) -> String {
    cell.plain_text()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace('|', "\\|")
}
