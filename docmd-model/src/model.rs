//! Typed document model.
//!
//! Everything here is produced by ingestion (see [`crate::parse`]) and is
//! immutable input for the converters. Raw strings that drive rendering
//! decisions (named paragraph styles, bullet glyphs) are already parsed into
//! [`HeadingLevel`] and [`ListKind`] by the time a value of these types exists.

use serde::{Deserialize, Serialize};

/// Bullet glyph marking an unordered list item.
pub const UNORDERED_GLYPH: char = '\u{25CF}';

/// Deepest list nesting level a bullet can carry. Lists define nine levels,
/// numbered from zero; deeper values are clamped to this one.
pub const MAX_NESTING_LEVEL: usize = 8;

/// A parsed document: a title and its top-level blocks in document order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub blocks: Vec<Block>,
}

impl Document {
    #[must_use]
    pub fn new(title: impl Into<String>, blocks: Vec<Block>) -> Self {
        Self {
            title: title.into(),
            blocks,
        }
    }
}

/// A top-level document unit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
}

/// Heading level parsed from a paragraph's named style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingLevel {
    #[default]
    NoHeading,
    Heading(u8),
}

impl HeadingLevel {
    /// Parse a named style such as `HEADING_2`.
    ///
    /// Only `HEADING_` followed by digits is a heading. `TITLE`, `SUBTITLE`,
    /// `NORMAL_TEXT` and anything unparseable are body text.
    #[must_use]
    pub fn from_named_style(style: &str) -> Self {
        style
            .strip_prefix("HEADING_")
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse::<u8>().ok())
            .filter(|level| *level > 0)
            .map_or(Self::NoHeading, Self::Heading)
    }
}

/// Rendering style of a bulleted paragraph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Unordered,
    #[default]
    Ordered,
}

impl ListKind {
    /// Classify a bullet glyph. Missing glyphs count as ordered.
    #[must_use]
    pub fn from_glyph(glyph: Option<&str>) -> Self {
        match glyph {
            Some(glyph) if glyph.contains(UNORDERED_GLYPH) => Self::Unordered,
            Some(_) | None => Self::Ordered,
        }
    }
}

/// List membership of a paragraph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bullet {
    pub list_id: String,
    pub nesting_level: usize,
    pub kind: ListKind,
}

impl Bullet {
    /// Create a bullet, clamping `nesting_level` to [`MAX_NESTING_LEVEL`].
    #[must_use]
    pub fn new(list_id: impl Into<String>, nesting_level: usize, kind: ListKind) -> Self {
        Self {
            list_id: list_id.into(),
            nesting_level: nesting_level.min(MAX_NESTING_LEVEL),
            kind,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub heading: HeadingLevel,
    pub runs: Vec<TextRun>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bullet: Option<Bullet>,
}

impl Paragraph {
    #[must_use]
    pub fn new(runs: Vec<TextRun>) -> Self {
        Self {
            runs,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_heading(mut self, heading: HeadingLevel) -> Self {
        self.heading = heading;
        self
    }

    #[must_use]
    pub fn with_bullet(mut self, bullet: Bullet) -> Self {
        self.bullet = Some(bullet);
        self
    }

    /// Concatenated run contents with no styling applied.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|run| run.content.as_str()).collect()
    }
}

/// A contiguous span of styled text.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub content: String,
    pub style: TextStyle,
}

impl TextRun {
    #[must_use]
    pub fn new(content: impl Into<String>, style: TextStyle) -> Self {
        Self {
            content: content.into(),
            style,
        }
    }

    #[must_use]
    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(content, TextStyle::default())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<RgbColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Color with channels in `0.0..=1.0`. Absent channels are zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RgbColor {
    #[serde(default)]
    pub red: f32,
    #[serde(default)]
    pub green: f32,
    #[serde(default)]
    pub blue: f32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub rows: Vec<TableRow>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    pub content: Vec<Paragraph>,
}

impl TableCell {
    /// Text of every paragraph in the cell, unstyled and concatenated.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.content.iter().map(Paragraph::plain_text).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_level_parses_only_heading_styles() {
        assert_eq!(
            HeadingLevel::from_named_style("HEADING_2"),
            HeadingLevel::Heading(2)
        );
        assert_eq!(
            HeadingLevel::from_named_style("HEADING_6"),
            HeadingLevel::Heading(6)
        );
        assert_eq!(
            HeadingLevel::from_named_style("NORMAL_TEXT"),
            HeadingLevel::NoHeading
        );
        assert_eq!(
            HeadingLevel::from_named_style("TITLE"),
            HeadingLevel::NoHeading
        );
        assert_eq!(
            HeadingLevel::from_named_style("HEADING_"),
            HeadingLevel::NoHeading
        );
        assert_eq!(
            HeadingLevel::from_named_style("HEADING_X"),
            HeadingLevel::NoHeading
        );
        assert_eq!(
            HeadingLevel::from_named_style("HEADING_0"),
            HeadingLevel::NoHeading
        );
    }

    #[test]
    fn list_kind_from_glyph() {
        assert_eq!(ListKind::from_glyph(Some("●")), ListKind::Unordered);
        assert_eq!(ListKind::from_glyph(Some(" ● ")), ListKind::Unordered);
        assert_eq!(ListKind::from_glyph(Some("○")), ListKind::Ordered);
        assert_eq!(ListKind::from_glyph(Some("%0.")), ListKind::Ordered);
        assert_eq!(ListKind::from_glyph(None), ListKind::Ordered);
    }

    #[test]
    fn cell_plain_text_ignores_styles() {
        let bold = TextStyle {
            bold: true,
            ..TextStyle::default()
        };
        let cell = TableCell {
            content: vec![
                Paragraph::new(vec![TextRun::new("Hel", bold), TextRun::plain("lo\n")]),
                Paragraph::new(vec![TextRun::plain("world\n")]),
            ],
        };
        assert_eq!(cell.plain_text(), "Hello\nworld\n");
    }
}
