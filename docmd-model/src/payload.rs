//! Wire shape of the rich-text API payload and its conversion into the
//! typed [`model`](crate::model).
//!
//! The payload is deliberately lenient: every field a well-formed response
//! may omit defaults to empty. Only a missing `body` is rejected.

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::{
    Error,
    model::{
        Block, Bullet, Document, HeadingLevel, ListKind, MAX_NESTING_LEVEL, Paragraph, RgbColor,
        Table, TableCell, TableRow, TextRun, TextStyle,
    },
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawDocument {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    body: Option<RawBody>,
    #[serde(default)]
    lists: FxHashMap<String, RawList>,
}

#[derive(Debug, Deserialize)]
struct RawBody {
    #[serde(default)]
    content: Vec<RawStructuralElement>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStructuralElement {
    #[serde(default)]
    paragraph: Option<RawParagraph>,
    #[serde(default)]
    table: Option<RawTable>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawParagraph {
    #[serde(default)]
    elements: Vec<RawParagraphElement>,
    #[serde(default)]
    paragraph_style: Option<RawParagraphStyle>,
    #[serde(default)]
    bullet: Option<RawBullet>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawParagraphStyle {
    #[serde(default)]
    named_style_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBullet {
    #[serde(default)]
    list_id: String,
    #[serde(default)]
    nesting_level: usize,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawParagraphElement {
    #[serde(default)]
    text_run: Option<RawTextRun>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTextRun {
    #[serde(default)]
    content: String,
    #[serde(default)]
    text_style: RawTextStyle,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
struct RawTextStyle {
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    strikethrough: bool,
    #[serde(default)]
    weighted_font_family: Option<RawFontFamily>,
    #[serde(default)]
    background_color: Option<RawOptionalColor>,
    #[serde(default)]
    link: Option<RawLink>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFontFamily {
    #[serde(default)]
    font_family: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawOptionalColor {
    #[serde(default)]
    color: Option<RawColor>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawColor {
    #[serde(default)]
    rgb_color: Option<RgbColor>,
}

#[derive(Debug, Default, Deserialize)]
struct RawLink {
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTable {
    #[serde(default)]
    table_rows: Vec<RawTableRow>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTableRow {
    #[serde(default)]
    table_cells: Vec<RawTableCell>,
}

#[derive(Debug, Default, Deserialize)]
struct RawTableCell {
    #[serde(default)]
    content: Vec<RawStructuralElement>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawList {
    #[serde(default)]
    list_properties: RawListProperties,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawListProperties {
    #[serde(default)]
    nesting_levels: Vec<RawNestingLevel>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNestingLevel {
    #[serde(default)]
    glyph_symbol: Option<String>,
}

impl RawDocument {
    /// Lower the payload into the typed model.
    pub(crate) fn into_document(self) -> Result<Document, Error> {
        let body = self.body.ok_or(Error::MissingBody)?;
        let lists = &self.lists;
        let blocks = body
            .content
            .into_iter()
            .filter_map(|element| element.into_block(lists))
            .collect();
        Ok(Document {
            title: self.title.unwrap_or_default(),
            blocks,
        })
    }
}

impl RawStructuralElement {
    fn into_block(self, lists: &FxHashMap<String, RawList>) -> Option<Block> {
        match (self.paragraph, self.table) {
            (Some(paragraph), _) => Some(Block::Paragraph(paragraph.into_paragraph(lists))),
            (None, Some(table)) => Some(Block::Table(table.into_table(lists))),
            (None, None) => {
                tracing::debug!("skipping structural element without paragraph or table");
                None
            }
        }
    }
}

impl RawParagraph {
    fn into_paragraph(self, lists: &FxHashMap<String, RawList>) -> Paragraph {
        let heading = self
            .paragraph_style
            .and_then(|style| style.named_style_type)
            .map_or(HeadingLevel::NoHeading, |name| {
                HeadingLevel::from_named_style(&name)
            });
        let bullet = self.bullet.map(|bullet| {
            let glyph = lists
                .get(&bullet.list_id)
                .and_then(|list| {
                    list.list_properties
                        .nesting_levels
                        .get(bullet.nesting_level)
                })
                .and_then(|level| level.glyph_symbol.as_deref());
            if bullet.nesting_level > MAX_NESTING_LEVEL {
                tracing::debug!(
                    list_id = %bullet.list_id,
                    nesting_level = bullet.nesting_level,
                    "clamping list nesting level"
                );
            }
            Bullet::new(bullet.list_id, bullet.nesting_level, ListKind::from_glyph(glyph))
        });
        let runs = self
            .elements
            .into_iter()
            .filter_map(|element| element.text_run)
            .map(RawTextRun::into_text_run)
            .collect();
        Paragraph {
            heading,
            runs,
            bullet,
        }
    }
}

impl RawTextRun {
    fn into_text_run(self) -> TextRun {
        let style = self.text_style;
        TextRun {
            content: self.content,
            style: TextStyle {
                bold: style.bold,
                italic: style.italic,
                strikethrough: style.strikethrough,
                font_family: style.weighted_font_family.and_then(|f| f.font_family),
                background_color: style
                    .background_color
                    .and_then(|c| c.color)
                    .and_then(|c| c.rgb_color),
                link: style.link.and_then(|l| l.url),
            },
        }
    }
}

impl RawTable {
    fn into_table(self, lists: &FxHashMap<String, RawList>) -> Table {
        let rows = self
            .table_rows
            .into_iter()
            .map(|row| TableRow {
                cells: row
                    .table_cells
                    .into_iter()
                    .map(|cell| TableCell {
                        content: cell
                            .content
                            .into_iter()
                            .filter_map(|element| {
                                if element.paragraph.is_none() {
                                    tracing::debug!("dropping non-paragraph content in table cell");
                                }
                                element.paragraph
                            })
                            .map(|paragraph| paragraph.into_paragraph(lists))
                            .collect(),
                    })
                    .collect(),
            })
            .collect();
        Table { rows }
    }
}
