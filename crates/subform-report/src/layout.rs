//! Block-level document model consumed by layout engines.
//!
//! Renderers describe a document as an ordered list of [`Block`]s. A
//! [`LayoutEngine`] turns that list into bytes on a fixed-width page and owns
//! wrapping, pagination, and font metrics.

use crate::error::Result;

/// Text role of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    /// Step or instruction heading.
    Instruction,
    /// Body text under a heading.
    Content,
}

/// One label/value row of a two-column table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub label: String,
    pub value: String,
}

impl TableRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Full-width boxed title.
    TitleBox(String),
    /// Bordered two-column label/value table.
    Table(Vec<TableRow>),
    Paragraph {
        style: TextStyle,
        /// Rendered in front of the text, followed by `": "`.
        label: Option<String>,
        text: String,
    },
    /// Vertical gap, in points.
    Spacer(u16),
}

/// A rendered subform, ready for layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    pub fn title_box(&mut self, text: impl Into<String>) {
        self.blocks.push(Block::TitleBox(text.into()));
    }

    pub fn table(&mut self, rows: Vec<TableRow>) {
        self.blocks.push(Block::Table(rows));
    }

    pub fn heading(&mut self, text: impl Into<String>) {
        self.blocks.push(Block::Paragraph {
            style: TextStyle::Instruction,
            label: None,
            text: text.into(),
        });
    }

    pub fn property(&mut self, label: impl Into<String>, text: impl Into<String>) {
        self.blocks.push(Block::Paragraph {
            style: TextStyle::Content,
            label: Some(label.into()),
            text: text.into(),
        });
    }

    pub fn spacer(&mut self, points: u16) {
        self.blocks.push(Block::Spacer(points));
    }

    /// Plain text of every block except spacers, one entry per block.
    ///
    /// Table rows are joined with `" | "`.
    pub fn outline(&self) -> Vec<String> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::TitleBox(text) => Some(format!("[{text}]")),
                Block::Table(rows) => Some(
                    rows.iter()
                        .map(|row| format!("{}: {}", row.label, row.value))
                        .collect::<Vec<_>>()
                        .join(" | "),
                ),
                Block::Paragraph { label, text, .. } => Some(match label {
                    Some(label) => format!("{label}: {text}"),
                    None => text.clone(),
                }),
                Block::Spacer(_) => None,
            })
            .collect()
    }
}

/// Turns a block list into a finished document.
pub trait LayoutEngine {
    /// File extension of produced documents, without the dot.
    fn extension(&self) -> &str;

    fn layout(&self, document: &Document) -> Result<Vec<u8>>;
}
