//! Fixed-width plain-text layout engine.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ColumnConstraint, ContentArrangement, Table, Width};

use crate::error::Result;
use crate::layout::{Block, Document, LayoutEngine, TableRow, TextStyle};

/// Narrow page, roughly half a letter page in monospace columns.
pub const DEFAULT_PAGE_WIDTH: u16 = 60;

/// Narrowest page that still fits a bordered two-column table.
pub const MIN_PAGE_WIDTH: u16 = 24;

/// Points per text line when converting spacers.
const LINE_POINTS: u16 = 12;

/// Lays documents out as UTF-8 text at a fixed column width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextLayout {
    width: u16,
}

impl Default for TextLayout {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_WIDTH)
    }
}

impl TextLayout {
    pub fn new(width: u16) -> Self {
        Self {
            width: width.max(MIN_PAGE_WIDTH),
        }
    }

    fn base_table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::DynamicFullWidth)
            .set_width(self.width)
            .force_no_tty();
        table
    }

    fn title_box(&self, text: &str) -> String {
        let mut table = self.base_table();
        table.add_row(vec![Cell::new(text).set_alignment(CellAlignment::Center)]);
        table.to_string()
    }

    fn label_value_table(&self, rows: &[TableRow]) -> String {
        let mut table = self.base_table();
        table.set_constraints(vec![
            ColumnConstraint::Absolute(Width::Percentage(30)),
            ColumnConstraint::Absolute(Width::Percentage(70)),
        ]);
        for row in rows {
            table.add_row(vec![
                Cell::new(format!("{}:", row.label)),
                Cell::new(&row.value),
            ]);
        }
        table.to_string()
    }

    fn paragraph(&self, style: TextStyle, label: Option<&str>, text: &str) -> String {
        let body = match label {
            Some(label) => format!("{label}: {text}"),
            None => text.to_string(),
        };
        let indent = match style {
            TextStyle::Instruction => "",
            TextStyle::Content => "  ",
        };
        let width = usize::from(self.width).saturating_sub(indent.len());
        wrap_words(&body, width)
            .into_iter()
            .map(|line| format!("{indent}{line}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl LayoutEngine for TextLayout {
    fn extension(&self) -> &str {
        "txt"
    }

    fn layout(&self, document: &Document) -> Result<Vec<u8>> {
        let mut lines: Vec<String> = Vec::new();
        for block in &document.blocks {
            match block {
                Block::TitleBox(text) => lines.push(self.title_box(text)),
                Block::Table(rows) => lines.push(self.label_value_table(rows)),
                Block::Paragraph { style, label, text } => {
                    lines.push(self.paragraph(*style, label.as_deref(), text));
                }
                Block::Spacer(points) => {
                    let count = points.div_ceil(LINE_POINTS);
                    lines.extend((0..count).map(|_| String::new()));
                }
            }
        }
        let mut output = lines.join("\n");
        output.push('\n');
        Ok(output.into_bytes())
    }
}

/// Greedy word wrap. Words longer than `width` are split.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;
    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        if current_len > 0 && current_len + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current_len += word.len();
        current.extend(word);
    }
    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_word_boundaries() {
        assert_eq!(
            wrap_words("one two three four", 9),
            vec!["one two", "three", "four"]
        );
        assert_eq!(wrap_words("", 10), vec![""]);
        assert_eq!(wrap_words("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn width_has_floor() {
        assert_eq!(TextLayout::new(3), TextLayout::new(MIN_PAGE_WIDTH));
        assert_eq!(TextLayout::default(), TextLayout::new(DEFAULT_PAGE_WIDTH));
    }

    #[test]
    fn lines_fit_the_page() {
        let mut document = Document::new("doc");
        document.title_box("SUBFORM: 2.8-AC-Annual");
        document.spacer(6);
        document.table(vec![
            TableRow::new("Contractor", "ACME Mechanical Services"),
            TableRow::new(
                "Description",
                "Inspect condenser coils, clean filters and verify refrigerant levels",
            ),
        ]);
        document.heading("STEP 1: Create a Text field");
        document.property("Description", "A long property text that will need wrapping");

        let layout = TextLayout::new(40);
        let bytes = layout.layout(&document).expect("layout");
        let text = String::from_utf8(bytes).expect("utf-8");

        assert!(text.contains("SUBFORM: 2.8-AC-Annual"));
        assert!(text.contains("ACME"));
        assert!(text.contains("STEP 1: Create a Text field"));
        assert!(text.lines().all(|line| line.chars().count() <= 40));
        assert!(text.ends_with('\n'));
    }
}
