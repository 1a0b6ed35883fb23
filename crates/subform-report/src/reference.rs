//! Reference style: one bordered table per field.

use subform_model::{Field, Subform, TagKind};

use crate::headers::plan_for;
use crate::layout::{Document, TableRow};

/// Type shown on contractor header tables.
pub const INFO_TEXT: &str = "Info Text";

const TITLE_GAP: u16 = 6;
const FIELD_GAP: u16 = 9;

/// Render a subform as a reference listing.
///
/// Contractor headers are inserted only when fields name two or more
/// different contractors.
pub fn render_reference(subform: &Subform) -> Document {
    let kind = TagKind::Contractor;
    let plan = plan_for(subform, kind);
    let mut document = Document::new(subform.name());
    document.title_box(format!("SUBFORM: {}", subform.name()));
    document.spacer(TITLE_GAP);

    for (index, field) in subform.fields().iter().enumerate() {
        if let Some(tag) = plan.header_before(index) {
            document.table(vec![
                TableRow::new(kind.label(), tag),
                TableRow::new("Type", INFO_TEXT),
            ]);
            document.spacer(FIELD_GAP);
        }
        document.table(field_rows(field, kind));
        document.spacer(FIELD_GAP);
    }
    document
}

fn field_rows(field: &Field, kind: TagKind) -> Vec<TableRow> {
    let mut rows = vec![
        TableRow::new(kind.label(), field.assignment_tag(kind).trim()),
        TableRow::new("Description", field.description.as_str()),
    ];
    if let Some(field_type) = &field.field_type {
        rows.push(TableRow::new("Type", field_type.as_str()));
    }
    if let Some(options) = field.options_display() {
        rows.push(TableRow::new("Options", options));
    }
    rows
}
