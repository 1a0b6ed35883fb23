use std::path::PathBuf;

use subform_report::{DocumentStyle, WrittenDocument};

#[derive(Debug)]
pub struct GenerateResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub rows_read: usize,
    pub rows_skipped: usize,
    /// One entry per record file on disk.
    pub records: Vec<RecordSummary>,
    /// Names whose record was replaced by a later name with the same file stem.
    pub overwritten: Vec<String>,
    /// Selector that matched no subform.
    pub missing: Option<String>,
}

impl GenerateResult {
    pub fn field_total(&self) -> usize {
        self.records.iter().map(|record| record.fields).sum()
    }
}

#[derive(Debug)]
pub struct RecordSummary {
    pub name: String,
    pub folder: String,
    pub fields: usize,
    pub path: PathBuf,
}

#[derive(Debug)]
pub struct RenderResult {
    pub styles: Vec<DocumentStyle>,
    pub subforms: usize,
    pub documents: Vec<WrittenDocument>,
    pub missing: Option<String>,
}

impl RenderResult {
    pub fn documents_for(&self, style: DocumentStyle) -> impl Iterator<Item = &WrittenDocument> {
        self.documents
            .iter()
            .filter(move |document| document.style == style)
    }
}
