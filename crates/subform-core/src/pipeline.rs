//! Checklist rows to subforms: normalize, group, order.

use subform_ingest::ChecklistRow;
use subform_model::{PipelineOptions, Subform};
use tracing::{debug, info};

use crate::grouping::group_fields;
use crate::normalize::normalize_row;
use crate::ordering::order_fields;

/// Subforms built from one checklist, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubformSet {
    pub subforms: Vec<Subform>,
    pub rows_read: usize,
    pub rows_skipped: usize,
}

impl SubformSet {
    pub fn get(&self, name: &str) -> Option<&Subform> {
        self.subforms.iter().find(|subform| subform.name() == name)
    }

    pub fn len(&self) -> usize {
        self.subforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subforms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Subform> {
        self.subforms.iter()
    }

    /// Total fields across all subforms.
    pub fn field_total(&self) -> usize {
        self.subforms.iter().map(Subform::field_count).sum()
    }
}

/// Build subforms from checklist rows.
pub fn build_subforms(rows: &[ChecklistRow], options: &PipelineOptions) -> SubformSet {
    let mut rows_skipped = 0usize;
    let mut keyed = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        match normalize_row(row) {
            Some(field) => keyed.push(field),
            None => {
                rows_skipped += 1;
                // Header is line 1.
                debug!(line = index + 2, "skipping row without naming convention");
            }
        }
    }

    let groups = group_fields(keyed, options.naming);
    let subforms: Vec<Subform> = groups
        .into_groups()
        .into_iter()
        .map(|(name, mut fields)| {
            order_fields(&mut fields, options.ordering);
            debug!(subform = %name, fields = fields.len(), "built subform");
            Subform::new(name, fields)
        })
        .collect();

    info!(
        rows = rows.len(),
        skipped = rows_skipped,
        subforms = subforms.len(),
        naming = ?options.naming,
        ordering = ?options.ordering,
        "grouped checklist into subforms"
    );
    SubformSet {
        subforms,
        rows_read: rows.len(),
        rows_skipped,
    }
}
