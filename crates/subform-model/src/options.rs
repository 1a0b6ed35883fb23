//! Configuration options for subform generation.

use serde::{Deserialize, Serialize};

/// How naming-convention keys that start with a hyphen are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NamingMode {
    /// Prefix the section number taken from the row's inspection task, so the
    /// row joins its numbered group (`-SA-ACCU-3` becomes `2.16-SA-ACCU-3`).
    #[default]
    MergeNumbered,
    /// Keep hyphen-prefixed keys as their own subforms.
    KeepSeparate,
}

/// Order of fields within a subform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FieldOrder {
    /// Keep checklist row order.
    #[default]
    Encounter,
    /// Sort by the trailing `-<digits><letters>` of the inspection task.
    TaskSuffix,
}

/// Options controlling the grouping pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PipelineOptions {
    pub naming: NamingMode,
    pub ordering: FieldOrder,
}

impl PipelineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_naming(mut self, naming: NamingMode) -> Self {
        self.naming = naming;
        self
    }

    #[must_use]
    pub fn with_ordering(mut self, ordering: FieldOrder) -> Self {
        self.ordering = ordering;
        self
    }
}
