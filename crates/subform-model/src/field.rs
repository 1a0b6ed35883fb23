//! Field definitions derived from checklist rows.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Field type assigned to Yes/No measurements.
pub const SINGLE_SELECT: &str = "Single Select";

/// Options offered by a Yes/No specific-list field.
pub const YES_NO_OPTIONS: [&str; 2] = ["Yes", "No"];

/// Which assignment tag column a consumer reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// `JB Contractor Assignment`, used by the reference style.
    Contractor,
    /// `JB Task Assignment`, used by the instruction style.
    Task,
}

impl TagKind {
    /// Label shown next to the tag value in rendered documents.
    pub fn label(self) -> &'static str {
        match self {
            TagKind::Contractor => "Contractor",
            TagKind::Task => "Task Assignment",
        }
    }
}

/// One form field, built from a single checklist row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    #[serde(default)]
    pub inspection_task: String,
    #[serde(default)]
    pub frequency: String,
    #[serde(rename = "jb_contractor_assignment", default)]
    pub contractor_assignment: String,
    #[serde(rename = "jb_task_assignment", default)]
    pub task_assignment: String,
    /// Whitespace-normalized description text.
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
    /// `None` and `Some(vec![])` are distinct: only the former omits the key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl Field {
    /// Returns the assignment tag for the given column, possibly empty.
    pub fn assignment_tag(&self, kind: TagKind) -> &str {
        match kind {
            TagKind::Contractor => &self.contractor_assignment,
            TagKind::Task => &self.task_assignment,
        }
    }

    /// True when the field carries at least one option.
    pub fn has_options(&self) -> bool {
        self.options.as_ref().is_some_and(|options| !options.is_empty())
    }

    /// Options joined for display, if the field has an options list.
    pub fn options_display(&self) -> Option<String> {
        self.options.as_ref().map(|options| options.join(", "))
    }

    /// Check that an options list only appears on single-select fields.
    pub fn validate(&self) -> Result<()> {
        if self.has_options() && self.field_type.as_deref() != Some(SINGLE_SELECT) {
            return Err(ModelError::OptionsWithoutSingleSelect {
                inspection_task: self.inspection_task.clone(),
                field_type: self.field_type.clone(),
            });
        }
        Ok(())
    }
}
