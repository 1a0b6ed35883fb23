//! Checklist column names.

pub const NAMING_CONVENTION: &str = "NAMING CONVENTION";
pub const INSPECTION_TASK: &str = "Inspection Task";
pub const FREQUENCY: &str = "Frequency";
pub const CONTRACTOR_ASSIGNMENT: &str = "JB Contractor Assignment";
pub const TASK_ASSIGNMENT: &str = "JB Task Assignment";
pub const DESCRIPTION: &str = "Description";
pub const MEASUREMENT_TYPE: &str = "Measurement Type";
pub const RESPONSE_TYPE: &str = "Response Type";

/// Columns whose absence aborts ingestion. Other columns read as empty.
pub const REQUIRED_COLUMNS: [&str; 3] = [NAMING_CONVENTION, INSPECTION_TASK, DESCRIPTION];
