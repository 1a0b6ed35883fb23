//! Checklist ingestion: reads the inspection checklist CSV into string-keyed rows.

pub mod checklist;
pub mod columns;
pub mod error;

pub use checklist::{ChecklistRow, read_checklist, read_checklist_from_reader};
pub use error::{IngestError, Result};
