//! Subform report generation.
//!
//! This crate persists subform records and renders subforms into documents
//! in two styles:
//!
//! - **Reference**: a bordered table per field, with contractor headers
//! - **Instruction**: numbered authoring steps, with task-assignment headers
//!
//! Renderers produce a [`Document`] of layout blocks; a [`LayoutEngine`]
//! turns it into bytes. [`TextLayout`] is the bundled fixed-width engine.

mod atomic;
pub mod error;
pub mod headers;
pub mod instruction;
pub mod layout;
pub mod record;
pub mod reference;
pub mod text_layout;
pub mod writer;

pub use error::{ReportError, Result};
pub use headers::{HeaderPlan, plan_for, plan_headers};
pub use instruction::render_instruction;
pub use layout::{Block, Document, LayoutEngine, TableRow, TextStyle};
pub use record::{
    load_subform_record, load_subform_records, record_path, safe_file_stem,
    write_subform_record,
};
pub use reference::render_reference;
pub use text_layout::{DEFAULT_PAGE_WIDTH, TextLayout};
pub use writer::{
    DocumentStyle, WrittenDocument, document_folder, document_path, folder_counts, write_document,
};
