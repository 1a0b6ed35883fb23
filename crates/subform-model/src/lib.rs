//! Data model for checklist subforms.

pub mod error;
pub mod field;
pub mod options;
pub mod subform;

pub use error::{ModelError, Result};
pub use field::{Field, SINGLE_SELECT, TagKind, YES_NO_OPTIONS};
pub use options::{FieldOrder, NamingMode, PipelineOptions};
pub use subform::Subform;
