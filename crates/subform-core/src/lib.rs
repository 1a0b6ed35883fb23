//! Core subform pipeline.
//!
//! Stages, in order:
//!
//! - **normalize**: one checklist row to one [`subform_model::Field`]
//! - **grouping**: fields to named groups, resolving hyphen-prefixed keys
//! - **ordering**: field order within each group
//!
//! [`folder::folder_for`] decides where a subform's outputs are placed.

pub mod folder;
pub mod grouping;
pub mod naming;
pub mod normalize;
pub mod ordering;
pub mod pipeline;

pub use folder::folder_for;
pub use grouping::{SubformGroups, group_fields};
pub use naming::resolve_name;
pub use normalize::{KeyedField, collapse_whitespace, normalize_row};
pub use ordering::{TaskSortKey, order_fields, task_sort_key};
pub use pipeline::{SubformSet, build_subforms};
