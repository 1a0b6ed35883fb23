//! CLI library components for the subform builder.

pub mod logging;
pub mod pipeline;
pub mod types;
