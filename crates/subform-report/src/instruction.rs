//! Instruction style: numbered steps for building the form by hand.

use subform_model::{Field, SINGLE_SELECT, Subform, TagKind};

use crate::headers::plan_for;
use crate::layout::Document;

pub const INSTRUCTION_LINE: &str = "Follow these steps to create the form fields:";

const DEFAULT_FIELD_TYPE: &str = "Text";
const TITLE_GAP: u16 = 9;
const INSTRUCTION_GAP: u16 = 6;
const HEADER_GAP: u16 = 7;
const STEP_GAP: u16 = 9;

/// Step counter threaded through one document.
#[derive(Debug, Default)]
struct Steps {
    current: u32,
}

impl Steps {
    fn next(&mut self) -> u32 {
        self.current += 1;
        self.current
    }
}

/// Type named in a field's step heading.
pub fn field_type_label(field: &Field) -> &str {
    if field.has_options() {
        SINGLE_SELECT
    } else {
        field.field_type.as_deref().unwrap_or(DEFAULT_FIELD_TYPE)
    }
}

/// Description property: `"<task>: <description>"` when both are present.
pub fn step_description(field: &Field) -> Option<String> {
    match (
        field.inspection_task.is_empty(),
        field.description.is_empty(),
    ) {
        (false, false) => Some(format!(
            "{}: {}",
            field.inspection_task, field.description
        )),
        (false, true) => Some(field.inspection_task.clone()),
        (true, false) => Some(field.description.clone()),
        (true, true) => None,
    }
}

fn info_text_step(document: &mut Document, steps: &mut Steps, tag: &str) {
    document.heading(format!("STEP {}: Create an Info Text field", steps.next()));
    document.property("Content", tag);
    document.spacer(HEADER_GAP);
}

/// Render a subform as step-by-step authoring instructions.
///
/// A subform with one task assignment gets a single Info Text step at the
/// top; a subform mixing assignments gets one before each run.
pub fn render_instruction(subform: &Subform) -> Document {
    let kind = TagKind::Task;
    let plan = plan_for(subform, kind);
    let mut steps = Steps::default();
    let mut document = Document::new(subform.name());
    document.title_box(format!(
        "INSTRUCTIONS FOR CREATING SUBFORM: {}",
        subform.name()
    ));
    document.spacer(TITLE_GAP);
    document.heading(INSTRUCTION_LINE);
    document.spacer(INSTRUCTION_GAP);

    if let Some(tag) = plan.leading() {
        info_text_step(&mut document, &mut steps, tag);
    }

    for (index, field) in subform.fields().iter().enumerate() {
        if let Some(tag) = plan.header_before(index) {
            info_text_step(&mut document, &mut steps, tag);
        }

        document.heading(format!(
            "STEP {}: Create a {} field",
            steps.next(),
            field_type_label(field)
        ));
        let tag = field.assignment_tag(kind).trim();
        if plan.is_mixed() && !tag.is_empty() {
            document.property(kind.label(), tag);
        }
        if let Some(description) = step_description(field) {
            document.property("Description", description);
        }
        if field.has_options()
            && let Some(options) = field.options_display()
        {
            document.property("Options", options);
        }
        document.spacer(STEP_GAP);
    }
    document
}
