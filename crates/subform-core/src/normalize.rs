//! Row normalization: one checklist row to one field.

use subform_ingest::ChecklistRow;
use subform_ingest::columns::{
    CONTRACTOR_ASSIGNMENT, DESCRIPTION, FREQUENCY, INSPECTION_TASK, MEASUREMENT_TYPE,
    NAMING_CONVENTION, RESPONSE_TYPE, TASK_ASSIGNMENT,
};
use subform_model::{Field, SINGLE_SELECT, YES_NO_OPTIONS};

const MEASUREMENT_YES_NO: &str = "YesNo";
const RESPONSE_SPECIFIC_LIST: &str = "Specific List";

/// A field together with the raw naming-convention key of its row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedField {
    /// Trimmed, never empty.
    pub raw_key: String,
    pub field: Field,
}

/// Collapse every whitespace run, newlines included, to one space.
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize a row, or `None` when its naming-convention key is blank.
pub fn normalize_row(row: &ChecklistRow) -> Option<KeyedField> {
    let raw_key = row.get(NAMING_CONVENTION).trim();
    if raw_key.is_empty() {
        return None;
    }
    let measurement_type = row.get(MEASUREMENT_TYPE).trim();
    let response_type = row.get(RESPONSE_TYPE).trim();
    let is_yes_no = measurement_type == MEASUREMENT_YES_NO;

    let field = Field {
        inspection_task: row.get(INSPECTION_TASK).trim().to_string(),
        frequency: row.get(FREQUENCY).trim().to_string(),
        contractor_assignment: row.get(CONTRACTOR_ASSIGNMENT).trim().to_string(),
        task_assignment: row.get(TASK_ASSIGNMENT).trim().to_string(),
        description: collapse_whitespace(row.get(DESCRIPTION)),
        field_type: is_yes_no.then(|| SINGLE_SELECT.to_string()),
        options: (is_yes_no && response_type == RESPONSE_SPECIFIC_LIST)
            .then(|| Vec::from(YES_NO_OPTIONS.map(String::from))),
    };
    Some(KeyedField {
        raw_key: raw_key.to_string(),
        field,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn row(pairs: &[(&str, &str)]) -> ChecklistRow {
        ChecklistRow::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn blank_key_is_skipped() {
        assert!(normalize_row(&row(&[(NAMING_CONVENTION, " \t ")])).is_none());
        assert!(normalize_row(&row(&[(INSPECTION_TASK, "2.1-X-1")])).is_none());
    }

    #[test]
    fn values_are_trimmed_and_description_collapsed() {
        let keyed = normalize_row(&row(&[
            (NAMING_CONVENTION, " 2.8-AC-Annual "),
            (INSPECTION_TASK, " 2.8-AC-Annual-1"),
            (FREQUENCY, "Annual "),
            (CONTRACTOR_ASSIGNMENT, " ACME "),
            (DESCRIPTION, "  Check the\n\n filters\tand  belts "),
        ]))
        .expect("field");
        assert_eq!(keyed.raw_key, "2.8-AC-Annual");
        assert_eq!(keyed.field.inspection_task, "2.8-AC-Annual-1");
        assert_eq!(keyed.field.frequency, "Annual");
        assert_eq!(keyed.field.contractor_assignment, "ACME");
        assert_eq!(keyed.field.description, "Check the filters and belts");
        assert_eq!(keyed.field.field_type, None);
        assert_eq!(keyed.field.options, None);
    }

    #[test]
    fn yes_no_specific_list_gets_options() {
        let keyed = normalize_row(&row(&[
            (NAMING_CONVENTION, "A"),
            (MEASUREMENT_TYPE, "YesNo"),
            (RESPONSE_TYPE, "Specific List"),
        ]))
        .expect("field");
        assert_eq!(keyed.field.field_type.as_deref(), Some(SINGLE_SELECT));
        assert_eq!(
            keyed.field.options,
            Some(vec!["Yes".to_string(), "No".to_string()])
        );
    }

    #[test]
    fn yes_no_without_specific_list_has_type_only() {
        let keyed = normalize_row(&row(&[
            (NAMING_CONVENTION, "A"),
            (MEASUREMENT_TYPE, " YesNo "),
            (RESPONSE_TYPE, "Free Text"),
        ]))
        .expect("field");
        assert_eq!(keyed.field.field_type.as_deref(), Some(SINGLE_SELECT));
        assert!(keyed.field.options.is_none());
    }

    #[test]
    fn measurement_match_is_case_sensitive() {
        let keyed = normalize_row(&row(&[
            (NAMING_CONVENTION, "A"),
            (MEASUREMENT_TYPE, "yesno"),
            (RESPONSE_TYPE, "Specific List"),
        ]))
        .expect("field");
        assert!(keyed.field.field_type.is_none());
        assert!(keyed.field.options.is_none());
    }

    proptest! {
        #[test]
        fn collapsed_description_has_no_whitespace_runs(text in "[a-z \t\n\r]{0,40}") {
            let collapsed = collapse_whitespace(&text);
            prop_assert!(!collapsed.contains("  "));
            prop_assert!(!collapsed.contains('\n'));
            prop_assert!(!collapsed.contains('\t'));
            prop_assert_eq!(collapsed.trim(), collapsed.as_str());
        }

        #[test]
        fn options_imply_single_select(
            measurement in prop::sample::select(vec!["YesNo", "Number", "", "yesno"]),
            response in prop::sample::select(vec!["Specific List", "Free Text", ""]),
        ) {
            let keyed = normalize_row(&row(&[
                (NAMING_CONVENTION, "A"),
                (MEASUREMENT_TYPE, measurement),
                (RESPONSE_TYPE, response),
            ]))
            .expect("field");
            prop_assert!(keyed.field.validate().is_ok());
        }
    }
}
