//! Field ordering within a subform.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;
use subform_model::{Field, FieldOrder};

/// Trailing hyphen, digits, optional letters: `X-5`, `X-5B`.
static TASK_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-([0-9]+)([A-Za-z]*)$").expect("Invalid task suffix regex"));

/// Sort key derived from an inspection task.
///
/// Variant order puts every numbered task before every unnumbered one.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum TaskSortKey<'a> {
    /// Trailing `-<digits><letters>`: numeric value, then letter suffix.
    Numbered(u64, &'a str),
    /// No usable suffix; ordered by the raw task text.
    Unnumbered(&'a str),
}

/// Extract the sort key of an inspection task.
pub fn task_sort_key(inspection_task: &str) -> TaskSortKey<'_> {
    TASK_SUFFIX
        .captures(inspection_task)
        .and_then(|captures| {
            let number = captures.get(1)?.as_str().parse::<u64>().ok()?;
            let suffix = captures.get(2).map_or("", |suffix| suffix.as_str());
            Some(TaskSortKey::Numbered(number, suffix))
        })
        .unwrap_or(TaskSortKey::Unnumbered(inspection_task))
}

fn compare_tasks(left: &Field, right: &Field) -> Ordering {
    task_sort_key(&left.inspection_task).cmp(&task_sort_key(&right.inspection_task))
}

/// Apply the configured order in place. Sorting is stable.
pub fn order_fields(fields: &mut [Field], order: FieldOrder) {
    match order {
        FieldOrder::Encounter => {}
        FieldOrder::TaskSuffix => fields.sort_by(compare_tasks),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(task: &str, frequency: &str) -> Field {
        Field {
            inspection_task: task.to_string(),
            frequency: frequency.to_string(),
            ..Field::default()
        }
    }

    fn tasks(fields: &[Field]) -> Vec<&str> {
        fields
            .iter()
            .map(|field| field.inspection_task.as_str())
            .collect()
    }

    #[test]
    fn sort_keys() {
        assert_eq!(task_sort_key("X-5"), TaskSortKey::Numbered(5, ""));
        assert_eq!(task_sort_key("X-5B"), TaskSortKey::Numbered(5, "B"));
        assert_eq!(
            task_sort_key("2.16-SA-ACCU-3"),
            TaskSortKey::Numbered(3, "")
        );
        assert_eq!(task_sort_key("X-5.1"), TaskSortKey::Unnumbered("X-5.1"));
        assert_eq!(task_sort_key("12"), TaskSortKey::Unnumbered("12"));
        assert_eq!(task_sort_key(""), TaskSortKey::Unnumbered(""));
        assert_eq!(
            task_sort_key("X-99999999999999999999999"),
            TaskSortKey::Unnumbered("X-99999999999999999999999")
        );
    }

    #[test]
    fn suffix_sort_orders_numbers_then_letters_then_unnumbered() {
        let mut fields = vec![
            field("Zeta", ""),
            field("X-10", ""),
            field("X-5B", ""),
            field("Alpha", ""),
            field("X-5", ""),
            field("X-2", ""),
        ];
        order_fields(&mut fields, FieldOrder::TaskSuffix);
        assert_eq!(
            tasks(&fields),
            vec!["X-2", "X-5", "X-5B", "X-10", "Alpha", "Zeta"]
        );
    }

    #[test]
    fn suffix_sort_is_stable() {
        let mut fields = vec![
            field("A-3", "first"),
            field("B-1", ""),
            field("C-3", "second"),
            field("", "empty-1"),
            field("", "empty-2"),
        ];
        order_fields(&mut fields, FieldOrder::TaskSuffix);
        let frequencies: Vec<&str> = fields.iter().map(|f| f.frequency.as_str()).collect();
        assert_eq!(frequencies, vec!["", "first", "second", "empty-1", "empty-2"]);
    }

    #[test]
    fn encounter_order_leaves_fields_alone() {
        let mut fields = vec![field("X-9", ""), field("X-1", "")];
        order_fields(&mut fields, FieldOrder::Encounter);
        assert_eq!(tasks(&fields), vec!["X-9", "X-1"]);
    }
}
