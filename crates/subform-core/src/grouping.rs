//! Grouping of normalized fields into subforms.

use std::collections::HashMap;

use subform_model::{Field, NamingMode};

use crate::naming::resolve_name;
use crate::normalize::KeyedField;

/// Fields grouped by resolved name, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubformGroups {
    groups: Vec<(String, Vec<Field>)>,
    index: HashMap<String, usize>,
}

impl SubformGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field to the group named `name`, creating it if needed.
    pub fn push(&mut self, name: String, field: Field) {
        match self.index.get(&name) {
            Some(&position) => self.groups[position].1.push(field),
            None => {
                self.index.insert(name.clone(), self.groups.len());
                self.groups.push((name, vec![field]));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&[Field]> {
        self.index
            .get(name)
            .map(|&position| self.groups[position].1.as_slice())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(name, _)| name.as_str())
    }

    pub fn into_groups(self) -> Vec<(String, Vec<Field>)> {
        self.groups
    }
}

/// Group fields by resolved name. Names compare by exact string equality.
pub fn group_fields<I>(fields: I, mode: NamingMode) -> SubformGroups
where
    I: IntoIterator<Item = KeyedField>,
{
    let mut groups = SubformGroups::new();
    for KeyedField { raw_key, field } in fields {
        let name = resolve_name(&raw_key, &field.inspection_task, mode);
        groups.push(name, field);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyed(raw_key: &str, inspection_task: &str) -> KeyedField {
        KeyedField {
            raw_key: raw_key.to_string(),
            field: Field {
                inspection_task: inspection_task.to_string(),
                ..Field::default()
            },
        }
    }

    #[test]
    fn groups_keep_first_seen_order() {
        let groups = group_fields(
            vec![
                keyed("B", "B-1"),
                keyed("A", "A-1"),
                keyed("B", "B-2"),
            ],
            NamingMode::MergeNumbered,
        );
        let names: Vec<&str> = groups.names().collect();
        assert_eq!(names, vec!["B", "A"]);
        let tasks: Vec<&str> = groups
            .get("B")
            .expect("group B")
            .iter()
            .map(|field| field.inspection_task.as_str())
            .collect();
        assert_eq!(tasks, vec!["B-1", "B-2"]);
    }

    #[test]
    fn resolved_hyphen_key_merges_into_numbered_group() {
        let fields = vec![
            keyed("2.16-SA-ACCU-3", "2.16-SA-ACCU-3-1"),
            keyed("-SA-ACCU-3", "2.16-SA-ACCU-3-2"),
        ];
        let merged = group_fields(fields.clone(), NamingMode::MergeNumbered);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged.get("2.16-SA-ACCU-3").map(<[Field]>::len), Some(2));

        let separate = group_fields(fields, NamingMode::KeepSeparate);
        assert_eq!(separate.len(), 2);
        assert!(separate.get("-SA-ACCU-3").is_some());
    }

    #[test]
    fn no_fields_no_groups() {
        let groups = group_fields(Vec::new(), NamingMode::KeepSeparate);
        assert!(groups.is_empty());
        assert_eq!(groups.names().count(), 0);
    }

    #[test]
    fn names_differing_in_case_stay_apart() {
        let groups = group_fields(
            vec![keyed("misc", ""), keyed("Misc", "")],
            NamingMode::MergeNumbered,
        );
        assert_eq!(groups.len(), 2);
    }
}
