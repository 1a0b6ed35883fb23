//! Naming-convention key resolution.

use subform_model::NamingMode;

/// Resolve the subform name for a row.
///
/// Under [`NamingMode::MergeNumbered`] a key starting with `-` borrows the
/// section number in front of the first hyphen of the inspection task
/// (`-SA-ACCU-3` + `2.16-SA-ACCU-3` gives `2.16-SA-ACCU-3`). When no section
/// number is available the key is returned unchanged.
pub fn resolve_name(raw_key: &str, inspection_task: &str, mode: NamingMode) -> String {
    match mode {
        NamingMode::KeepSeparate => raw_key.to_string(),
        NamingMode::MergeNumbered => match section_prefix(raw_key, inspection_task) {
            Some(section) => format!("{section}{raw_key}"),
            None => raw_key.to_string(),
        },
    }
}

fn section_prefix<'a>(raw_key: &str, inspection_task: &'a str) -> Option<&'a str> {
    if !raw_key.starts_with('-') {
        return None;
    }
    inspection_task
        .split('-')
        .next()
        .filter(|segment| !segment.is_empty())
}
