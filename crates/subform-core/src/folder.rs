//! Output folder classification.

/// Folder for subforms whose name starts with a hyphen.
pub const HYPHEN_FOLDER: &str = "-";

/// Folder for names with no numeric section.
pub const OTHER_FOLDER: &str = "other";

/// Output folder for a subform name.
///
/// `-FOO` goes to `-`, `2.8-AC-Annual` to `2`, anything else to `other`.
pub fn folder_for(name: &str) -> String {
    if name.starts_with('-') {
        return HYPHEN_FOLDER.to_string();
    }
    if name.starts_with(|ch: char| ch.is_ascii_digit()) {
        let end = name.find(['.', '-']).unwrap_or(name.len());
        return name[..end].to_string();
    }
    OTHER_FOLDER.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_names() {
        assert_eq!(folder_for("-FOO"), "-");
        assert_eq!(folder_for("2.8-AC-Annual"), "2");
        assert_eq!(folder_for("12-Pumps"), "12");
        assert_eq!(folder_for("4.6-EX. PANEL 432-Quarterly"), "4");
        assert_eq!(folder_for("7"), "7");
        // File stems of names that contained a path separator.
        assert_eq!(folder_for("2-3 Pumps-Monthly"), "2");
        assert_eq!(folder_for("3-HVAC Weekly"), "3");
        assert_eq!(folder_for("Misc"), "other");
        assert_eq!(folder_for(""), "other");
    }
}
