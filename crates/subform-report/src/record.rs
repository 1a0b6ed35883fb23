//! Subform records persisted as JSON.

use std::fs;
use std::path::{Path, PathBuf};

use subform_model::Subform;
use tracing::{debug, warn};

use crate::atomic::write_atomic;
use crate::error::{ReportError, Result};

pub const RECORD_EXTENSION: &str = "json";

/// File stem for a subform name: path separators become `-`.
pub fn safe_file_stem(name: &str) -> String {
    name.replace(['/', '\\'], "-")
}

/// Path of the record for `name` inside `dir`.
pub fn record_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.{RECORD_EXTENSION}", safe_file_stem(name)))
}

/// Write one subform record as pretty JSON and return its path.
pub fn write_subform_record(dir: &Path, subform: &Subform) -> Result<PathBuf> {
    let path = record_path(dir, subform.name());
    let bytes = serde_json::to_vec_pretty(subform).map_err(|source| ReportError::Json {
        path: path.clone(),
        source,
    })?;
    write_atomic(&path, &bytes)?;
    debug!(
        subform = %subform.name(),
        fields = subform.field_count(),
        path = %path.display(),
        "wrote subform record"
    );
    Ok(path)
}

/// Load one subform record. Missing members read as empty values.
pub fn load_subform_record(path: &Path) -> Result<Subform> {
    let bytes = fs::read(path).map_err(|source| ReportError::Io {
        operation: "read",
        path: path.to_path_buf(),
        source,
    })?;
    let subform: Subform = serde_json::from_slice(&bytes).map_err(|source| ReportError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    if let Err(error) = subform.validate() {
        warn!(path = %path.display(), %error, "subform record is inconsistent");
    }
    Ok(subform)
}

/// Load every `.json` record in `dir`, sorted by file name.
pub fn load_subform_records(dir: &Path) -> Result<Vec<Subform>> {
    let entries = fs::read_dir(dir).map_err(|source| ReportError::Io {
        operation: "read directory",
        path: dir.to_path_buf(),
        source,
    })?;
    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ReportError::Io {
            operation: "read directory",
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let is_record = path.is_file()
            && path
                .extension()
                .is_some_and(|extension| extension == RECORD_EXTENSION);
        if is_record {
            paths.push(path);
        }
    }
    paths.sort();
    paths.iter().map(|path| load_subform_record(path)).collect()
}
