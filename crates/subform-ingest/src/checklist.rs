//! Checklist CSV reading.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::columns::REQUIRED_COLUMNS;
use crate::error::{IngestError, Result};

/// One checklist row keyed by column name.
///
/// Values are stored as read; callers trim what they consume.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecklistRow {
    values: BTreeMap<String, String>,
}

impl ChecklistRow {
    /// Builds a row from `(column, value)` pairs. Later duplicates win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Raw value of a column, or `""` when the column is absent.
    pub fn get(&self, column: &str) -> &str {
        self.values.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.values.insert(column.into(), value.into());
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Read every row of a checklist CSV, in file order.
pub fn read_checklist(path: &Path) -> Result<Vec<ChecklistRow>> {
    let file = File::open(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    read_checklist_from_reader(BufReader::new(file), path)
}

/// Read checklist rows from any reader; `source` is used in errors and logs.
pub fn read_checklist_from_reader<R: Read>(reader: R, source: &Path) -> Result<Vec<ChecklistRow>> {
    let parse_error = |error: csv::Error| IngestError::CsvParse {
        path: source.to_path_buf(),
        source: error,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers: Vec<String> = reader
        .headers()
        .map_err(parse_error)?
        .iter()
        .map(normalize_header)
        .collect();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(IngestError::MissingColumn {
                column: column.to_string(),
                path: source.to_path_buf(),
            });
        }
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(parse_error)?;
        rows.push(ChecklistRow::from_pairs(
            headers
                .iter()
                .zip(record.iter())
                .map(|(header, value)| (header.as_str(), value)),
        ));
    }
    debug!(
        path = %source.display(),
        columns = headers.len(),
        rows = rows.len(),
        "read checklist"
    );
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_whitespace_and_bom_are_normalized() {
        assert_eq!(normalize_header("\u{feff}NAMING  CONVENTION "), "NAMING CONVENTION");
        assert_eq!(normalize_header(" Inspection\nTask"), "Inspection Task");
    }

    #[test]
    fn missing_column_reads_empty() {
        let row = ChecklistRow::from_pairs([("Frequency", "Annual")]);
        assert_eq!(row.get("Frequency"), "Annual");
        assert_eq!(row.get("Description"), "");
    }
}
