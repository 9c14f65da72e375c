//! CSV reading and row normalization.

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use hei_core::error::{Error, Result};
use hei_core::{Category, Institution};

pub const NAME_COLUMN: &str = "Name of Institution";
pub const TYPE_COLUMN: &str = "Type";
pub const ACRONYM_COLUMN: &str = "Acronym";
pub const OWNERSHIP_COLUMN: &str = "Ownership";
pub const URL_COLUMN: &str = "Url";
pub const YEAR_COLUMN: &str = "Year";

pub const REQUIRED_COLUMNS: [&str; 6] =
    [NAME_COLUMN, TYPE_COLUMN, ACRONYM_COLUMN, OWNERSHIP_COLUMN, URL_COLUMN, YEAR_COLUMN];

/// One data row keyed by header name. `line` is the 1-based line in the source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    pub line: u64,
    cells: HashMap<String, String>,
}

impl RawRow {
    pub fn new(line: u64, cells: HashMap<String, String>) -> Self {
        Self { line, cells }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    fn require(&self, column: &str) -> Result<&str> {
        self.get(column)
            .ok_or_else(|| Error::Parse(format!("line {}: missing column '{}'", self.line, column)))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(0, iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

fn csv_error(path: &Path, e: csv::Error) -> Error {
    Error::Parse(format!("{}: {}", path.display(), e))
}

/// Read every data row of a header-first CSV file.
///
/// Fails with `NotFound` when `source_path` does not exist and with `Parse`
/// when the header lacks one of [`REQUIRED_COLUMNS`] or a row has the wrong
/// number of fields.
pub fn read_rows(source_path: &Path) -> Result<Vec<RawRow>> {
    if !source_path.exists() {
        return Err(Error::NotFound(source_path.to_path_buf()));
    }
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(source_path)
        .map_err(|e| csv_error(source_path, e))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| csv_error(source_path, e))?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect();
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|c| !headers.iter().any(|h| h == c))
        .collect();
    if !missing.is_empty() {
        return Err(Error::Parse(format!(
            "{}: header is missing column(s): {}",
            source_path.display(),
            missing.join(", ")
        )));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| csv_error(source_path, e))?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let cells = headers
            .iter()
            .cloned()
            .zip(record.iter().map(str::to_string))
            .collect();
        rows.push(RawRow::new(line, cells));
    }
    tracing::debug!(rows = rows.len(), path = %source_path.display(), "read source rows");
    Ok(rows)
}

/// Map a raw row onto an [`Institution`]. Columns outside the published
/// schema (City, State, ...) are dropped.
///
/// The `Type` cell is trimmed before matching; a value outside the three
/// categories fails the row with `Parse`.
pub fn normalize(raw_row: &RawRow) -> Result<Institution> {
    let type_cell = raw_row.require(TYPE_COLUMN)?;
    let category = Category::from_str(type_cell.trim()).map_err(|_| {
        Error::Parse(format!("line {}: unknown institution type '{}'", raw_row.line, type_cell))
    })?;
    Ok(Institution {
        name: raw_row.require(NAME_COLUMN)?.to_string(),
        category,
        acronym: raw_row.require(ACRONYM_COLUMN)?.to_string(),
        ownership: raw_row.require(OWNERSHIP_COLUMN)?.to_string(),
        url: raw_row.require(URL_COLUMN)?.to_string(),
        year: raw_row.require(YEAR_COLUMN)?.to_string(),
        image: None,
    })
}
