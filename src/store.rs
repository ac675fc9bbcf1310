//! Row storage for saved calculations.
//!
//! A [`Sheet`] is one named table of flat string rows, addressed by the
//! position of the row among the data rows. Deleting a row shifts every later
//! row up by one, as a spreadsheet does.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::StoreError;

/// Zero-based position of a data row within a [`Sheet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RowIndex(pub usize);

impl std::fmt::Display for RowIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One stored row: field name to raw cell text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(BTreeMap<String, String>);

impl Row {
    /// Create an empty row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw text of a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Set a field, replacing any previous value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    /// Field parsed as a number, if present and numeric.
    #[must_use]
    pub fn number(&self, field: &str) -> Option<f64> {
        self.get(field)?.trim().parse().ok()
    }

    /// Number of populated fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the row has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(field, value)| (field.into(), value.into()))
                .collect(),
        )
    }
}

/// A table of rows supporting the four spreadsheet operations.
pub trait Sheet {
    /// Every data row in order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backing storage cannot be read.
    fn read_all(&self) -> Result<Vec<Row>, StoreError>;

    /// Add a row at the end and return its index.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backing storage cannot be written.
    fn append(&mut self, row: Row) -> Result<RowIndex, StoreError>;

    /// Replace the row at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownRow`] when `index` is past the last row.
    fn update(&mut self, index: RowIndex, row: Row) -> Result<(), StoreError>;

    /// Remove the row at `index`, shifting later rows up.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownRow`] when `index` is past the last row.
    fn delete(&mut self, index: RowIndex) -> Result<(), StoreError>;
}

/// Replace `rows[index]`.
fn replace_row(rows: &mut [Row], index: RowIndex, row: Row) -> Result<(), StoreError> {
    let slot = rows.get_mut(index.0).ok_or(StoreError::UnknownRow(index))?;
    *slot = row;
    Ok(())
}

/// Remove `rows[index]`.
fn remove_row(rows: &mut Vec<Row>, index: RowIndex) -> Result<(), StoreError> {
    if index.0 >= rows.len() {
        return Err(StoreError::UnknownRow(index));
    }
    rows.remove(index.0);
    Ok(())
}

/// Sheet held in memory; nothing survives the process.
#[derive(Clone, Debug, Default)]
pub struct MemorySheet {
    /// Stored rows.
    rows: Vec<Row>,
}

impl MemorySheet {
    /// Create an empty sheet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Sheet for MemorySheet {
    fn read_all(&self) -> Result<Vec<Row>, StoreError> {
        Ok(self.rows.clone())
    }

    fn append(&mut self, row: Row) -> Result<RowIndex, StoreError> {
        self.rows.push(row);
        Ok(RowIndex(self.rows.len() - 1))
    }

    fn update(&mut self, index: RowIndex, row: Row) -> Result<(), StoreError> {
        replace_row(&mut self.rows, index, row)
    }

    fn delete(&mut self, index: RowIndex) -> Result<(), StoreError> {
        remove_row(&mut self.rows, index)
    }
}

/// Sheet persisted as a JSON array in a single file.
///
/// The file is read before and rewritten after every change. A missing file
/// reads as an empty sheet.
#[derive(Clone, Debug)]
pub struct JsonSheet {
    /// Location of the backing file.
    path: PathBuf,
}

impl JsonSheet {
    /// Sheet stored at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Sheet for table `name` inside `directory`, stored as `<name>.json`.
    #[must_use]
    pub fn table(directory: impl AsRef<Path>, name: &str) -> Self {
        Self::new(directory.as_ref().join(format!("{name}.json")))
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every row from disk.
    fn load(&self) -> Result<Vec<Row>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(Vec::new()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(error) => Err(error.into()),
        }
    }

    /// Write every row to disk, creating parent directories as needed.
    fn save(&self, rows: &[Row]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(rows)?)?;
        debug!(path = %self.path.display(), rows = rows.len(), "wrote sheet");
        Ok(())
    }
}

impl Sheet for JsonSheet {
    fn read_all(&self) -> Result<Vec<Row>, StoreError> {
        self.load()
    }

    fn append(&mut self, row: Row) -> Result<RowIndex, StoreError> {
        let mut rows = self.load()?;
        rows.push(row);
        self.save(&rows)?;
        let index = RowIndex(rows.len() - 1);
        info!(path = %self.path.display(), %index, "appended row");
        Ok(index)
    }

    fn update(&mut self, index: RowIndex, row: Row) -> Result<(), StoreError> {
        let mut rows = self.load()?;
        replace_row(&mut rows, index, row)?;
        self.save(&rows)
    }

    fn delete(&mut self, index: RowIndex) -> Result<(), StoreError> {
        let mut rows = self.load()?;
        remove_row(&mut rows, index)?;
        self.save(&rows)?;
        info!(path = %self.path.display(), %index, "deleted row");
        Ok(())
    }
}
