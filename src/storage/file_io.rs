//! CSV record store with atomic writes
//!
//! Each entity type lives in its own CSV file: a header row followed by one
//! row per record. Writes never leave a half-written file behind.

use std::fs;
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{FinanceError, FinanceResult};

/// A uniform row stored in a record file
///
/// `COLUMNS` must list the header names in the same order as the struct's
/// fields, since rows are serialized positionally.
pub trait Record: Serialize + DeserializeOwned {
    /// Header row, in column order
    const COLUMNS: &'static [&'static str];
}

/// Read all rows of a record file, returning an empty list if it doesn't exist
pub fn read_records<R, P>(path: P) -> FinanceResult<Vec<R>>
where
    R: Record,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| FinanceError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut rows = Vec::new();
    for result in reader.deserialize::<R>() {
        let row = result.map_err(|e| {
            FinanceError::Storage(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        rows.push(row);
    }

    Ok(rows)
}

/// Write rows to a record file atomically (write to temp, then rename)
///
/// The header row is always written, even when `rows` is empty.
pub fn write_records_atomic<R, P>(path: P, rows: &[R]) -> FinanceResult<()>
where
    R: Record,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            FinanceError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in same directory so the rename stays on one filesystem
    let temp_path = path.with_extension("csv.tmp");

    let result = write_rows(&temp_path, rows).and_then(|_| {
        fs::rename(&temp_path, path)
            .map_err(|e| FinanceError::Storage(format!("Failed to rename temp file: {}", e)))
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    result
}

fn write_rows<R: Record>(path: &Path, rows: &[R]) -> FinanceResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| FinanceError::Storage(format!("Failed to create temp file: {}", e)))?;

    writer
        .write_record(R::COLUMNS)
        .map_err(|e| FinanceError::Storage(format!("Failed to write header: {}", e)))?;

    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| FinanceError::Storage(format!("Failed to serialize row: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| FinanceError::Storage(format!("Failed to flush data: {}", e)))?;

    Ok(())
}
