//! Row data loading.

use crate::error::{AppError, DataError, StorageError};
use crate::table::Row;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Parse a JSON array of objects into rows.
///
/// # Examples
/// ```
/// use htable_core::utils::data::parse_rows;
/// let rows = parse_rows(r#"[{"id": 1}, {"id": 2}]"#).unwrap();
/// assert_eq!(rows.len(), 2);
/// ```
pub fn parse_rows(content: &str) -> Result<Vec<Row>, AppError> {
    let value: Value = serde_json::from_str(content).map_err(|e| DataError::Parse {
        message: e.to_string(),
    })?;
    rows_from_value(value)
}

/// Rows from an already parsed JSON value.
pub fn rows_from_value(value: Value) -> Result<Vec<Row>, AppError> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(DataError::Parse {
                message: format!("expected a JSON array, found {}", json_kind(&other)),
            }
            .into());
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(row) => Ok(row),
            _ => Err(AppError::from(DataError::RowNotObject { index })),
        })
        .collect()
}

/// Read rows from a file, or from stdin when `path` is `-`.
pub fn load_rows(path: &Path) -> Result<Vec<Row>, AppError> {
    let mut content = String::new();
    let read = if path == Path::new("-") {
        std::io::stdin().read_to_string(&mut content)
    } else {
        std::fs::File::open(path).and_then(|mut file| file.read_to_string(&mut content))
    };
    read.map_err(|source| StorageError::FileIo {
        path: path.to_string_lossy().to_string(),
        source,
    })?;

    let rows = parse_rows(&content)?;
    log::debug!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
