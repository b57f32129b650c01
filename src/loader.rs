use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::error::Error;
use crate::table::Table;
use crate::types::{Cell, Result};

/// Read a records-oriented JSON file into a [`Table`].
///
/// The document must be a top-level array of objects sharing one key set:
///
/// ```json
/// [
///   { "id": 0, "age": 31.0, "email": "x@y.com", "q1": 5, ... },
///   ...
/// ]
/// ```
pub fn load_table(path: &Path) -> Result<Table> {
    let text = std::fs::read_to_string(path)?;
    let root: Value = serde_json::from_str(&text)?;
    table_from_json(&root)
}

/// Convert an already-parsed JSON document into a [`Table`]
pub fn table_from_json(root: &Value) -> Result<Table> {
    let records = root
        .as_array()
        .ok_or_else(|| Error::NotTabular("expected a top-level JSON array of records".into()))?;

    let mut columns: Vec<String> = Vec::new();
    let mut table = Table::new(Vec::new());

    for (i, record) in records.iter().enumerate() {
        let obj = record
            .as_object()
            .ok_or_else(|| Error::NotTabular(format!("record {i} is not a JSON object")))?;

        if i == 0 {
            columns = obj.keys().cloned().collect();
            table = Table::new(columns.clone());
        } else if obj.len() != columns.len() || !columns.iter().all(|c| obj.contains_key(c)) {
            return Err(Error::NotTabular(format!(
                "record {i} does not share the keys of record 0"
            )));
        }

        let mut row = Vec::with_capacity(columns.len());
        for column in &columns {
            // presence guaranteed by the key-set check above
            let value = obj.get(column.as_str()).unwrap_or(&Value::Null);
            row.push(cell_from_json(value, i, column)?);
        }
        table.push_row(row);
    }

    debug!(
        "loaded table: {} rows x {} columns",
        table.len(),
        table.columns().len()
    );
    Ok(table)
}

fn cell_from_json(value: &Value, row: usize, column: &str) -> Result<Cell> {
    match value {
        Value::Null => Ok(Cell::Missing),
        Value::Bool(b) => Ok(Cell::Bool(*b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Cell::Int(i))
            } else if let Some(f) = n.as_f64() {
                Ok(Cell::Float(f))
            } else {
                Err(Error::NotTabular(format!(
                    "record {row}, column '{column}': number out of range"
                )))
            }
        }
        Value::String(s) => Ok(Cell::Text(s.clone())),
        Value::Array(_) | Value::Object(_) => Err(Error::NotTabular(format!(
            "record {row}, column '{column}': nested values are not tabular"
        ))),
    }
}

/// Compute SHA-256 hash of a file (streaming to handle large files)
pub fn compute_file_hash(path: &Path) -> Result<String> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    let result = hasher.finalize();
    Ok(format!("{:x}", result))
}
