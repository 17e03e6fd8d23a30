use std::path::Path;

use crate::input::InputError;
use crate::input::reader::open_maybe_gz;
use crate::model::table::{ResultsTable, Value};

/// Reads a results artifact: a JSON array of row objects, one per fold and
/// condition. Columns are the union of row keys in first-seen order and every
/// row must carry every column.
pub fn read_results_table(path: &Path) -> Result<ResultsTable, InputError> {
    let reader = open_maybe_gz(path)?;
    let raw: serde_json::Value = serde_json::from_reader(reader)?;
    parse_results_json(&raw)
}

pub fn parse_results_json(raw: &serde_json::Value) -> Result<ResultsTable, InputError> {
    let rows = raw
        .as_array()
        .ok_or_else(|| InputError::InvalidInput("results must be a JSON array of rows".to_string()))?;

    let mut names: Vec<String> = Vec::new();
    for (idx, row) in rows.iter().enumerate() {
        let obj = row.as_object().ok_or_else(|| {
            InputError::InvalidInput(format!("results row {idx} is not an object"))
        })?;
        for key in obj.keys() {
            if !names.contains(key) {
                names.push(key.clone());
            }
        }
    }

    let mut columns: Vec<(String, Vec<Value>)> = names
        .iter()
        .map(|n| (n.clone(), Vec::with_capacity(rows.len())))
        .collect();
    for (idx, row) in rows.iter().enumerate() {
        for (name, values) in columns.iter_mut() {
            let cell = row.get(name.as_str()).ok_or_else(|| {
                InputError::InvalidInput(format!("results row {idx} has no column {name}"))
            })?;
            let value = Value::from_json(cell).map_err(|e| {
                InputError::InvalidInput(format!("results row {idx}, column {name}: {e}"))
            })?;
            values.push(value);
        }
    }

    ResultsTable::from_columns(columns).map_err(|e| InputError::InvalidInput(e.to_string()))
}
