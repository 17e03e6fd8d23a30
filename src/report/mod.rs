pub mod json;
pub mod text;

use serde::Serialize;

use crate::model::table::{ResultsTable, Value};

#[derive(Debug, Clone, Serialize)]
pub struct RunInfo {
    pub tool_name: String,
    pub tool_version: String,
    pub input: String,
    pub n_rows_in: usize,
    pub iteration_column: String,
    pub by_feature: bool,
    pub average_across_variables: bool,
    pub shuffle_ground_truth: bool,
    pub shuffle_seed: u64,
}

/// One condition's headline numbers for one metric.
#[derive(Debug, Clone, Serialize)]
pub struct MetricSummary {
    pub metric: String,
    pub mean: f64,
    pub std: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConditionSummary {
    pub label: String,
    pub metrics: Vec<MetricSummary>,
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

/// Scalar view of a cell for display: arrays are reduced to their mean.
pub fn display_scalar(value: &Value) -> f64 {
    match value {
        Value::Float(v) => *v,
        Value::Int(v) => *v as f64,
        Value::Array(a) if a.is_empty() => f64::NAN,
        Value::Array(a) => a.sum() / a.len() as f64,
        Value::Text(_) => f64::NAN,
    }
}

pub fn format_cell(value: &Value) -> String {
    match value {
        Value::Text(s) => s.clone(),
        Value::Int(v) => v.to_string(),
        Value::Float(v) => format_f64_6(*v),
        Value::Array(a) => a.iter().map(|v| format_f64_6(*v)).collect::<Vec<_>>().join(","),
    }
}

pub fn condition_label(table: &ResultsTable, row: usize, keep: &[String]) -> String {
    if keep.is_empty() {
        return format!("condition {}", row + 1);
    }
    keep.iter()
        .map(|name| {
            let value = table
                .value(row, name)
                .map(format_cell)
                .unwrap_or_default();
            format!("{name}={value}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn summarize_conditions(
    averaged: &ResultsTable,
    metrics: &[String],
    keep: &[String],
) -> Vec<ConditionSummary> {
    (0..averaged.n_rows())
        .map(|row| ConditionSummary {
            label: condition_label(averaged, row, keep),
            metrics: metrics
                .iter()
                .map(|m| MetricSummary {
                    metric: m.clone(),
                    mean: averaged
                        .value(row, &format!("{m}_avg"))
                        .map(display_scalar)
                        .unwrap_or(f64::NAN),
                    std: averaged
                        .value(row, &format!("{m}_std"))
                        .map(display_scalar)
                        .unwrap_or(f64::NAN),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
