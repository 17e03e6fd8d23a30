use serde::Serialize;

use crate::model::table::ResultsTable;
use crate::report::{ConditionSummary, RunInfo};

#[derive(Serialize)]
struct SummaryJson<'a> {
    tool: &'a str,
    run: &'a RunInfo,
    metrics: &'a [String],
    conditions: &'a [ConditionSummary],
    averaged: Vec<serde_json::Map<String, serde_json::Value>>,
}

/// Averaged table as an array of row objects. Non-finite floats become null.
pub fn render_averaged_json(averaged: &ResultsTable) -> serde_json::Value {
    serde_json::Value::Array(
        (0..averaged.n_rows())
            .map(|row| serde_json::Value::Object(averaged.row_json(row)))
            .collect(),
    )
}

pub fn render_summary_json(
    run: &RunInfo,
    metrics: &[String],
    conditions: &[ConditionSummary],
    averaged: &ResultsTable,
) -> Result<String, serde_json::Error> {
    let summary = SummaryJson {
        tool: &run.tool_name,
        run,
        metrics,
        conditions,
        averaged: (0..averaged.n_rows()).map(|row| averaged.row_json(row)).collect(),
    };
    serde_json::to_string_pretty(&summary)
}
