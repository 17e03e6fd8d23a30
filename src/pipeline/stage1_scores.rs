use std::collections::BTreeMap;

use crate::eval::EvalError;
use crate::eval::aggregate::{ScoreRecord, aggregate_matrices};
use crate::model::metric::MetricName;
use crate::model::table::{ResultsTable, Value};

/// Scores every row of `table` and appends one column per requested metric.
///
/// Columns are named after the metric's short name unless `output_names`
/// overrides it. Every row is scored before anything is written, so an error
/// leaves the table as it was. Returns the names of the columns written.
pub fn append_scores(
    table: &mut ResultsTable,
    metrics: &[MetricName],
    by_feature: bool,
    ground_truth_column: &str,
    predictions_column: &str,
    output_names: Option<&BTreeMap<MetricName, String>>,
) -> Result<Vec<String>, EvalError> {
    let mut records: Vec<ScoreRecord> = Vec::with_capacity(table.n_rows());
    for row in 0..table.n_rows() {
        let gt = table.matrix_at(ground_truth_column, row)?;
        let pred = table.matrix_at(predictions_column, row)?;
        let record = aggregate_matrices(gt.view(), pred.view(), metrics, by_feature)
            .map_err(|e| e.at_row(row))?;
        records.push(record);
    }

    let mut written = Vec::with_capacity(metrics.len());
    for &metric in metrics {
        let name = output_names
            .and_then(|names| names.get(&metric).cloned())
            .unwrap_or_else(|| metric.canonical().to_string());
        if written.contains(&name) {
            continue;
        }
        if records.first().is_some_and(|r| !r.contains_key(&metric)) {
            tracing::warn!("metric {} was not scored; column {} not written", metric, name);
            continue;
        }
        let values = records
            .iter()
            .map(|r| {
                r.get(&metric)
                    .map(|scores| Value::vector(scores.to_vec()))
                    .unwrap_or(Value::Float(f64::NAN))
            })
            .collect();
        table.push_column(&name, values)?;
        written.push(name);
    }

    tracing::debug!(
        "scored {} rows by {}: {:?}",
        table.n_rows(),
        if by_feature { "feature" } else { "sample" },
        written
    );
    Ok(written)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_scores.rs"]
mod tests;
