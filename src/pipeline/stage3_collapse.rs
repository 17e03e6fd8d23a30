use crate::eval::EvalError;
use crate::model::table::{ResultsTable, Value};

/// Reduces each metric cell (one score per feature or sample) to its mean and
/// writes it to `<metric>_mean`. Returns the new column names in input order.
pub fn collapse_across_variables(
    table: &mut ResultsTable,
    metric_columns: &[String],
) -> Result<Vec<String>, EvalError> {
    let mut collapsed = Vec::with_capacity(metric_columns.len());
    for name in metric_columns {
        let mut means = Vec::with_capacity(table.n_rows());
        for (row, value) in table.column(name)?.iter().enumerate() {
            let mean = match value {
                Value::Array(a) if a.is_empty() => f64::NAN,
                Value::Array(a) => a.sum() / a.len() as f64,
                Value::Float(v) => *v,
                Value::Int(v) => *v as f64,
                Value::Text(_) => {
                    return Err(EvalError::shape(
                        format!("column {name}, row {row}"),
                        "numeric scores",
                        value.kind(),
                    ));
                }
            };
            means.push(Value::Float(mean));
        }
        let out = format!("{name}_mean");
        table.push_column(&out, means)?;
        collapsed.push(out);
    }
    Ok(collapsed)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_collapse.rs"]
mod tests;
