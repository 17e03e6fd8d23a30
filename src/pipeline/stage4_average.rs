use ndarray::{ArrayD, ArrayViewD, Axis, stack};

use crate::eval::EvalError;
use crate::model::table::{ResultsTable, Value};

/// Collapses each condition block into one row holding the kept descriptive
/// columns plus `<target>_avg` / `<target>_std` for every target column.
///
/// The block size is the number of distinct values in `iter_column`. Each
/// block must hold every iteration value exactly once, its kept columns must be
/// constant, and no descriptive tuple may reappear in a later block.
pub fn average_across_iterations(
    table: &ResultsTable,
    iter_column: &str,
    target_columns: &[String],
    columns_to_keep: &[String],
) -> Result<ResultsTable, EvalError> {
    let iterations = table.column(iter_column)?;
    let kept = columns_to_keep
        .iter()
        .map(|name| table.column(name))
        .collect::<Result<Vec<_>, _>>()?;
    let targets = target_columns
        .iter()
        .map(|name| table.column(name))
        .collect::<Result<Vec<_>, _>>()?;

    let n_rows = table.n_rows();
    let n_iter = distinct(iterations.iter()).len();
    let n_blocks = if n_iter == 0 { 0 } else { n_rows / n_iter };
    if n_iter > 0 && n_rows % n_iter != 0 {
        return Err(EvalError::Contiguity(format!(
            "{n_rows} rows do not split into blocks of {n_iter} ({iter_column} values)"
        )));
    }

    let mut kept_out: Vec<Vec<Value>> = vec![Vec::with_capacity(n_blocks); kept.len()];
    let mut avg_out: Vec<Vec<Value>> = vec![Vec::with_capacity(n_blocks); targets.len()];
    let mut std_out: Vec<Vec<Value>> = vec![Vec::with_capacity(n_blocks); targets.len()];
    let mut seen_keys: Vec<Vec<&Value>> = Vec::with_capacity(n_blocks);

    for block in 0..n_blocks {
        let start = block * n_iter;
        let end = start + n_iter;

        if distinct(iterations[start..end].iter()).len() != n_iter {
            return Err(EvalError::Contiguity(format!(
                "rows {start}..{end} do not hold each {iter_column} value exactly once"
            )));
        }

        let mut key = Vec::with_capacity(kept.len());
        for (col_idx, values) in kept.iter().enumerate() {
            let first = &values[start];
            if let Some(offset) = values[start..end].iter().position(|v| v != first) {
                return Err(EvalError::Contiguity(format!(
                    "column {} changes within rows {start}..{end} (row {})",
                    columns_to_keep[col_idx],
                    start + offset
                )));
            }
            key.push(first);
        }
        if !key.is_empty() && seen_keys.contains(&key) {
            return Err(EvalError::Contiguity(format!(
                "descriptive values at rows {start}..{end} already appeared in an earlier block"
            )));
        }

        for (col_idx, values) in kept.iter().enumerate() {
            kept_out[col_idx].push(values[start].clone());
        }
        for (t_idx, values) in targets.iter().enumerate() {
            let (avg, std) = mean_and_std(&values[start..end], &target_columns[t_idx], start)?;
            avg_out[t_idx].push(Value::from_numeric(avg));
            std_out[t_idx].push(Value::from_numeric(std));
        }
        seen_keys.push(key);
    }

    let mut out = ResultsTable::new();
    for (name, values) in columns_to_keep.iter().zip(kept_out) {
        out.push_column(name, values)?;
    }
    for ((name, avg), std) in target_columns.iter().zip(avg_out).zip(std_out) {
        out.push_column(&format!("{name}_avg"), avg)?;
        out.push_column(&format!("{name}_std"), std)?;
    }

    tracing::debug!(
        "averaged {} rows into {} blocks of {}",
        n_rows,
        n_blocks,
        n_iter
    );
    Ok(out)
}

fn distinct<'a>(values: impl Iterator<Item = &'a Value>) -> Vec<&'a Value> {
    let mut out: Vec<&Value> = Vec::new();
    for v in values {
        if !out.contains(&v) {
            out.push(v);
        }
    }
    out
}

/// Elementwise mean and population standard deviation across a block.
fn mean_and_std(
    values: &[Value],
    column: &str,
    start: usize,
) -> Result<(ArrayD<f64>, ArrayD<f64>), EvalError> {
    let arrays = values
        .iter()
        .enumerate()
        .map(|(offset, v)| {
            v.as_numeric().ok_or_else(|| {
                EvalError::shape(
                    format!("column {column}, row {}", start + offset),
                    "numeric value",
                    v.kind(),
                )
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let shape = arrays[0].shape().to_vec();
    if let Some(offset) = arrays.iter().position(|a| a.shape() != shape.as_slice()) {
        return Err(EvalError::shape(
            format!("column {column}, row {}", start + offset),
            format!("shape {shape:?} shared by the block"),
            format!("{:?}", arrays[offset].shape()),
        ));
    }

    let views: Vec<ArrayViewD<'_, f64>> = arrays.iter().map(|a| a.view()).collect();
    let stacked = stack(Axis(0), &views)
        .map_err(|e| EvalError::shape(format!("column {column}"), "stackable block", e.to_string()))?;
    let n = stacked.len_of(Axis(0)) as f64;
    let mean = stacked.sum_axis(Axis(0)) / n;
    let centered = &stacked - &mean.view().insert_axis(Axis(0));
    let std = (centered.mapv(|d| d * d).sum_axis(Axis(0)) / n).mapv(f64::sqrt);
    Ok((mean, std))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_average.rs"]
mod tests;
