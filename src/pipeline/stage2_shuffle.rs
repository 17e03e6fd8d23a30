use std::collections::BTreeMap;

use ndarray::Axis;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::eval::EvalError;
use crate::model::config::ProcessConfig;
use crate::model::table::{ResultsTable, Value};
use crate::pipeline::stage1_scores::append_scores;

/// Shuffle-baseline: permutes the sample axis of each ground-truth cell with a
/// single seeded generator (consumed in row order), stores the result in the
/// shuffled column, then scores the shuffle metrics against the predictions
/// into `<metric>_shuffled` columns. Returns the score columns written.
pub fn append_shuffled_ground_truth(
    table: &mut ResultsTable,
    config: &ProcessConfig,
) -> Result<Vec<String>, EvalError> {
    let names = &config.columns;
    let mut rng = StdRng::seed_from_u64(config.shuffle_seed);

    let mut shuffled = Vec::with_capacity(table.n_rows());
    for (row, value) in table.column(&names.ground_truth)?.iter().enumerate() {
        let array = match value {
            Value::Array(a) if a.ndim() >= 1 => a,
            other => {
                return Err(EvalError::shape(
                    format!("column {}, row {row}", names.ground_truth),
                    "array with a sample axis",
                    other.kind(),
                ));
            }
        };
        let mut order: Vec<usize> = (0..array.len_of(Axis(0))).collect();
        order.shuffle(&mut rng);
        shuffled.push(Value::Array(array.select(Axis(0), &order)));
    }
    table.push_column(&names.ground_truth_shuffled, shuffled)?;

    let output_names: BTreeMap<_, _> = config
        .shuffle_metrics
        .iter()
        .map(|m| (*m, format!("{}_shuffled", m.canonical())))
        .collect();
    let written = append_scores(
        table,
        &config.shuffle_metrics,
        config.by_feature,
        &names.ground_truth_shuffled,
        &names.predictions,
        Some(&output_names),
    )?;

    tracing::info!(
        "shuffle baseline (seed {}) scored into {:?}",
        config.shuffle_seed,
        written
    );
    Ok(written)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_shuffle.rs"]
mod tests;
