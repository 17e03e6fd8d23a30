pub mod stage1_scores;
pub mod stage2_shuffle;
pub mod stage3_collapse;
pub mod stage4_average;
pub mod stage5_report;

use crate::eval::EvalError;
use crate::model::config::ProcessConfig;
use crate::model::table::ResultsTable;
use stage1_scores::append_scores;
use stage2_shuffle::append_shuffled_ground_truth;
use stage3_collapse::collapse_across_variables;
use stage4_average::average_across_iterations;

#[derive(Debug, Clone)]
pub struct ProcessOutput {
    pub averaged: ResultsTable,
    /// Metric columns that were averaged, without the `_avg`/`_std` suffix.
    pub active_metrics: Vec<String>,
}

/// Scores, optionally baselines and collapses, then fold-averages `table`.
/// Score columns are appended to `table` along the way.
pub fn process_results(
    table: &mut ResultsTable,
    config: &ProcessConfig,
) -> Result<ProcessOutput, EvalError> {
    let mut active = append_scores(
        table,
        &config.metrics,
        config.by_feature,
        &config.columns.ground_truth,
        &config.columns.predictions,
        None,
    )?;
    tracing::info!("stage 1: scored {} rows into {:?}", table.n_rows(), active);

    if config.shuffle_ground_truth {
        let shuffled = append_shuffled_ground_truth(table, config)?;
        active.extend(shuffled);
        tracing::info!("stage 2: shuffle baseline added");
    }

    if config.average_across_variables {
        active = collapse_across_variables(table, &active)?;
        tracing::info!("stage 3: collapsed scores to per-row means {:?}", active);
    }

    let averaged = average_across_iterations(
        table,
        &config.iteration_column,
        &active,
        &config.columns_to_keep,
    )?;
    tracing::info!(
        "stage 4: averaged {} rows into {} conditions",
        table.n_rows(),
        averaged.n_rows()
    );

    Ok(ProcessOutput {
        averaged,
        active_metrics: active,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/process.rs"]
mod tests;
