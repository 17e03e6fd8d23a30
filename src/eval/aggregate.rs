use std::collections::BTreeMap;

use ndarray::{Array1, ArrayD, ArrayView2, Axis};

use crate::eval::EvalError;
use crate::eval::classification::precision_recall_fscore_support;
use crate::eval::metrics::evaluate;
use crate::model::metric::MetricName;
use crate::model::table::to_matrix;

/// One score vector per metric, indexed by feature or by sample.
pub type ScoreRecord = BTreeMap<MetricName, Array1<f64>>;

/// Normalizes both inputs to 2-D before scoring; 1-D inputs become n x 1.
pub fn aggregate(
    ground_truth: &ArrayD<f64>,
    predictions: &ArrayD<f64>,
    metrics: &[MetricName],
    by_feature: bool,
) -> Result<ScoreRecord, EvalError> {
    let gt = to_matrix(ground_truth.clone(), "ground truth")?;
    let pred = to_matrix(predictions.clone(), "predictions")?;
    aggregate_matrices(gt.view(), pred.view(), metrics, by_feature)
}

/// Scores every feature (column) or every sample (row) under each metric.
///
/// The first multi-output metric in `metrics` scores precision, recall,
/// fscore and support jointly over the full matrices and ends the loop;
/// metrics listed after it are not evaluated.
pub fn aggregate_matrices(
    ground_truth: ArrayView2<'_, f64>,
    predictions: ArrayView2<'_, f64>,
    metrics: &[MetricName],
    by_feature: bool,
) -> Result<ScoreRecord, EvalError> {
    if ground_truth.dim() != predictions.dim() {
        return Err(EvalError::shape(
            "ground truth vs predictions",
            format!("{:?}", ground_truth.dim()),
            format!("{:?}", predictions.dim()),
        ));
    }

    let mut scores = ScoreRecord::new();
    for (idx, &metric) in metrics.iter().enumerate() {
        if metric.is_multi_output() {
            let prf = precision_recall_fscore_support(ground_truth, predictions)?;
            scores.insert(MetricName::Precision, prf.precision);
            scores.insert(MetricName::Recall, prf.recall);
            scores.insert(MetricName::Fscore, prf.fscore);
            scores.insert(MetricName::Support, prf.support);
            let skipped: Vec<&str> = metrics[idx + 1..]
                .iter()
                .filter(|m| !m.is_multi_output())
                .map(|m| m.canonical())
                .collect();
            if !skipped.is_empty() {
                tracing::warn!(
                    "metrics {:?} requested after {}; skipped by joint precision/recall scoring",
                    skipped,
                    metric
                );
            }
            break;
        }

        let axis = if by_feature { Axis(1) } else { Axis(0) };
        let mut metric_score = Vec::with_capacity(ground_truth.len_of(axis));
        for (gt, pred) in ground_truth
            .axis_iter(axis)
            .zip(predictions.axis_iter(axis))
        {
            metric_score.push(evaluate(gt, pred, metric)?);
        }
        scores.insert(metric, Array1::from(metric_score));
    }
    Ok(scores)
}

#[cfg(test)]
#[path = "../../tests/src_inline/eval/aggregate.rs"]
mod tests;
