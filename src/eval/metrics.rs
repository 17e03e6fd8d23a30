use ndarray::ArrayView1;
use smartcore::metrics::{mean_squared_error as sc_mse, r2 as sc_r2};

use crate::eval::EvalError;
use crate::eval::classification::balanced_accuracy;
use crate::model::metric::MetricName;

/// Scores one pair of equal-length vectors under a single-output metric.
pub fn evaluate(
    ground_truth: ArrayView1<'_, f64>,
    predictions: ArrayView1<'_, f64>,
    metric: MetricName,
) -> Result<f64, EvalError> {
    if ground_truth.len() != predictions.len() {
        return Err(EvalError::shape(
            format!("metric {metric}"),
            format!("predictions of length {}", ground_truth.len()),
            format!("length {}", predictions.len()),
        ));
    }
    if ground_truth.is_empty() {
        return Err(EvalError::Empty(format!("metric {metric} on zero-length vectors")));
    }

    let score = match metric {
        MetricName::Correlation if ground_truth.len() < 2 => {
            return Err(EvalError::Empty(format!(
                "metric {metric} needs at least 2 samples, got {}",
                ground_truth.len()
            )));
        }
        MetricName::Correlation => pearson(ground_truth, predictions),
        MetricName::RSquared => r_squared(ground_truth, predictions),
        MetricName::MeanSquaredError => mean_squared_error(ground_truth, predictions),
        MetricName::CosineSimilarity => cosine_similarity(ground_truth, predictions),
        MetricName::Accuracy => accuracy(ground_truth, predictions),
        MetricName::BalancedAccuracy => balanced_accuracy(ground_truth, predictions),
        MetricName::Precision | MetricName::Recall | MetricName::Fscore | MetricName::Support => {
            return Err(EvalError::UnsupportedMetric(format!(
                "{metric} (only available through joint precision/recall/fscore/support scoring)"
            )));
        }
    };
    Ok(score)
}

fn mean(v: ArrayView1<'_, f64>) -> f64 {
    v.sum() / v.len() as f64
}

/// NaN when either side is constant.
pub fn pearson(x: ArrayView1<'_, f64>, y: ArrayView1<'_, f64>) -> f64 {
    let mx = mean(x);
    let my = mean(y);
    let mut sxy = 0.0f64;
    let mut sxx = 0.0f64;
    let mut syy = 0.0f64;
    for (&a, &b) in x.iter().zip(y.iter()) {
        let dx = a - mx;
        let dy = b - my;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    if sxx == 0.0 || syy == 0.0 {
        return f64::NAN;
    }
    (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0)
}

/// Constant truth scores 1.0 on an exact fit and 0.0 otherwise.
pub fn r_squared(truth: ArrayView1<'_, f64>, pred: ArrayView1<'_, f64>) -> f64 {
    let Some(&first) = truth.iter().next() else {
        return f64::NAN;
    };
    if truth.iter().all(|&t| t == first) {
        let exact = truth.iter().zip(pred.iter()).all(|(t, p)| t == p);
        return if exact { 1.0 } else { 0.0 };
    }
    let y_true: Vec<f64> = truth.to_vec();
    let y_pred: Vec<f64> = pred.to_vec();
    sc_r2(&y_true, &y_pred)
}

pub fn mean_squared_error(truth: ArrayView1<'_, f64>, pred: ArrayView1<'_, f64>) -> f64 {
    let y_true: Vec<f64> = truth.to_vec();
    let y_pred: Vec<f64> = pred.to_vec();
    sc_mse(&y_true, &y_pred)
}

/// Both vectors are treated as single 1xn points; a zero-norm side scores 0.
pub fn cosine_similarity(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    let dot = a.dot(&b);
    let na = nonzero_norm(a);
    let nb = nonzero_norm(b);
    dot / (na * nb)
}

fn nonzero_norm(v: ArrayView1<'_, f64>) -> f64 {
    let n = v.dot(&v).sqrt();
    if n == 0.0 { 1.0 } else { n }
}

pub fn accuracy(truth: ArrayView1<'_, f64>, pred: ArrayView1<'_, f64>) -> f64 {
    let hits = truth
        .iter()
        .zip(pred.iter())
        .filter(|(t, p)| t == p)
        .count();
    hits as f64 / truth.len() as f64
}

#[cfg(test)]
#[path = "../../tests/src_inline/eval/metrics.rs"]
mod tests;
