use std::cmp::Ordering;

use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::eval::EvalError;

#[derive(Debug, Clone, PartialEq)]
pub struct PrfSupport {
    pub precision: Array1<f64>,
    pub recall: Array1<f64>,
    pub fscore: Array1<f64>,
    pub support: Array1<f64>,
}

#[derive(Debug, Clone, Copy, Default)]
struct LabelCounts {
    tp: usize,
    fp: usize,
    fn_: usize,
}

impl LabelCounts {
    fn precision(&self) -> f64 {
        ratio(self.tp, self.tp + self.fp)
    }

    fn recall(&self) -> f64 {
        ratio(self.tp, self.tp + self.fn_)
    }

    fn fscore(&self) -> f64 {
        let p = self.precision();
        let r = self.recall();
        if p + r == 0.0 { 0.0 } else { 2.0 * p * r / (p + r) }
    }

    fn support(&self) -> f64 {
        (self.tp + self.fn_) as f64
    }
}

fn ratio(num: usize, denom: usize) -> f64 {
    if denom == 0 {
        0.0
    } else {
        num as f64 / denom as f64
    }
}

pub(crate) fn sorted_labels<'a>(values: impl Iterator<Item = &'a f64>) -> Vec<f64> {
    let mut labels: Vec<f64> = values.copied().collect();
    labels.sort_by(|a, b| a.total_cmp(b));
    labels.dedup_by(|a, b| a.total_cmp(b) == Ordering::Equal);
    labels
}

fn same_label(a: f64, b: f64) -> bool {
    a.total_cmp(&b) == Ordering::Equal
}

/// Mean per-class recall over the classes present in `truth`.
pub fn balanced_accuracy(truth: ArrayView1<'_, f64>, pred: ArrayView1<'_, f64>) -> f64 {
    let classes = sorted_labels(truth.iter());
    if classes.is_empty() {
        return f64::NAN;
    }
    let mut recall_sum = 0.0f64;
    for &class in &classes {
        let mut support = 0usize;
        let mut hits = 0usize;
        for (&t, &p) in truth.iter().zip(pred.iter()) {
            if same_label(t, class) {
                support += 1;
                if same_label(p, class) {
                    hits += 1;
                }
            }
        }
        recall_sum += ratio(hits, support);
    }
    recall_sum / classes.len() as f64
}

/// Per-label precision, recall, F1 and support. A single column is scored as
/// multiclass over the sorted label union; wider inputs are scored as a
/// multilabel indicator matrix, one entry per column.
pub fn precision_recall_fscore_support(
    truth: ArrayView2<'_, f64>,
    pred: ArrayView2<'_, f64>,
) -> Result<PrfSupport, EvalError> {
    if truth.dim() != pred.dim() {
        return Err(EvalError::shape(
            "precision/recall/fscore/support",
            format!("predictions of shape {:?}", truth.dim()),
            format!("{:?}", pred.dim()),
        ));
    }
    if truth.nrows() == 0 {
        return Err(EvalError::Empty(
            "precision/recall/fscore/support on zero samples".to_string(),
        ));
    }

    let counts = if truth.ncols() == 1 {
        multiclass_counts(truth.column(0), pred.column(0))
    } else {
        multilabel_counts(truth, pred)
    };

    Ok(PrfSupport {
        precision: counts.iter().map(LabelCounts::precision).collect(),
        recall: counts.iter().map(LabelCounts::recall).collect(),
        fscore: counts.iter().map(LabelCounts::fscore).collect(),
        support: counts.iter().map(LabelCounts::support).collect(),
    })
}

fn multiclass_counts(truth: ArrayView1<'_, f64>, pred: ArrayView1<'_, f64>) -> Vec<LabelCounts> {
    let labels = sorted_labels(truth.iter().chain(pred.iter()));
    labels
        .iter()
        .map(|&label| {
            let mut c = LabelCounts::default();
            for (&t, &p) in truth.iter().zip(pred.iter()) {
                match (same_label(t, label), same_label(p, label)) {
                    (true, true) => c.tp += 1,
                    (false, true) => c.fp += 1,
                    (true, false) => c.fn_ += 1,
                    (false, false) => {}
                }
            }
            c
        })
        .collect()
}

fn multilabel_counts(truth: ArrayView2<'_, f64>, pred: ArrayView2<'_, f64>) -> Vec<LabelCounts> {
    (0..truth.ncols())
        .map(|j| {
            let mut c = LabelCounts::default();
            for (&t, &p) in truth.column(j).iter().zip(pred.column(j).iter()) {
                match (t != 0.0, p != 0.0) {
                    (true, true) => c.tp += 1,
                    (false, true) => c.fp += 1,
                    (true, false) => c.fn_ += 1,
                    (false, false) => {}
                }
            }
            c
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/eval/classification.rs"]
mod tests;
