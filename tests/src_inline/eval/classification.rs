use super::*;
use ndarray::array;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_balanced_accuracy_averages_class_recall() {
    // class 0: 2/3 recalled, class 1: 1/1 recalled
    let truth = array![0.0, 0.0, 0.0, 1.0];
    let pred = array![0.0, 0.0, 1.0, 1.0];
    assert!(close(
        balanced_accuracy(truth.view(), pred.view()),
        (2.0 / 3.0 + 1.0) / 2.0
    ));
}

#[test]
fn test_balanced_accuracy_ignores_predicted_only_classes() {
    let truth = array![1.0, 1.0];
    let pred = array![1.0, 5.0];
    assert!(close(balanced_accuracy(truth.view(), pred.view()), 0.5));
}

#[test]
fn test_prfs_multiclass_single_column() {
    let truth = array![[0.0], [1.0], [2.0], [0.0], [1.0], [2.0]];
    let pred = array![[0.0], [2.0], [1.0], [0.0], [0.0], [1.0]];
    let out = precision_recall_fscore_support(truth.view(), pred.view()).unwrap();
    assert_eq!(out.support, array![2.0, 2.0, 2.0]);
    assert!(close(out.precision[0], 2.0 / 3.0));
    assert!(close(out.recall[0], 1.0));
    assert!(close(out.fscore[0], 0.8));
    assert_eq!(out.precision[1], 0.0);
    assert_eq!(out.fscore[2], 0.0);
}

#[test]
fn test_prfs_multilabel_columns() {
    let truth = array![[1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
    let pred = array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
    let out = precision_recall_fscore_support(truth.view(), pred.view()).unwrap();
    assert_eq!(out.precision.len(), 2);
    assert!(close(out.precision[0], 0.5));
    assert!(close(out.recall[0], 0.5));
    assert!(close(out.precision[1], 1.0));
    assert!(close(out.recall[1], 1.0));
    assert_eq!(out.support, array![2.0, 2.0]);
}

#[test]
fn test_prfs_shape_mismatch() {
    let truth = array![[1.0, 0.0]];
    let pred = array![[1.0], [0.0]];
    assert!(precision_recall_fscore_support(truth.view(), pred.view()).is_err());
}
