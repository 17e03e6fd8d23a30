use super::*;
use crate::model::metric::MetricName;
use crate::model::table::Value;
use ndarray::{Array2, array};

fn spec_table() -> ResultsTable {
    let grid = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0], [7.0, 8.0]];
    ResultsTable::from_columns(vec![
        (
            "brain_area".to_string(),
            vec!["amy", "amy", "hpc", "hpc"]
                .into_iter()
                .map(|s| Value::Text(s.to_string()))
                .collect(),
        ),
        (
            "fold".to_string(),
            [0, 1, 0, 1].iter().map(|f| Value::Int(*f)).collect(),
        ),
        (
            "ground_truth".to_string(),
            (0..4).map(|_| Value::from_matrix(grid.clone())).collect(),
        ),
        (
            "predictions".to_string(),
            (0..4).map(|_| Value::from_matrix(grid.clone())).collect(),
        ),
    ])
    .unwrap()
}

fn mse_config() -> ProcessConfig {
    let mut config = ProcessConfig::default_v1();
    config.metrics = vec![MetricName::MeanSquaredError];
    config.average_across_variables = false;
    config.columns_to_keep = vec!["brain_area".to_string()];
    config
}

#[test]
fn test_mse_scenario_two_blocks() {
    let mut table = spec_table();
    let out = process_results(&mut table, &mse_config()).unwrap();
    assert_eq!(out.active_metrics, vec!["mse".to_string()]);
    for row in 0..4 {
        assert_eq!(table.value(row, "mse").unwrap(), &Value::vector(vec![0.0, 0.0]));
    }
    assert_eq!(out.averaged.n_rows(), 2);
    for row in 0..2 {
        assert_eq!(
            out.averaged.value(row, "mse_avg").unwrap(),
            &Value::vector(vec![0.0, 0.0])
        );
        assert_eq!(
            out.averaged.value(row, "mse_std").unwrap(),
            &Value::vector(vec![0.0, 0.0])
        );
    }
}

#[test]
fn test_collapse_renames_active_metrics() {
    let mut table = spec_table();
    let mut config = mse_config();
    config.average_across_variables = true;
    let out = process_results(&mut table, &config).unwrap();
    assert_eq!(out.active_metrics, vec!["mse_mean".to_string()]);
    assert_eq!(out.averaged.value(0, "mse_mean_avg").unwrap(), &Value::Float(0.0));
    assert_eq!(out.averaged.value(1, "mse_mean_std").unwrap(), &Value::Float(0.0));
}

#[test]
fn test_failed_scoring_leaves_table_unchanged() {
    let columns = vec!["brain_area", "fold", "ground_truth", "predictions"];
    let mut rows = spec_table();
    let mut predictions = rows.column("predictions").unwrap().to_vec();
    predictions[3] = Value::from_matrix(array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    rows.push_column("predictions", predictions).unwrap();

    let mut config = mse_config();
    config.metrics = vec![MetricName::MeanSquaredError, MetricName::Correlation];
    let err = process_results(&mut rows, &config).unwrap_err();
    assert!(matches!(err, EvalError::RowScore { row: 3, .. }));
    assert_eq!(rows.column_names(), columns);
    assert!(!rows.has_column("mse"));
    assert!(!rows.has_column("corr"));
}

#[test]
fn test_missing_column_propagates() {
    let mut table = spec_table();
    let mut config = mse_config();
    config.columns.predictions = "preds".to_string();
    assert!(matches!(
        process_results(&mut table, &config),
        Err(EvalError::MissingColumn(ref c)) if c == "preds"
    ));
    assert!(!table.has_column("mse"));
}

fn label_table() -> ResultsTable {
    let labels = |shift: usize| Array2::from_shape_fn((10, 1), |(i, _)| ((i + shift) % 2) as f64);
    ResultsTable::from_columns(vec![
        (
            "embedding".to_string(),
            (0..4).map(|_| Value::Text("clip".to_string())).collect(),
        ),
        (
            "fold".to_string(),
            [0, 1, 2, 3].iter().map(|f| Value::Int(*f)).collect(),
        ),
        (
            "ground_truth".to_string(),
            (0..4).map(|r| Value::from_matrix(labels(r))).collect(),
        ),
        (
            "predictions".to_string(),
            (0..4).map(|r| Value::from_matrix(labels(r))).collect(),
        ),
    ])
    .unwrap()
}

#[test]
fn test_shuffle_baseline_is_deterministic() {
    let mut config = ProcessConfig::default_v1();
    config.metrics = vec![MetricName::BalancedAccuracy];
    config.shuffle_ground_truth = true;
    config.columns_to_keep = vec!["embedding".to_string()];

    let mut a = label_table();
    let mut b = label_table();
    let out_a = process_results(&mut a, &config).unwrap();
    let out_b = process_results(&mut b, &config).unwrap();

    assert_eq!(
        out_a.active_metrics,
        vec![
            "balanced_accuracy_mean".to_string(),
            "balanced_accuracy_shuffled_mean".to_string()
        ]
    );
    assert_eq!(out_a.averaged, out_b.averaged);
    assert_eq!(out_a.averaged.n_rows(), 1);
    assert_eq!(
        out_a.averaged.value(0, "balanced_accuracy_mean_avg").unwrap(),
        &Value::Float(1.0)
    );
}
