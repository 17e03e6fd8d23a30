use super::*;

#[test]
fn test_format_cell() {
    assert_eq!(format_cell(&Value::Float(0.5)), "0.500000");
    assert_eq!(format_cell(&Value::Int(3)), "3");
    assert_eq!(format_cell(&Value::vector(vec![1.0, 0.25])), "1.000000,0.250000");
}

#[test]
fn test_display_scalar_reduces_arrays() {
    assert_eq!(display_scalar(&Value::vector(vec![1.0, 3.0])), 2.0);
    assert!(display_scalar(&Value::Text("a".to_string())).is_nan());
}

#[test]
fn test_summarize_conditions() {
    let table = ResultsTable::from_columns(vec![
        ("embedding".to_string(), vec![Value::Text("clip".to_string())]),
        ("bin_size".to_string(), vec![Value::Float(0.5)]),
        ("corr_avg".to_string(), vec![Value::vector(vec![0.2, 0.4])]),
        ("corr_std".to_string(), vec![Value::vector(vec![0.0, 0.2])]),
    ])
    .unwrap();
    let out = summarize_conditions(
        &table,
        &["corr".to_string()],
        &["embedding".to_string(), "bin_size".to_string()],
    );
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].label, "embedding=clip bin_size=0.500000");
    assert!((out[0].metrics[0].mean - 0.3).abs() < 1e-12);
    assert!((out[0].metrics[0].std - 0.1).abs() < 1e-12);
}
