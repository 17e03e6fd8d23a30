use super::*;
use ndarray::array;

fn small_table() -> ResultsTable {
    ResultsTable::from_columns(vec![
        (
            "brain_area".to_string(),
            vec![Value::Text("amy".to_string()), Value::Text("hpc".to_string())],
        ),
        ("fold".to_string(), vec![Value::Int(0), Value::Int(1)]),
        (
            "ground_truth".to_string(),
            vec![
                Value::vector(vec![1.0, 2.0, 3.0]),
                Value::from_matrix(array![[1.0, 2.0], [3.0, 4.0]]),
            ],
        ),
    ])
    .unwrap()
}

#[test]
fn test_vector_cell_becomes_column_matrix() {
    let table = small_table();
    let m = table.matrix_at("ground_truth", 0).unwrap();
    assert_eq!(m.dim(), (3, 1));
    assert_eq!(m[[2, 0]], 3.0);
    let m = table.matrix_at("ground_truth", 1).unwrap();
    assert_eq!(m, array![[1.0, 2.0], [3.0, 4.0]]);
}

#[test]
fn test_three_dim_cell_rejected() {
    let cube = ArrayD::zeros(IxDyn(&[2, 2, 2]));
    let table =
        ResultsTable::from_columns(vec![("ground_truth".to_string(), vec![Value::Array(cube)])])
            .unwrap();
    let err = table.matrix_at("ground_truth", 0).unwrap_err();
    match err {
        EvalError::Shape { context, .. } => assert!(context.contains("row 0")),
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn test_text_cell_is_not_a_matrix() {
    let table = small_table();
    assert!(matches!(
        table.matrix_at("brain_area", 0),
        Err(EvalError::Shape { .. })
    ));
    assert!(matches!(
        table.matrix_at("missing", 0),
        Err(EvalError::MissingColumn(_))
    ));
}

#[test]
fn test_push_column_length_checked_and_replaces() {
    let mut table = small_table();
    assert!(table.push_column("bad", vec![Value::Int(1)]).is_err());

    table
        .push_column("fold", vec![Value::Int(5), Value::Int(6)])
        .unwrap();
    assert_eq!(table.n_columns(), 3);
    assert_eq!(table.column_names(), vec!["brain_area", "fold", "ground_truth"]);
    assert_eq!(table.value(1, "fold").unwrap(), &Value::Int(6));
}

#[test]
fn test_duplicate_columns_rejected() {
    let err = ResultsTable::from_columns(vec![
        ("a".to_string(), vec![Value::Int(1)]),
        ("a".to_string(), vec![Value::Int(2)]),
    ]);
    assert!(err.is_err());
}

#[test]
fn test_json_cells() {
    let raw: serde_json::Value = serde_json::from_str("[[1, 2], [3, 4.5]]").unwrap();
    let value = Value::from_json(&raw).unwrap();
    match &value {
        Value::Array(a) => {
            assert_eq!(a.shape(), &[2, 2]);
            assert_eq!(a[[1, 1]], 4.5);
        }
        other => panic!("expected array, got {}", other.kind()),
    }
    let back = value.to_json();
    assert_eq!(back, serde_json::json!([[1.0, 2.0], [3.0, 4.5]]));

    let ragged: serde_json::Value = serde_json::from_str("[[1, 2], [3]]").unwrap();
    assert!(Value::from_json(&ragged).is_err());

    assert_eq!(
        Value::from_json(&serde_json::json!("amy")).unwrap(),
        Value::Text("amy".to_string())
    );
    assert_eq!(Value::from_json(&serde_json::json!(3)).unwrap(), Value::Int(3));
    assert_eq!(Value::from_json(&serde_json::json!(0.5)).unwrap(), Value::Float(0.5));
}

#[test]
fn test_numeric_roundtrip_of_scalars() {
    let v = Value::Float(2.5);
    let a = v.as_numeric().unwrap();
    assert_eq!(a.ndim(), 0);
    assert_eq!(Value::from_numeric(a), Value::Float(2.5));
    assert!(Value::Text("x".to_string()).as_numeric().is_none());
}
