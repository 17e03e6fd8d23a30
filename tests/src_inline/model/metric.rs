use super::*;

#[test]
fn test_long_and_short_aliases_agree() {
    let pairs = [
        ("correlation", "corr"),
        ("r-squared", "r2"),
        ("mean-squared-error", "mse"),
        ("cosine_similarity", "cos_sim"),
        ("accuracy", "acc"),
        ("balanced_accuracy", "balanced_acc"),
    ];
    for (long, short) in pairs {
        let a: MetricName = long.parse().unwrap();
        let b: MetricName = short.parse().unwrap();
        assert_eq!(a, b, "{long} vs {short}");
    }
}

#[test]
fn test_unknown_metric_rejected() {
    let err = "kendall".parse::<MetricName>().unwrap_err();
    assert!(matches!(err, EvalError::UnsupportedMetric(ref name) if name == "kendall"));
}

#[test]
fn test_canonical_roundtrip() {
    for metric in MetricName::ALL {
        let parsed: MetricName = metric.canonical().parse().unwrap();
        assert_eq!(parsed, metric);
    }
}

#[test]
fn test_multi_output_family() {
    let multi: Vec<_> = MetricName::ALL
        .iter()
        .filter(|m| m.is_multi_output())
        .copied()
        .collect();
    assert_eq!(
        multi,
        vec![
            MetricName::Precision,
            MetricName::Recall,
            MetricName::Fscore,
            MetricName::Support
        ]
    );
}

#[test]
fn test_parse_metrics_and_serde() {
    let parsed = parse_metrics(&["r2", "corr"]).unwrap();
    assert_eq!(parsed, vec![MetricName::RSquared, MetricName::Correlation]);
    assert!(parse_metrics(&["r2", "nope"]).is_err());

    let json = serde_json::to_string(&parsed).unwrap();
    assert_eq!(json, "[\"r2\",\"corr\"]");
    let back: Vec<MetricName> = serde_json::from_str("[\"mean-squared-error\",\"cos_sim\"]").unwrap();
    assert_eq!(
        back,
        vec![MetricName::MeanSquaredError, MetricName::CosineSimilarity]
    );
}
