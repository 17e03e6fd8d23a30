use super::*;

fn run_args(extra: &[&str]) -> RunArgs {
    let mut argv = vec!["neurofold", "run", "--input", "data", "--out", "out"];
    argv.extend_from_slice(extra);
    match Cli::try_parse_from(argv).unwrap().command {
        Command::Run(args) => args,
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn test_parse_run_defaults() {
    let args = run_args(&[]);
    assert_eq!(args.input, PathBuf::from("data"));
    let config = build_config(ProcessConfig::default_v1(), &args).unwrap();
    assert_eq!(config, ProcessConfig::default_v1());
}

#[test]
fn test_flags_override_config() {
    let args = run_args(&[
        "--metric",
        "mse",
        "--metric",
        "cos_sim",
        "--by-sample",
        "--shuffle",
        "--seed",
        "7",
        "--iter-column",
        "iteration",
        "--keep",
        "brain_area",
    ]);
    let config = build_config(ProcessConfig::default_v1(), &args).unwrap();
    assert_eq!(
        config.metrics,
        vec![MetricName::MeanSquaredError, MetricName::CosineSimilarity]
    );
    assert!(!config.by_feature);
    assert!(config.shuffle_ground_truth);
    assert_eq!(config.shuffle_seed, 7);
    assert_eq!(config.iteration_column, "iteration");
    assert_eq!(config.columns_to_keep, vec!["brain_area".to_string()]);
}

#[test]
fn test_bad_metric_flag() {
    let args = run_args(&["--metric", "kendall"]);
    let err = build_config(ProcessConfig::default_v1(), &args).unwrap_err();
    assert!(err.contains("kendall"));
}

#[test]
fn test_describe_area() {
    let line = describe_area("Left amygdala").unwrap();
    assert!(line.starts_with("amygdala\tAMY\tamy\tmtl=true"));
    assert!(describe_area("cerebellum").is_err());
}
