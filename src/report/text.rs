use crate::report::{ConditionSummary, RunInfo, format_f64_6};

pub fn render_report_text(run: &RunInfo, conditions: &[ConditionSummary]) -> String {
    let mut out = String::new();

    out.push_str("Fold-Averaged Model Performance Report\n");
    out.push_str("======================================\n\n");

    out.push_str("1. Run\n");
    out.push_str(&format!("Input: {}\n", run.input));
    out.push_str(&format!("Rows scored: {}\n", run.n_rows_in));
    out.push_str(&format!(
        "Scored by: {}\n",
        if run.by_feature { "feature" } else { "sample" }
    ));
    out.push_str(&format!("Iteration column: {}\n", run.iteration_column));
    if run.shuffle_ground_truth {
        out.push_str(&format!(
            "Shuffle baseline: on (seed {})\n",
            run.shuffle_seed
        ));
    } else {
        out.push_str("Shuffle baseline: off\n");
    }
    if !run.average_across_variables {
        out.push_str("Per-variable scores kept; values below are means over variables.\n");
    }
    out.push('\n');

    out.push_str(&format!("2. Conditions ({})\n", conditions.len()));
    if conditions.is_empty() {
        out.push_str("No conditions.\n");
    }
    for condition in conditions {
        out.push_str(&format!("{}\n", condition.label));
        for m in &condition.metrics {
            out.push_str(&format!(
                "  {}: {} +/- {}\n",
                m.metric,
                format_f64_6(m.mean),
                format_f64_6(m.std)
            ));
        }
    }

    out
}
