use serde::{Deserialize, Serialize};

use crate::model::metric::MetricName;

/// Names of the cells the scorer reads and the shuffle stage writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub ground_truth: String,
    pub predictions: String,
    pub ground_truth_shuffled: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            ground_truth: "ground_truth".to_string(),
            predictions: "predictions".to_string(),
            ground_truth_shuffled: "ground_truth_shuffled".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessConfig {
    pub metrics: Vec<MetricName>,
    pub columns: ColumnNames,
    /// Score each feature across samples; false scores each sample across features.
    pub by_feature: bool,
    pub average_across_variables: bool,
    pub shuffle_ground_truth: bool,
    pub shuffle_seed: u64,
    pub shuffle_metrics: Vec<MetricName>,
    pub iteration_column: String,
    pub columns_to_keep: Vec<String>,
}

impl ProcessConfig {
    pub fn default_v1() -> Self {
        Self {
            metrics: vec![MetricName::RSquared, MetricName::Correlation],
            columns: ColumnNames::default(),
            by_feature: true,
            average_across_variables: true,
            shuffle_ground_truth: false,
            shuffle_seed: 42,
            shuffle_metrics: vec![MetricName::BalancedAccuracy],
            iteration_column: "fold".to_string(),
            columns_to_keep: vec![
                "brain_area".to_string(),
                "bin_center".to_string(),
                "bin_size".to_string(),
                "embedding".to_string(),
            ],
        }
    }
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self::default_v1()
    }
}
