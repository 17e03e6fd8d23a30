use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::eval::EvalError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MetricName {
    Correlation,
    RSquared,
    MeanSquaredError,
    CosineSimilarity,
    Accuracy,
    BalancedAccuracy,
    Precision,
    Recall,
    Fscore,
    Support,
}

const ALIASES: &[(&str, MetricName)] = &[
    ("correlation", MetricName::Correlation),
    ("corr", MetricName::Correlation),
    ("r-squared", MetricName::RSquared),
    ("r2", MetricName::RSquared),
    ("mean-squared-error", MetricName::MeanSquaredError),
    ("mse", MetricName::MeanSquaredError),
    ("cosine_similarity", MetricName::CosineSimilarity),
    ("cosine-similarity", MetricName::CosineSimilarity),
    ("cos_sim", MetricName::CosineSimilarity),
    ("accuracy", MetricName::Accuracy),
    ("acc", MetricName::Accuracy),
    ("balanced_accuracy", MetricName::BalancedAccuracy),
    ("balanced-accuracy", MetricName::BalancedAccuracy),
    ("balanced_acc", MetricName::BalancedAccuracy),
    ("precision", MetricName::Precision),
    ("recall", MetricName::Recall),
    ("fscore", MetricName::Fscore),
    ("support", MetricName::Support),
];

impl MetricName {
    pub const ALL: [MetricName; 10] = [
        MetricName::Correlation,
        MetricName::RSquared,
        MetricName::MeanSquaredError,
        MetricName::CosineSimilarity,
        MetricName::Accuracy,
        MetricName::BalancedAccuracy,
        MetricName::Precision,
        MetricName::Recall,
        MetricName::Fscore,
        MetricName::Support,
    ];

    /// Short name, used as the default output column name.
    pub fn canonical(self) -> &'static str {
        match self {
            MetricName::Correlation => "corr",
            MetricName::RSquared => "r2",
            MetricName::MeanSquaredError => "mse",
            MetricName::CosineSimilarity => "cos_sim",
            MetricName::Accuracy => "acc",
            MetricName::BalancedAccuracy => "balanced_accuracy",
            MetricName::Precision => "precision",
            MetricName::Recall => "recall",
            MetricName::Fscore => "fscore",
            MetricName::Support => "support",
        }
    }

    /// Precision, recall, fscore and support are produced jointly.
    pub fn is_multi_output(self) -> bool {
        matches!(
            self,
            MetricName::Precision | MetricName::Recall | MetricName::Fscore | MetricName::Support
        )
    }

    pub fn aliases(self) -> Vec<&'static str> {
        ALIASES
            .iter()
            .filter(|(_, m)| *m == self)
            .map(|(alias, _)| *alias)
            .collect()
    }
}

impl FromStr for MetricName {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == key)
            .map(|(_, m)| *m)
            .ok_or_else(|| EvalError::UnsupportedMetric(key.to_string()))
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical())
    }
}

impl Serialize for MetricName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.canonical())
    }
}

impl<'de> Deserialize<'de> for MetricName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

pub fn parse_metrics<S: AsRef<str>>(names: &[S]) -> Result<Vec<MetricName>, EvalError> {
    names.iter().map(|n| n.as_ref().parse()).collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/metric.rs"]
mod tests;
