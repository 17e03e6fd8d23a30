pub mod aggregate;
pub mod classification;
pub mod metrics;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("shape error in {context}: expected {expected}, got {actual}")]
    Shape {
        context: String,
        expected: String,
        actual: String,
    },
    #[error("metric {0} not supported")]
    UnsupportedMetric(String),
    #[error("missing column: {0}")]
    MissingColumn(String),
    #[error("contiguity violation: {0}")]
    Contiguity(String),
    #[error("empty input: {0}")]
    Empty(String),
    #[error("row {row}: {source}")]
    RowScore {
        row: usize,
        #[source]
        source: Box<EvalError>,
    },
}

impl EvalError {
    pub fn shape(
        context: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        EvalError::Shape {
            context: context.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn at_row(self, row: usize) -> Self {
        EvalError::RowScore {
            row,
            source: Box::new(self),
        }
    }
}
