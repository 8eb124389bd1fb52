use std::fmt;

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Engine-owned entity a snapshot may refer to after the engine dropped it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaleTarget {
    Record,
    Series,
    Chart,
}

impl fmt::Display for StaleTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Record => "chart point record",
            Self::Series => "series",
            Self::Chart => "chart",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid chart point record: {0}")]
    InvalidRecord(String),

    #[error("stale reference: {target} was torn down by the engine")]
    StaleReference { target: StaleTarget },

    #[error("chart point record is mutably borrowed by the engine")]
    RecordBorrowed,

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl ChartError {
    #[must_use]
    pub fn stale(target: StaleTarget) -> Self {
        Self::StaleReference { target }
    }

    #[must_use]
    pub fn is_stale_reference(&self) -> bool {
        matches!(self, Self::StaleReference { .. })
    }
}
