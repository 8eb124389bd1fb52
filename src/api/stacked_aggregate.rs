use serde::{Deserialize, Serialize};

use crate::core::StackedValue;

/// Stacking figures copied out of a live point.
///
/// Values are taken verbatim from the engine's stacking pass and never
/// re-validated here.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StackedAggregate {
    #[serde(with = "crate::api::json_float")]
    pub start: f64,
    #[serde(with = "crate::api::json_float")]
    pub end: f64,
    #[serde(with = "crate::api::json_float")]
    pub total: f64,
    #[serde(with = "crate::api::json_float")]
    pub negative_start: f64,
    #[serde(with = "crate::api::json_float")]
    pub negative_end: f64,
    #[serde(with = "crate::api::json_float")]
    pub negative_total: f64,
}

impl StackedAggregate {
    #[must_use]
    pub fn from_stacked(source: &StackedValue) -> Self {
        Self {
            start: source.start,
            end: source.end,
            total: source.total,
            negative_start: source.negative_start,
            negative_end: source.negative_end,
            negative_total: source.negative_total,
        }
    }
}

impl From<StackedValue> for StackedAggregate {
    fn from(source: StackedValue) -> Self {
        Self::from_stacked(&source)
    }
}

impl From<&StackedValue> for StackedAggregate {
    fn from(source: &StackedValue) -> Self {
        Self::from_stacked(source)
    }
}
