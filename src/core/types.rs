use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::handles::{ChartHandle, OpaqueHandle, SeriesHandle};
use crate::core::primitives::{datetime_to_unix_seconds, decimal_to_f64};
use crate::error::ChartResult;

/// Stacking figures the engine computes for a point of a stacked series.
///
/// Positive and negative contributions accumulate separately.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StackedValue {
    pub start: f64,
    pub end: f64,
    pub total: f64,
    pub negative_start: f64,
    pub negative_end: f64,
    pub negative_total: f64,
}

impl StackedValue {
    /// Fraction of the stack total a point of `value` contributes.
    ///
    /// Non-negative values sit on the positive stack and negative values on
    /// the negative one. Returns `None` for a zero or non-finite total.
    #[must_use]
    pub fn share(self, value: f64) -> Option<f64> {
        let (span, total) = if value.is_sign_negative() && value != 0.0 {
            (self.negative_end - self.negative_start, self.negative_total)
        } else {
            (self.end - self.start, self.total)
        };
        if total == 0.0 || !total.is_finite() {
            return None;
        }
        // `0.0 / -4.0` is `-0.0`; report it as a plain zero share.
        let share = span / total;
        Some(if share == 0.0 { 0.0 } else { share })
    }
}

/// Where a live point sits and what the engine has attached to it.
///
/// `visual`, `label` and `data_source` stay empty until the point is drawn and
/// are cleared again when its visuals are recycled.
#[derive(Debug, Clone)]
pub struct ChartPointContext {
    pub chart: ChartHandle,
    pub series: SeriesHandle,
    pub index: usize,
    pub data_source: Option<OpaqueHandle>,
    pub visual: Option<OpaqueHandle>,
    pub label: Option<OpaqueHandle>,
}

impl ChartPointContext {
    #[must_use]
    pub fn new(chart: ChartHandle, series: SeriesHandle, index: usize) -> Self {
        Self {
            chart,
            series,
            index,
            data_source: None,
            visual: None,
            label: None,
        }
    }

    #[must_use]
    pub fn with_data_source(mut self, data_source: OpaqueHandle) -> Self {
        self.data_source = Some(data_source);
        self
    }

    #[must_use]
    pub fn with_visual(mut self, visual: OpaqueHandle) -> Self {
        self.visual = Some(visual);
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: OpaqueHandle) -> Self {
        self.label = Some(label);
        self
    }
}

/// Engine-owned, mutable point produced during a render pass.
#[derive(Debug, Clone)]
pub struct ChartPointRecord {
    pub is_null: bool,
    pub primary_value: f64,
    pub secondary_value: f64,
    pub tertiary_value: f64,
    pub quaternary_value: f64,
    pub quinary_value: f64,
    pub stacked: Option<StackedValue>,
    pub context: ChartPointContext,
}

impl ChartPointRecord {
    #[must_use]
    pub fn new(context: ChartPointContext) -> Self {
        Self {
            is_null: false,
            primary_value: 0.0,
            secondary_value: 0.0,
            tertiary_value: 0.0,
            quaternary_value: 0.0,
            quinary_value: 0.0,
            stacked: None,
            context,
        }
    }

    /// Builds a time-based point: secondary is the unix time in seconds and
    /// primary is the decimal value.
    pub fn from_decimal_time(
        context: ChartPointContext,
        time: DateTime<Utc>,
        value: Decimal,
    ) -> ChartResult<Self> {
        Ok(Self::new(context).with_values(
            decimal_to_f64(value, "primary value")?,
            datetime_to_unix_seconds(time),
        ))
    }

    #[must_use]
    pub fn with_values(mut self, primary: f64, secondary: f64) -> Self {
        self.primary_value = primary;
        self.secondary_value = secondary;
        self
    }

    #[must_use]
    pub fn with_extra_values(mut self, tertiary: f64, quaternary: f64, quinary: f64) -> Self {
        self.tertiary_value = tertiary;
        self.quaternary_value = quaternary;
        self.quinary_value = quinary;
        self
    }

    #[must_use]
    pub fn with_stacked(mut self, stacked: StackedValue) -> Self {
        self.stacked = Some(stacked);
        self
    }

    /// Marks the point as a gap in the series.
    #[must_use]
    pub fn into_null(mut self) -> Self {
        self.is_null = true;
        self
    }

    /// The five scalar measurements in order, primary first.
    #[must_use]
    pub fn values(&self) -> [f64; 5] {
        [
            self.primary_value,
            self.secondary_value,
            self.tertiary_value,
            self.quaternary_value,
            self.quinary_value,
        ]
    }
}
