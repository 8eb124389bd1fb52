//! chart-point-snapshot: read-only views of live chart points.
//!
//! A charting engine owns and mutates its point records on every render pass.
//! Tooltips and data labels instead get a [`PointSnapshot`]: scalar values,
//! stacking figures and position copied at one instant, plus tooltip and
//! data-label text produced by the owning series.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{PointSnapshot, SnapshotConfig, TextCapturePolicy};
pub use error::{ChartError, ChartResult, StaleTarget};
