//! Snapshot API handed to tooltip and data-label layers.

mod json_contract;
mod json_float;
mod point_snapshot;
mod position_context;
mod snapshot_config;
mod snapshot_view;
mod stacked_aggregate;

pub use json_contract::{POINT_SNAPSHOT_JSON_SCHEMA_V1, PointSnapshotJsonContractV1};
pub use point_snapshot::PointSnapshot;
pub use position_context::PointPositionContext;
pub use snapshot_config::{SnapshotConfig, TextCapturePolicy};
pub use snapshot_view::PointSnapshotView;
pub use stacked_aggregate::StackedAggregate;
