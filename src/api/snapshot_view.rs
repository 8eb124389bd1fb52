use serde::{Deserialize, Serialize};

use super::{StackedAggregate, TextCapturePolicy};

/// Plain copy of a [`PointSnapshot`](super::PointSnapshot) for other threads,
/// fixtures and debugging tools.
///
/// Handles are reduced to presence flags. A missing text means it could not be
/// produced when the view was built. Non-finite scalars are written as
/// `"NaN"`, `"inf"` or `"-inf"` so the JSON reloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointSnapshotView {
    pub is_null: bool,
    #[serde(with = "crate::api::json_float")]
    pub primary_value: f64,
    #[serde(with = "crate::api::json_float")]
    pub secondary_value: f64,
    #[serde(with = "crate::api::json_float")]
    pub tertiary_value: f64,
    #[serde(with = "crate::api::json_float")]
    pub quaternary_value: f64,
    #[serde(with = "crate::api::json_float")]
    pub quinary_value: f64,
    pub stacked: Option<StackedAggregate>,
    pub index: usize,
    pub has_data_source: bool,
    pub has_visual: bool,
    pub has_label: bool,
    pub text_policy: TextCapturePolicy,
    pub tooltip_text: Option<String>,
    pub data_label_text: Option<String>,
}
