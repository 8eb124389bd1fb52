use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::PointSnapshotView;

pub const POINT_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: PointSnapshotView,
}

impl PointSnapshotView {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize point snapshot: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = PointSnapshotJsonContractV1 {
            schema_version: POINT_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!(
                "failed to serialize point snapshot contract v1: {e}"
            ))
        })
    }

    /// Accepts either a bare view or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<PointSnapshotView>(input) {
            return Ok(snapshot);
        }
        let payload: PointSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse point snapshot json payload: {e}"))
        })?;
        if payload.schema_version != POINT_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported point snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
