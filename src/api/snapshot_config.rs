use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// How a snapshot produces its tooltip and data-label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextCapturePolicy {
    /// Format on every read against the live record, following formatter
    /// changes made after capture. Requires the record and series to outlive
    /// the snapshot.
    #[default]
    Live,
    /// Format once at capture and keep no reference to the live record.
    Frozen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SnapshotConfig {
    #[serde(default)]
    pub text_policy: TextCapturePolicy,
}

impl SnapshotConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_text_policy(mut self, text_policy: TextCapturePolicy) -> Self {
        self.text_policy = text_policy;
        self
    }

    #[must_use]
    pub fn frozen() -> Self {
        Self::new().with_text_policy(TextCapturePolicy::Frozen)
    }

    /// Serializes config as pretty JSON.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}
