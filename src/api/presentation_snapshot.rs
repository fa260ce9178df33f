use serde::{Deserialize, Serialize};

use crate::core::{AggregationMode, ChartPath, Color, LineKind};
use crate::error::{ChartError, ChartResult};

use super::PresentationData;

pub const PRESENTATION_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSnapshot {
    pub name: String,
    pub color: Color,
    pub kind: LineKind,
    pub visible: bool,
    pub min_y: f64,
    pub max_y: f64,
    pub aggregated_values: Vec<f64>,
    pub path: ChartPath,
    pub preview_path: ChartPath,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentationSnapshot {
    pub aggregation_mode: AggregationMode,
    pub points_count: usize,
    pub labels: Vec<String>,
    pub lower: f64,
    pub upper: f64,
    pub lines: Vec<LineSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentationSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: PresentationSnapshot,
}

impl PresentationSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = PresentationSnapshotJsonContractV1 {
            schema_version: PRESENTATION_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<PresentationSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: PresentationSnapshotJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
            })?;
        if payload.schema_version != PRESENTATION_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl PresentationData {
    #[must_use]
    pub fn snapshot(&self) -> PresentationSnapshot {
        let lines = self
            .lines
            .iter()
            .map(|line| LineSnapshot {
                name: line.name().to_owned(),
                color: line.color(),
                kind: line.kind(),
                visible: line.is_visible(),
                min_y: line.min_y(),
                max_y: line.max_y(),
                aggregated_values: line.aggregated_values().to_vec(),
                path: line.path().as_ref().clone(),
                preview_path: line.preview_path().as_ref().clone(),
            })
            .collect();

        PresentationSnapshot {
            aggregation_mode: self.aggregation_mode,
            points_count: self.points_count(),
            labels: self.labels.clone(),
            lower: self.lower,
            upper: self.upper,
            lines,
        }
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
