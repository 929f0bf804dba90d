use serde::{Deserialize, Serialize};

use crate::core::{PlotArea, ViewDomain, Viewport, YRange};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{InteractionMode, Tooltip};
use crate::render::Renderer;

use super::ChartEngine;

pub const ENGINE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Per-series summary of the current view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSnapshot {
    pub label: String,
    pub color: String,
    pub unit: String,
    /// Defined samples inside the visible window.
    pub visible_samples: usize,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub plot_area: PlotArea,
    pub label_count: usize,
    pub view_domain: ViewDomain,
    pub full_domain: ViewDomain,
    pub y_range: YRange,
    pub interaction_mode: InteractionMode,
    pub tooltip: Option<Tooltip>,
    /// One entry per series, in caller order. Labels need not be unique.
    pub series: Vec<SeriesSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: EngineSnapshot,
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let domain = self.controller.domain();
        let visible = domain.visible_indices(self.labels.len());
        let series = self
            .series
            .iter()
            .map(|item| {
                let visible_samples = visible
                    .clone()
                    .map_or(0, |range| range.filter(|&index| item.value_at(index).is_some()).count());
                SeriesSnapshot {
                    label: item.label.clone(),
                    color: item.color.clone(),
                    unit: item.unit.clone(),
                    visible_samples,
                }
            })
            .collect();

        EngineSnapshot {
            viewport: self.viewport,
            plot_area: self.plot_area(),
            label_count: self.labels.len(),
            view_domain: domain,
            full_domain: self.controller.full_domain(),
            y_range: self.y_range(),
            interaction_mode: self.interaction.mode(),
            tooltip: self.interaction.tooltip().cloned(),
            series,
        }
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}

impl EngineSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = EngineSnapshotJsonContractV1 {
            schema_version: ENGINE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned v1 contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<EngineSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: EngineSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != ENGINE_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
