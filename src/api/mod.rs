mod axis_ticks;
mod data_controller;
mod debounce;
mod engine;
mod engine_config;
mod engine_init;
mod engine_snapshot;
mod interaction_controller;
mod navigation_controller;
mod render_frame_builder;
mod validation;

pub use debounce::Debouncer;
pub use engine::ChartEngine;
pub use engine_config::{ChartEngineConfig, ChartStyle};
pub use engine_snapshot::{
    ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshot, EngineSnapshotJsonContractV1, SeriesSnapshot,
};
