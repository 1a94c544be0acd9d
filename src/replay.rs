//! Offline replay of recorded sensor sessions
//!
//! Reads a JSON array of [`SensorEvent`]s, runs it through a fresh pipeline
//! and writes the resulting pointer events, so gesture tuning can be checked
//! without a sensor attached.

use crate::config::PipelineConfig;
use crate::error::PointerResult;
use crate::pipeline::{spawn_sensor_source, FramePipeline, PipelineStats, ReplaySource, SensorEvent};
use crate::pointer::{PointerEvent, RecordingSink};
use serde::Serialize;
use std::path::Path;

/// Summary of one replay run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaySummary {
    pub events: usize,
    pub stats: PipelineStats,
    pub clicks: usize,
}

/// Load a recorded session
pub fn load_events(path: &Path) -> PointerResult<Vec<SensorEvent>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Run recorded events through a pipeline and collect what it emitted
pub fn replay_events(
    events: Vec<SensorEvent>,
    config: &PipelineConfig,
) -> PointerResult<(Vec<PointerEvent>, PipelineStats)> {
    let sink = RecordingSink::new();
    let mut pipeline = FramePipeline::new(config, sink.clone())?;

    let rx = spawn_sensor_source(ReplaySource::new(events));
    let stats = pipeline.run(rx);

    Ok((sink.events(), stats))
}

/// Replay `input_file` and write the emitted pointer events to `output_file`
pub fn replay_file(
    input_file: &Path,
    output_file: &Path,
    config: &PipelineConfig,
) -> PointerResult<ReplaySummary> {
    let events = load_events(input_file)?;
    let event_count = events.len();

    tracing::info!(
        "Replaying {} sensor events from {}",
        event_count,
        input_file.display()
    );

    let (pointer_events, stats) = replay_events(events, config)?;
    let output = serde_json::to_vec_pretty(&pointer_events)?;
    std::fs::write(output_file, output)?;

    let clicks = pointer_events
        .iter()
        .filter(|event| matches!(event, PointerEvent::Click))
        .count();

    tracing::info!(
        "Wrote {} pointer events ({} clicks) to {}",
        pointer_events.len(),
        clicks,
        output_file.display()
    );

    Ok(ReplaySummary {
        events: event_count,
        stats,
        clicks,
    })
}
