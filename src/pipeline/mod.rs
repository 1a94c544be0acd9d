//! Frame pipeline
//!
//! Turns the stream of skeleton frames and swipes into cursor moves and
//! clicks on a [`crate::pointer::PointerSink`].

pub mod frame;
pub mod source;

pub use frame::{FrameOutcome, FramePipeline, PipelineStats, SkipReason};
pub use source::{
    spawn_sensor_source, JsonLinesSource, ReplaySource, SensorEvent, SensorSource,
};
