//! Skeleton Pointer - drive the desktop cursor with your hands.
//!
//! Skeleton frames from a depth sensor are reduced to one primary body; its
//! right hand moves the cursor and a forward reach of the left hand clicks.
//! Swipes reported by an external recogniser click as well.

pub mod config;
pub mod error;
pub mod gesture;
pub mod pipeline;
pub mod pointer;
pub mod processing;
pub mod replay;
pub mod skeleton;

pub use config::PipelineConfig;
pub use error::{PointerError, PointerResult};
pub use pipeline::{FrameOutcome, FramePipeline, SensorEvent};
pub use pointer::{PointerEvent, PointerSink};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins over `default_filter` when set.
pub fn init_logging(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
