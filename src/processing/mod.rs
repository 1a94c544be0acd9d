//! Per-frame signal processing
//!
//! Coordinate mapping, jitter smoothing and click detection applied to the
//! primary skeleton's hand joints.

pub mod click_gate;
pub mod mapping;
pub mod smoothing;

pub use click_gate::{ClickGate, ClickLatch};
pub use mapping::{map_to_surface, CoordinateMapper, InputRange, Point2, Surface};
pub use smoothing::{exponential_moving_average, weighted_average, PointSmoother, SmoothingFilter};
