//! Skeleton frames delivered by the depth sensor
//!
//! Frames are decoded by the sensor driver; this module only describes
//! their shape and picks the body that drives the cursor.

pub mod select;
pub mod types;

pub use select::select_primary;
pub use types::{
    Joint, JointTrackingState, JointType, SkeletonCandidate, SkeletonFrame, TrackingState, Vector3,
};
