use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Position in sensor space (metres, sensor at the origin, +z away from it)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Whole-body tracking state reported by the sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrackingState {
    #[default]
    NotTracked,
    PositionOnly,
    Tracked,
}

/// Per-joint tracking state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JointTrackingState {
    #[default]
    NotTracked,
    Inferred,
    Tracked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JointType {
    HipCenter,
    Spine,
    ShoulderCenter,
    Head,
    ShoulderLeft,
    ElbowLeft,
    WristLeft,
    HandLeft,
    ShoulderRight,
    ElbowRight,
    WristRight,
    HandRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Joint {
    pub position: Vector3,
    #[serde(default)]
    pub tracking_state: JointTrackingState,
}

/// One detected body within a frame
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkeletonCandidate {
    pub tracking_state: TrackingState,
    /// Body centre position; `z` is the distance used to pick the primary skeleton
    pub position: Vector3,
    #[serde(default)]
    pub joints: HashMap<JointType, Joint>,
}

impl SkeletonCandidate {
    pub fn new(tracking_state: TrackingState, position: Vector3) -> Self {
        Self {
            tracking_state,
            position,
            joints: HashMap::new(),
        }
    }

    /// Builder-style helper that records a tracked joint
    pub fn with_joint(mut self, joint_type: JointType, position: Vector3) -> Self {
        self.joints.insert(
            joint_type,
            Joint {
                position,
                tracking_state: JointTrackingState::Tracked,
            },
        );
        self
    }

    pub fn joint(&self, joint_type: JointType) -> Option<&Joint> {
        self.joints.get(&joint_type)
    }

    pub fn is_tracked(&self) -> bool {
        self.tracking_state == TrackingState::Tracked
    }
}

/// All skeletons visible to the sensor on one tick
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkeletonFrame {
    #[serde(default)]
    pub frame_number: u64,
    /// Sensor timestamp in milliseconds
    #[serde(default)]
    pub timestamp_ms: f64,
    #[serde(default)]
    pub skeletons: Vec<SkeletonCandidate>,
}

impl SkeletonFrame {
    pub fn new(frame_number: u64, timestamp_ms: f64, skeletons: Vec<SkeletonCandidate>) -> Self {
        Self {
            frame_number,
            timestamp_ms,
            skeletons,
        }
    }
}
