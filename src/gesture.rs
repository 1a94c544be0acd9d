//! Swipe gestures from an external recogniser
//!
//! Either swipe direction triggers the same primary click as the left-hand
//! reach. Swipes do not touch the click gate's latch.

use crate::pointer::PointerSink;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Forwards recogniser swipes to the pointer sink as clicks
#[derive(Debug, Clone, Copy, Default)]
pub struct GestureBridge;

impl GestureBridge {
    pub fn new() -> Self {
        Self
    }

    pub fn on_swipe<S: PointerSink + ?Sized>(&self, direction: SwipeDirection, sink: &mut S) {
        tracing::debug!("Swipe {} detected, clicking", direction.as_str());
        if let Err(e) = sink.click_primary_button() {
            tracing::warn!("Swipe click dropped: {}", e);
        }
    }
}
