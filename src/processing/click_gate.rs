//! Edge-triggered click detection
//!
//! Reaching the left hand past the threshold fires one click. The gate then
//! stays latched until the hand comes back below the threshold, so holding
//! the pose does not repeat the click.

use serde::{Deserialize, Serialize};

/// Latch state of the click gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClickLatch {
    /// Ready to fire on the next reach past the threshold
    #[default]
    Disarmed,
    /// Already fired for the current reach
    Armed,
}

#[derive(Debug, Clone, Default)]
pub struct ClickGate {
    latch: ClickLatch,
}

impl ClickGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latch(&self) -> ClickLatch {
        self.latch
    }

    /// Feed one mapped left-hand X value; returns `true` when a click fires
    ///
    /// A value exactly at the threshold (or NaN) leaves the latch unchanged.
    pub fn evaluate(&mut self, value: f64, threshold: f64) -> bool {
        match self.latch {
            ClickLatch::Disarmed if value > threshold => {
                self.latch = ClickLatch::Armed;
                true
            }
            ClickLatch::Armed if value < threshold => {
                self.latch = ClickLatch::Disarmed;
                false
            }
            _ => false,
        }
    }
}
