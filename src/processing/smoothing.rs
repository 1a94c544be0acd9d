//! Jitter smoothing for mapped joint positions
//!
//! Each axis keeps a short window of recent raw samples. The estimate is a
//! recency-weighted sum blended with the plain window mean, so the newest
//! samples dominate while the mean keeps the output from drifting.

use crate::processing::mapping::Point2;
use std::collections::VecDeque;

/// Decay base used when none is configured
pub const DEFAULT_DECAY: f64 = 0.9;

/// Number of samples kept per axis when none is configured
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Largest window a filter will keep; larger requests are capped
pub const MAX_WINDOW_SIZE: usize = 256;

/// Exponentially weighted average of `data` (oldest first) anchored by its mean
///
/// Sample `i` of `n` is weighted `base^(n-1-i)`; the window mean gets weight
/// `base^n`. Returns `None` for an empty window.
pub fn exponential_moving_average(data: &[f64], base: f64) -> Option<f64> {
    if data.is_empty() {
        return None;
    }

    let n = data.len();
    let average = data.iter().sum::<f64>() / n as f64;

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (i, value) in data.iter().enumerate() {
        let weight = base.powi((n - i - 1) as i32);
        numerator += value * weight;
        denominator += weight;
    }

    let mean_weight = base.powi(n as i32);
    numerator += average * mean_weight;
    denominator += mean_weight;

    Some(numerator / denominator)
}

/// Plain weighted average
///
/// Returns `None` when the slices differ in length, are empty, or the
/// weights sum to zero; the last two would otherwise divide by zero.
pub fn weighted_average(data: &[f64], weights: &[f64]) -> Option<f64> {
    if data.len() != weights.len() || data.is_empty() {
        return None;
    }

    let total_weight: f64 = weights.iter().sum();
    if total_weight == 0.0 {
        return None;
    }

    let weighted: f64 = data.iter().zip(weights).map(|(d, w)| d * w).sum();
    Some(weighted / total_weight)
}

/// Bounded sample window for one axis
#[derive(Debug, Clone)]
pub struct SmoothingFilter {
    window: VecDeque<f64>,
    capacity: usize,
    decay: f64,
}

impl SmoothingFilter {
    /// Create a filter keeping at most `capacity` samples (1..=MAX_WINDOW_SIZE)
    pub fn new(capacity: usize, decay: f64) -> Self {
        let capacity = capacity.clamp(1, MAX_WINDOW_SIZE);
        Self {
            window: VecDeque::new(),
            capacity,
            decay,
        }
    }

    /// Record a raw sample and return the smoothed estimate
    pub fn push(&mut self, value: f64) -> f64 {
        if self.window.len() == self.capacity {
            self.window.pop_front();
        }
        self.window.push_back(value);

        exponential_moving_average(self.window.make_contiguous(), self.decay).unwrap_or(value)
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for SmoothingFilter {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_SIZE, DEFAULT_DECAY)
    }
}

/// Independent X and Y filters for a cursor position
#[derive(Debug, Clone, Default)]
pub struct PointSmoother {
    pub x: SmoothingFilter,
    pub y: SmoothingFilter,
}

impl PointSmoother {
    pub fn new(capacity: usize, decay: f64) -> Self {
        Self {
            x: SmoothingFilter::new(capacity, decay),
            y: SmoothingFilter::new(capacity, decay),
        }
    }

    pub fn push(&mut self, point: Point2) -> Point2 {
        Point2 {
            x: self.x.push(point.x),
            y: self.y.push(point.y),
        }
    }
}
