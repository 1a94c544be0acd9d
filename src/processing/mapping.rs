//! Sensor-space to screen-space coordinate mapping
//!
//! A small band of the sensor's field of view is stretched over the whole
//! destination surface so short hand movements cover the full screen.

use crate::skeleton::Vector3;
use serde::{Deserialize, Serialize};

/// Destination surface size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surface {
    pub width: u32,
    pub height: u32,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

/// Normalised input band applied to both axes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputRange {
    pub min: f64,
    pub max: f64,
}

impl InputRange {
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

impl Default for InputRange {
    fn default() -> Self {
        Self { min: 0.2, max: 0.4 }
    }
}

/// Mapped position in surface pixels, before rounding
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Nearest integer pixel, as handed to the pointer sink
    ///
    /// Halves round to even (2.5 -> 2).
    pub fn to_pixel(self) -> (i32, i32) {
        (self.x.round_ties_even() as i32, self.y.round_ties_even() as i32)
    }
}

/// Linearly rescale `position` from the `range` band onto `surface`
///
/// Values outside the band are not clamped and land outside the surface.
pub fn map_to_surface(position: Vector3, surface: Surface, range: InputRange) -> Point2 {
    Point2 {
        x: rescale(position.x, range, surface.width),
        y: rescale(position.y, range, surface.height),
    }
}

fn rescale(value: f64, range: InputRange, extent: u32) -> f64 {
    (value - range.min) / range.span() * f64::from(extent)
}

/// Mapper bound to one surface and input band for the pipeline's lifetime
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    surface: Surface,
    range: InputRange,
    invert_y: bool,
}

impl CoordinateMapper {
    pub fn new(surface: Surface, range: InputRange) -> Self {
        Self {
            surface,
            range,
            invert_y: false,
        }
    }

    /// Flip the output Y axis (sensor up becomes screen up)
    pub fn with_inverted_y(mut self, invert_y: bool) -> Self {
        self.invert_y = invert_y;
        self
    }

    pub fn map(&self, position: Vector3) -> Point2 {
        let mut point = map_to_surface(position, self.surface, self.range);
        if self.invert_y {
            point.y = f64::from(self.surface.height) - point.y;
        }
        point
    }
}
