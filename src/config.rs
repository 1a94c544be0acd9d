//! Pipeline configuration
//!
//! Everything that depends on screen size or sensor placement lives here,
//! with defaults matching a seated user about two metres from the sensor.

use crate::error::{PointerError, PointerResult};
use crate::processing::mapping::{InputRange, Surface};
use crate::processing::smoothing::{DEFAULT_DECAY, DEFAULT_WINDOW_SIZE, MAX_WINDOW_SIZE};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default left-hand reach threshold in surface pixels
pub const DEFAULT_CLICK_THRESHOLD: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PipelineConfig {
    /// Destination surface in pixels
    pub surface: Surface,
    /// Sensor band stretched over the surface on both axes
    pub input_range: InputRange,
    /// Flip the mapped Y axis
    pub invert_y: bool,
    /// Mapped left-hand X beyond which a click fires
    pub click_threshold: f64,
    pub smoothing: SmoothingConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            surface: Surface::default(),
            input_range: InputRange::default(),
            invert_y: false,
            click_threshold: DEFAULT_CLICK_THRESHOLD,
            smoothing: SmoothingConfig::default(),
        }
    }
}

/// Optional cursor smoothing stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SmoothingConfig {
    pub enabled: bool,
    /// Samples kept per axis
    pub window_size: usize,
    /// Decay base in (0, 1); smaller values favour the newest sample more
    pub decay: f64,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            window_size: DEFAULT_WINDOW_SIZE,
            decay: DEFAULT_DECAY,
        }
    }
}

impl PipelineConfig {
    /// Configuration for a surface of the given size, other fields defaulted
    pub fn for_surface(width: u32, height: u32) -> Self {
        Self {
            surface: Surface { width, height },
            ..Self::default()
        }
    }

    /// Load and validate a JSON configuration file
    pub fn load(path: &Path) -> PointerResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;

        tracing::info!(
            "Loaded config from {} (surface={}x{}, smoothing={})",
            path.display(),
            config.surface.width,
            config.surface.height,
            config.smoothing.enabled
        );
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> PointerResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> PointerResult<()> {
        if self.surface.width == 0 || self.surface.height == 0 {
            return Err(invalid(format!(
                "surface must be non-empty, got {}x{}",
                self.surface.width, self.surface.height
            )));
        }

        let range = self.input_range;
        if !(0.0..1.0).contains(&range.min) {
            return Err(invalid(format!("inputRange.min {} outside [0, 1)", range.min)));
        }
        if !(range.max > 0.0 && range.max <= 1.0) {
            return Err(invalid(format!("inputRange.max {} outside (0, 1]", range.max)));
        }
        if range.min >= range.max {
            return Err(invalid(format!(
                "inputRange.min {} must be below max {}",
                range.min, range.max
            )));
        }

        if !self.click_threshold.is_finite() {
            return Err(invalid("clickThreshold must be finite".to_string()));
        }

        if self.smoothing.window_size == 0 || self.smoothing.window_size > MAX_WINDOW_SIZE {
            return Err(invalid(format!(
                "smoothing.windowSize {} outside 1..={}",
                self.smoothing.window_size, MAX_WINDOW_SIZE
            )));
        }
        if !(self.smoothing.decay > 0.0 && self.smoothing.decay < 1.0) {
            return Err(invalid(format!(
                "smoothing.decay {} outside (0, 1)",
                self.smoothing.decay
            )));
        }

        Ok(())
    }
}

fn invalid(message: String) -> PointerError {
    PointerError::InvalidConfig(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.input_range, InputRange { min: 0.2, max: 0.4 });
        assert_eq!(config.click_threshold, 100.0);
        assert!(!config.smoothing.enabled);
        assert_eq!(config.smoothing.decay, 0.9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: PipelineConfig = serde_json::from_str(
            r#"{ "surface": { "width": 1280, "height": 720 }, "smoothing": { "enabled": true } }"#,
        )
        .unwrap();

        assert_eq!(config.surface, Surface { width: 1280, height: 720 });
        assert!(config.smoothing.enabled);
        assert_eq!(config.smoothing.window_size, DEFAULT_WINDOW_SIZE);
        assert_eq!(config.click_threshold, DEFAULT_CLICK_THRESHOLD);
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = PipelineConfig::for_surface(0, 600);
        assert!(matches!(config.validate(), Err(PointerError::InvalidConfig(_))));

        config = PipelineConfig::default();
        config.input_range = InputRange { min: 0.4, max: 0.2 };
        assert!(config.validate().is_err());

        config = PipelineConfig::default();
        config.input_range = InputRange { min: 0.0, max: 1.5 };
        assert!(config.validate().is_err());

        config = PipelineConfig::default();
        config.smoothing.decay = 1.0;
        assert!(config.validate().is_err());

        config = PipelineConfig::default();
        config.smoothing.window_size = 0;
        assert!(config.validate().is_err());

        config = PipelineConfig::default();
        config.smoothing.enabled = true;
        config.smoothing.window_size = usize::MAX;
        assert!(config.validate().is_err());

        config.smoothing.window_size = MAX_WINDOW_SIZE + 1;
        assert!(config.validate().is_err());

        config.smoothing.window_size = MAX_WINDOW_SIZE;
        assert!(config.validate().is_ok());

        config = PipelineConfig::default();
        config.click_threshold = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_full_band_is_valid() {
        let mut config = PipelineConfig::default();
        config.input_range = InputRange { min: 0.0, max: 1.0 };
        assert!(config.validate().is_ok());
    }
}
