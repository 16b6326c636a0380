//! Canvas configuration: zoom limits, world-canvas extents, and object defaults.
//!
//! Hosts usually pass a JSON object from JavaScript; every key is optional and
//! falls back to the constants in [`crate::consts`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    CANVAS_HEIGHT, CANVAS_PADDING, CANVAS_WIDTH, DEFAULT_OBJECT_SIZE, ZOOM_INTENSITY, ZOOM_MAX, ZOOM_MIN,
};
use crate::error::CanvasError;
use crate::geom::Size;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// World-canvas width in world units.
    pub canvas_width: f64,
    /// World-canvas height in world units.
    pub canvas_height: f64,
    /// Margin kept visible past the canvas edges, in world units.
    pub padding: f64,
    pub zoom_min: f64,
    pub zoom_max: f64,
    /// Zoom speed per unit of wheel delta.
    pub zoom_intensity: f64,
    /// When set, raw wheel `deltaY` is clamped into `[-limit, limit]` before zooming.
    pub wheel_delta_limit: Option<f64>,
    /// Size of objects created from the context menu.
    pub default_object_size: Size,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            padding: CANVAS_PADDING,
            zoom_min: ZOOM_MIN,
            zoom_max: ZOOM_MAX,
            zoom_intensity: ZOOM_INTENSITY,
            wheel_delta_limit: None,
            default_object_size: Size::new(DEFAULT_OBJECT_SIZE, DEFAULT_OBJECT_SIZE),
        }
    }
}

impl CanvasConfig {
    /// Parse and validate a config from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Config`] if the JSON is malformed or any value is
    /// out of range.
    pub fn from_json(raw: &str) -> Result<Self, CanvasError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| CanvasError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable by the camera and clamp policy.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Config`] naming the first offending field.
    pub fn validate(&self) -> Result<(), CanvasError> {
        let finite = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("padding", self.padding),
            ("zoom_min", self.zoom_min),
            ("zoom_max", self.zoom_max),
            ("zoom_intensity", self.zoom_intensity),
            ("default_object_size.width", self.default_object_size.width),
            ("default_object_size.height", self.default_object_size.height),
        ];
        if let Some((name, value)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(CanvasError::Config(format!("{name} must be finite, got {value}")));
        }

        if self.canvas_width <= 0.0 || self.canvas_height <= 0.0 {
            return Err(CanvasError::Config(format!(
                "canvas size must be positive, got {} x {}",
                self.canvas_width, self.canvas_height
            )));
        }
        if self.padding < 0.0 {
            return Err(CanvasError::Config(format!("padding must be non-negative, got {}", self.padding)));
        }
        if self.zoom_min <= 0.0 {
            return Err(CanvasError::Config(format!("zoom_min must be positive, got {}", self.zoom_min)));
        }
        if self.zoom_min > self.zoom_max {
            return Err(CanvasError::Config(format!(
                "zoom_min ({}) exceeds zoom_max ({})",
                self.zoom_min, self.zoom_max
            )));
        }
        if self.zoom_intensity <= 0.0 {
            return Err(CanvasError::Config(format!(
                "zoom_intensity must be positive, got {}",
                self.zoom_intensity
            )));
        }
        if let Some(limit) = self.wheel_delta_limit {
            if !limit.is_finite() || limit <= 0.0 {
                return Err(CanvasError::Config(format!(
                    "wheel_delta_limit must be positive and finite, got {limit}"
                )));
            }
        }
        if self.default_object_size.width < 0.0 || self.default_object_size.height < 0.0 {
            return Err(CanvasError::Config("default_object_size must be non-negative".into()));
        }
        Ok(())
    }

    /// Clamp limits for the camera derived from this config.
    #[must_use]
    pub fn limits(&self) -> CameraLimits {
        CameraLimits {
            canvas: Size::new(self.canvas_width, self.canvas_height),
            padding: self.padding,
            zoom_min: self.zoom_min,
            zoom_max: self.zoom_max,
            zoom_intensity: self.zoom_intensity,
            wheel_delta_limit: self.wheel_delta_limit,
        }
    }
}

/// The subset of [`CanvasConfig`] the camera needs on every mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraLimits {
    pub canvas: Size,
    pub padding: f64,
    pub zoom_min: f64,
    pub zoom_max: f64,
    pub zoom_intensity: f64,
    pub wheel_delta_limit: Option<f64>,
}

impl Default for CameraLimits {
    fn default() -> Self {
        CanvasConfig::default().limits()
    }
}
