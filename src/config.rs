//! Ring configuration supplied by the host.
//!
//! Hosts usually restrict editable values to the `*_RANGE` constants below,
//! but the ring never relies on that: [`RingConfig::sanitized`] clamps
//! anything geometrically impossible before geometry is computed.

use std::ops::RangeInclusive;

use thiserror::Error;

use crate::animation::Transition;
use crate::geometry::clamp_unit;
use crate::widgets::Color;

pub const DEFAULT_PERCENT: f32 = 0.75;
pub const DEFAULT_SIZE: f32 = 32.0;
pub const DEFAULT_STROKE_WIDTH: f32 = 4.0;

/// Ranges a host editor offers for each property
pub const PERCENT_RANGE: RangeInclusive<f32> = 0.0..=1.0;
pub const SIZE_RANGE: RangeInclusive<f32> = 16.0..=128.0;
pub const STROKE_WIDTH_RANGE: RangeInclusive<f32> = 1.0..=10.0;

/// Smallest diameter the ring will lay out at
pub const MIN_SIZE: f32 = 2.0;
/// Smallest stroke the ring will draw with
pub const MIN_STROKE_WIDTH: f32 = 0.5;
/// Stroke width is clamped so the center-line radius never drops below this
pub const MIN_RADIUS: f32 = 0.5;

/// Neutral color of the background ring
pub const TRACK_COLOR: Color = Color::from_hex(0xD9D9D9);
/// Accent color of the progress arc
pub const INDICATOR_COLOR: Color = Color::from_hex(0x90D97E);

/// Reasons a configuration cannot be drawn as given
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("percent {0} is outside 0..=1")]
    PercentOutOfRange(f32),
    #[error("size {0} must be a finite number of at least {min}", min = MIN_SIZE)]
    InvalidSize(f32),
    #[error("stroke width {0} must be a finite positive number")]
    InvalidStrokeWidth(f32),
    #[error("stroke width {stroke_width} leaves no radius inside a ring of size {size}")]
    StrokeTooWide { size: f32, stroke_width: f32 },
}

/// Everything the host can change about a ring
#[derive(Clone, Debug)]
pub struct RingConfig {
    /// Target progress, 0.0 (empty) to 1.0 (full)
    pub percent: f32,
    /// Diameter in logical pixels
    pub size: f32,
    pub stroke_width: f32,
    pub track_color: Color,
    pub indicator_color: Color,
    /// How the arc animates toward a new percent
    pub transition: Transition,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            percent: DEFAULT_PERCENT,
            size: DEFAULT_SIZE,
            stroke_width: DEFAULT_STROKE_WIDTH,
            track_color: TRACK_COLOR,
            indicator_color: INDICATOR_COLOR,
            transition: Transition::default(),
        }
    }
}

impl RingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn percent(mut self, percent: f32) -> Self {
        self.percent = percent;
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn stroke_width(mut self, stroke_width: f32) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    pub fn track_color(mut self, color: Color) -> Self {
        self.track_color = color;
        self
    }

    pub fn indicator_color(mut self, color: Color) -> Self {
        self.indicator_color = color;
        self
    }

    pub fn transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    /// Check the configuration without changing it.
    ///
    /// Only geometric sanity is checked; the host `*_RANGE` limits are not.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !PERCENT_RANGE.contains(&self.percent) {
            return Err(ConfigError::PercentOutOfRange(self.percent));
        }
        if !self.size.is_finite() || self.size < MIN_SIZE {
            return Err(ConfigError::InvalidSize(self.size));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ConfigError::InvalidStrokeWidth(self.stroke_width));
        }
        if self.stroke_width > max_stroke_width(self.size) {
            return Err(ConfigError::StrokeTooWide {
                size: self.size,
                stroke_width: self.stroke_width,
            });
        }
        Ok(())
    }

    /// Return a copy that is always drawable.
    ///
    /// Percent is clamped to [0, 1] (NaN becomes 0), size to at least
    /// [`MIN_SIZE`], and the stroke so that the radius stays at or above
    /// [`MIN_RADIUS`].
    pub fn sanitized(&self) -> Self {
        if let Err(err) = self.validate() {
            log::warn!("Clamping ring config: {}", err);
        }

        let size = if self.size.is_finite() {
            self.size.max(MIN_SIZE)
        } else {
            DEFAULT_SIZE
        };
        let stroke_width = if self.stroke_width.is_finite() {
            self.stroke_width
                .max(MIN_STROKE_WIDTH)
                .min(max_stroke_width(size))
        } else {
            DEFAULT_STROKE_WIDTH.min(max_stroke_width(size))
        };

        Self {
            percent: clamp_unit(self.percent),
            size,
            stroke_width,
            ..self.clone()
        }
    }
}

fn max_stroke_width(size: f32) -> f32 {
    size - 2.0 * MIN_RADIUS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::RingGeometry;

    #[test]
    fn test_defaults() {
        let config = RingConfig::default();
        assert_eq!(config.percent, 0.75);
        assert_eq!(config.size, 32.0);
        assert_eq!(config.stroke_width, 4.0);
        assert_eq!(config.track_color, TRACK_COLOR);
        assert_eq!(config.indicator_color, INDICATOR_COLOR);
        assert_eq!(config.transition.duration_ms, 500.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_is_inside_host_ranges() {
        assert!(PERCENT_RANGE.contains(&DEFAULT_PERCENT));
        assert!(SIZE_RANGE.contains(&DEFAULT_SIZE));
        assert!(STROKE_WIDTH_RANGE.contains(&DEFAULT_STROKE_WIDTH));
    }

    #[test]
    fn test_colors() {
        assert_eq!(TRACK_COLOR.to_hex_string(), "#D9D9D9");
        assert_eq!(INDICATOR_COLOR.to_hex_string(), "#90D97E");
    }

    #[test]
    fn test_validate_rejects_wide_stroke() {
        let config = RingConfig::new().size(32.0).stroke_width(32.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::StrokeTooWide {
                size: 32.0,
                stroke_width: 32.0
            })
        );
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert_eq!(
            RingConfig::new().percent(1.5).validate(),
            Err(ConfigError::PercentOutOfRange(1.5))
        );
        assert_eq!(
            RingConfig::new().size(0.0).validate(),
            Err(ConfigError::InvalidSize(0.0))
        );
        assert_eq!(
            RingConfig::new().stroke_width(-2.0).validate(),
            Err(ConfigError::InvalidStrokeWidth(-2.0))
        );
        assert!(RingConfig::new().percent(f32::NAN).validate().is_err());
    }

    #[test]
    fn test_sanitized_clamps_percent() {
        assert_eq!(RingConfig::new().percent(1.5).sanitized().percent, 1.0);
        assert_eq!(RingConfig::new().percent(-0.2).sanitized().percent, 0.0);
        assert_eq!(RingConfig::new().percent(f32::NAN).sanitized().percent, 0.0);
    }

    #[test]
    fn test_stroke_equal_to_size_keeps_positive_radius() {
        let config = RingConfig::new().size(32.0).stroke_width(32.0).sanitized();
        let geometry = RingGeometry::new(config.size, config.stroke_width);
        assert!(geometry.radius() > 0.0);
        assert_eq!(geometry.radius(), MIN_RADIUS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sanitized_handles_degenerate_size() {
        for size in [0.0, -10.0, f32::NAN, f32::INFINITY] {
            let config = RingConfig::new().size(size).sanitized();
            assert!(config.validate().is_ok(), "size {} not sanitized", size);
            let geometry = RingGeometry::new(config.size, config.stroke_width);
            assert!(geometry.radius() > 0.0);
            assert!(geometry.circumference().is_finite());
        }
    }

    #[test]
    fn test_sanitized_leaves_valid_config_alone() {
        let config = RingConfig::new().percent(0.3).size(64.0).stroke_width(8.0);
        let sanitized = config.sanitized();
        assert_eq!(sanitized.percent, 0.3);
        assert_eq!(sanitized.size, 64.0);
        assert_eq!(sanitized.stroke_width, 8.0);
    }
}
