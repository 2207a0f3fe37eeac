//! Progress-to-geometry mapping for the ring.
//!
//! The ring is drawn as a stroked circle whose dash pattern hides the part of
//! the circumference that has not been reached yet. With a dash array equal to
//! the circumference `C`, a dash offset of `C · (1 − v)` leaves exactly the
//! fraction `v` of the stroke visible.

use std::f32::consts::PI;

/// Rotation applied to the ring's frame so progress starts at 12 o'clock
pub const START_ANGLE_DEGREES: f32 = -90.0;

/// Static geometry of a ring, derived from its size and stroke width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    size: f32,
    stroke_width: f32,
    radius: f32,
    circumference: f32,
}

impl RingGeometry {
    /// Compute geometry for a ring of diameter `size` drawn with `stroke_width`.
    ///
    /// No validation happens here: a stroke as wide as the ring yields a
    /// non-positive radius. Callers are expected to pass values that went
    /// through [`RingConfig::sanitized`](crate::config::RingConfig::sanitized).
    pub fn new(size: f32, stroke_width: f32) -> Self {
        let radius = (size - stroke_width) / 2.0;
        Self {
            size,
            stroke_width,
            radius,
            circumference: 2.0 * PI * radius,
        }
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Radius of the stroke's center line
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn circumference(&self) -> f32 {
        self.circumference
    }

    /// Center of the ring in its local coordinate space
    pub fn center(&self) -> (f32, f32) {
        (self.size / 2.0, self.size / 2.0)
    }

    /// Dash length for the indicator stroke (one full turn)
    pub fn dash_array(&self) -> f32 {
        self.circumference
    }

    /// Dash offset that reveals `progress` of the indicator.
    ///
    /// `progress` is clamped to [0, 1]; 0 hides the arc, 1 draws a full circle.
    pub fn dash_offset(&self, progress: f32) -> f32 {
        self.circumference * (1.0 - clamp_unit(progress))
    }

    /// Angle covered by the indicator, clockwise from 12 o'clock
    pub fn sweep_degrees(&self, progress: f32) -> f32 {
        360.0 * clamp_unit(progress)
    }

    /// Point on the stroke's center line at `progress` around the ring,
    /// in unrotated screen coordinates (y grows downward).
    pub fn point_at(&self, progress: f32) -> (f32, f32) {
        let angle = (START_ANGLE_DEGREES + self.sweep_degrees(progress)).to_radians();
        let (cx, cy) = self.center();
        (cx + self.radius * angle.cos(), cy + self.radius * angle.sin())
    }
}

/// Clamp to [0, 1], mapping NaN to 0
pub(crate) fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_default_ring_geometry() {
        let geometry = RingGeometry::new(32.0, 4.0);
        assert_eq!(geometry.radius(), 14.0);
        assert!(approx(geometry.circumference(), 87.9646));
        assert_eq!(geometry.center(), (16.0, 16.0));
        assert_eq!(geometry.dash_array(), geometry.circumference());
    }

    #[test]
    fn test_dash_offset_endpoints() {
        let geometry = RingGeometry::new(32.0, 4.0);
        assert_eq!(geometry.dash_offset(0.0), geometry.circumference());
        assert_eq!(geometry.dash_offset(1.0), 0.0);
        assert!(approx(geometry.dash_offset(0.75), 21.9911));
    }

    #[test]
    fn test_dash_offset_is_monotonic() {
        let geometry = RingGeometry::new(64.0, 6.0);
        let mut prev = geometry.dash_offset(0.0);
        for i in 1..=20 {
            let offset = geometry.dash_offset(i as f32 / 20.0);
            assert!(offset < prev);
            prev = offset;
        }
    }

    #[test]
    fn test_radius_formula_across_sizes() {
        for size in [16.0f32, 32.0, 77.0, 128.0] {
            for stroke in [1.0f32, 4.0, 10.0] {
                let geometry = RingGeometry::new(size, stroke);
                let radius = (size - stroke) / 2.0;
                assert_eq!(geometry.radius(), radius);
                assert!(approx(geometry.circumference(), 2.0 * PI * radius));
                assert!(geometry.radius() > 0.0);
            }
        }
    }

    #[test]
    fn test_progress_is_clamped() {
        let geometry = RingGeometry::new(32.0, 4.0);
        assert_eq!(geometry.dash_offset(-1.0), geometry.circumference());
        assert_eq!(geometry.dash_offset(3.0), 0.0);
        assert_eq!(geometry.dash_offset(f32::NAN), geometry.circumference());
        assert_eq!(geometry.sweep_degrees(0.25), 90.0);
    }

    #[test]
    fn test_point_at_starts_at_twelve_and_runs_clockwise() {
        let geometry = RingGeometry::new(32.0, 4.0);
        let (x, y) = geometry.point_at(0.0);
        assert!(approx(x, 16.0) && approx(y, 2.0));

        // A quarter turn clockwise lands on 3 o'clock
        let (x, y) = geometry.point_at(0.25);
        assert!(approx(x, 30.0) && approx(y, 16.0));
    }
}
