//! Timing functions (easing curves) for animations.
//!
//! Timing functions control the rate of change during an animation, allowing
//! the ring's sweep to decelerate into its target instead of stopping abruptly.
//!
//! ## Built-in Easing Functions
//!
//! - [`TimingFunction::Linear`] - Constant speed (no easing)
//! - [`TimingFunction::EaseIn`] - Starts slow, ends fast (acceleration)
//! - [`TimingFunction::EaseOut`] - Starts fast, ends slow (deceleration)
//! - [`TimingFunction::EaseInOut`] - Slow start and end, fast middle
//! - [`TimingFunction::EaseOutCubic`] - Stronger deceleration than `EaseOut`
//!
//! ## Advanced Options
//!
//! - [`TimingFunction::CubicBezier`] - CSS-style cubic bezier curve
//! - [`TimingFunction::Custom`] - User-defined function
//!
//! Every built-in curve maps 0.0 to 0.0 and 1.0 to 1.0 exactly.
//!
//! ## Example
//!
//! ```
//! use progress_ring::animation::{TimingFunction, Transition};
//!
//! let transition = Transition::new(300.0, TimingFunction::EaseOutCubic);
//! assert!(transition.timing.evaluate(0.5) > 0.5);
//! ```

use std::sync::Arc;

/// Timing function that controls the animation curve
#[derive(Clone)]
pub enum TimingFunction {
    /// Linear interpolation (constant speed)
    Linear,
    /// Starts slow, ends fast
    EaseIn,
    /// Starts fast, ends slow
    EaseOut,
    /// Starts slow, speeds up, then slows down
    EaseInOut,
    /// Cubic deceleration: `1 - (1 - t)^3`
    EaseOutCubic,
    /// CSS cubic-bezier curve (x1, y1, x2, y2)
    CubicBezier(f32, f32, f32, f32),
    /// Custom timing function
    Custom(Arc<dyn Fn(f32) -> f32 + Send + Sync>),
}

impl TimingFunction {
    /// CSS `ease-out`, the curve used by the progress ring
    pub const EASE_OUT: Self = TimingFunction::CubicBezier(0.0, 0.0, 0.58, 1.0);

    /// Evaluate the timing function at time t (0.0 to 1.0)
    ///
    /// Input outside [0, 1] is clamped before evaluation.
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            TimingFunction::Linear => t,
            TimingFunction::EaseIn => ease_in(t),
            TimingFunction::EaseOut => ease_out(t),
            TimingFunction::EaseInOut => ease_in_out(t),
            TimingFunction::EaseOutCubic => ease_out_cubic(t),
            TimingFunction::CubicBezier(x1, y1, x2, y2) => cubic_bezier(t, *x1, *y1, *x2, *y2),
            TimingFunction::Custom(f) => f(t),
        }
    }

    /// Create a custom timing function from a closure
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f32) -> f32 + Send + Sync + 'static,
    {
        TimingFunction::Custom(Arc::new(f))
    }
}

impl std::fmt::Debug for TimingFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimingFunction::Linear => write!(f, "Linear"),
            TimingFunction::EaseIn => write!(f, "EaseIn"),
            TimingFunction::EaseOut => write!(f, "EaseOut"),
            TimingFunction::EaseInOut => write!(f, "EaseInOut"),
            TimingFunction::EaseOutCubic => write!(f, "EaseOutCubic"),
            TimingFunction::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "CubicBezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
            TimingFunction::Custom(_) => write!(f, "Custom"),
        }
    }
}

// Easing functions

fn ease_in(t: f32) -> f32 {
    t * t
}

fn ease_out(t: f32) -> f32 {
    t * (2.0 - t)
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Cubic bezier curve evaluation, x1 and x2 are expected in [0, 1].
///
/// Solves for the curve parameter with Newton-Raphson and falls back to
/// bisection when the slope flattens. Computes in f64 internally.
fn cubic_bezier(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    // Endpoints are always exact
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let x = t as f64;
    let (x1, y1, x2, y2) = (x1 as f64, y1 as f64, x2 as f64, y2 as f64);

    let mut p = x;
    for _ in 0..8 {
        let err = bezier_sample(p, x1, x2) - x;
        if err.abs() < 1e-7 {
            return bezier_sample(p, y1, y2) as f32;
        }
        let slope = bezier_slope(p, x1, x2);
        if slope.abs() < 1e-7 {
            break;
        }
        p -= err / slope;
    }

    let mut lo = 0.0_f64;
    let mut hi = 1.0_f64;
    p = x;
    for _ in 0..32 {
        let val = bezier_sample(p, x1, x2);
        if (val - x).abs() < 1e-7 {
            break;
        }
        if val < x {
            lo = p;
        } else {
            hi = p;
        }
        p = (lo + hi) * 0.5;
    }

    bezier_sample(p, y1, y2) as f32
}

/// B(t) = 3(1-t)²t·p1 + 3(1-t)t²·p2 + t³, in Horner form
#[inline]
fn bezier_sample(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    ((a * t + b) * t + c) * t
}

#[inline]
fn bezier_slope(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    (3.0 * a * t + 2.0 * b) * t + c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_builtin() -> Vec<TimingFunction> {
        vec![
            TimingFunction::Linear,
            TimingFunction::EaseIn,
            TimingFunction::EaseOut,
            TimingFunction::EaseInOut,
            TimingFunction::EaseOutCubic,
            TimingFunction::EASE_OUT,
        ]
    }

    #[test]
    fn test_linear() {
        assert_eq!(TimingFunction::Linear.evaluate(0.0), 0.0);
        assert_eq!(TimingFunction::Linear.evaluate(0.5), 0.5);
        assert_eq!(TimingFunction::Linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_ease_in() {
        let result = TimingFunction::EaseIn.evaluate(0.5);
        assert!(result < 0.5); // Should be slower at start
    }

    #[test]
    fn test_ease_out() {
        let result = TimingFunction::EaseOut.evaluate(0.5);
        assert!(result > 0.5); // Should be faster at start
    }

    #[test]
    fn test_endpoints_are_exact() {
        for timing in all_builtin() {
            assert_eq!(timing.evaluate(0.0), 0.0, "{:?}", timing);
            assert_eq!(timing.evaluate(1.0), 1.0, "{:?}", timing);
        }
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(TimingFunction::EASE_OUT.evaluate(-0.5), 0.0);
        assert_eq!(TimingFunction::EASE_OUT.evaluate(1.5), 1.0);
    }

    #[test]
    fn test_css_ease_out_is_monotonic_without_overshoot() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let value = TimingFunction::EASE_OUT.evaluate(i as f32 / 100.0);
            assert!(value >= prev, "not monotonic at step {}", i);
            assert!(value <= 1.0);
            prev = value;
        }
    }

    #[test]
    fn test_css_ease_out_decelerates() {
        let first = TimingFunction::EASE_OUT.evaluate(0.25);
        let last = 1.0 - TimingFunction::EASE_OUT.evaluate(0.75);
        // More distance is covered in the first quarter than the last
        assert!(first > last);
        assert!(TimingFunction::EASE_OUT.evaluate(0.5) > 0.5);
    }

    #[test]
    fn test_ease_out_cubic_value() {
        let value = TimingFunction::EaseOutCubic.evaluate(0.5);
        assert!((value - 0.875).abs() < 1e-6);
    }

    #[test]
    fn test_custom() {
        let step = TimingFunction::custom(|t| if t < 1.0 { 0.0 } else { 1.0 });
        assert_eq!(step.evaluate(0.9), 0.0);
        assert_eq!(step.evaluate(1.0), 1.0);
        assert_eq!(format!("{:?}", step), "Custom");
    }
}
