use std::time::Duration;

use super::{Animatable, Transition};

/// Result of advancing an animation, indicating whether the value changed
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceResult<T> {
    /// Value did not change (animation not running or still in its delay)
    NoChange,
    /// Value changed to a new value
    Changed(T),
}

impl<T> AdvanceResult<T> {
    /// Returns true if the value changed
    pub fn is_changed(&self) -> bool {
        matches!(self, AdvanceResult::Changed(_))
    }
}

/// Where an [`AnimationState`] is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPhase {
    /// Settled on the target value
    Idle,
    /// Moving from the start value toward the target
    Animating,
}

/// A single animated value driven by host frame ticks.
///
/// The state never reads a clock itself: time only moves forward through
/// [`AnimationState::advance`], so the host's frame cadence fully controls it.
pub struct AnimationState<T: Animatable> {
    /// Current interpolated value
    current: T,
    /// Value the animation is heading to
    target: T,
    /// Value when the animation started
    start: T,
    /// Normalized progress from 0.0 to 1.0
    progress: f32,
    /// Time accumulated since the animation started, in milliseconds
    elapsed_ms: f32,
    /// Transition configuration
    transition: Transition,
}

impl<T: Animatable> AnimationState<T> {
    /// Create a settled state holding `initial_value`
    pub fn new(initial_value: T, transition: Transition) -> Self {
        Self {
            current: initial_value.clone(),
            target: initial_value.clone(),
            start: initial_value,
            progress: 1.0, // Start completed
            elapsed_ms: 0.0,
            transition,
        }
    }

    /// Start animating to a new target value.
    ///
    /// A running animation is abandoned and the new one starts from the value
    /// reached so far. Returns false when `new_target` is already the target.
    pub fn animate_to(&mut self, new_target: T) -> bool {
        // Don't restart if we're already animating (or settled) on this target
        if new_target == self.target {
            return false;
        }

        self.start = self.current.clone();
        self.target = new_target;
        self.progress = 0.0;
        self.elapsed_ms = 0.0;

        if self.transition.duration_ms <= 0.0 && self.transition.delay_ms <= 0.0 {
            self.finish();
        }
        true
    }

    /// Advance the animation by `dt` and return whether the value changed
    pub fn advance(&mut self, dt: Duration) -> AdvanceResult<T> {
        if !self.is_animating() {
            return AdvanceResult::NoChange;
        }

        self.elapsed_ms += dt.as_secs_f32() * 1000.0;
        let adjusted_elapsed = self.elapsed_ms - self.transition.delay_ms;

        if adjusted_elapsed <= 0.0 {
            // Still in delay period
            return AdvanceResult::NoChange;
        }

        let t = if self.transition.duration_ms <= 0.0 {
            1.0
        } else {
            (adjusted_elapsed / self.transition.duration_ms).min(1.0)
        };

        let previous = self.current.clone();
        if t >= 1.0 {
            // Land exactly on the target, never a rounding error away from it
            self.finish();
        } else {
            self.progress = t;
            let eased_t = self.transition.timing.evaluate(t);
            self.current = T::lerp(&self.start, &self.target, eased_t);
        }

        if self.current != previous {
            AdvanceResult::Changed(self.current.clone())
        } else {
            AdvanceResult::NoChange
        }
    }

    fn finish(&mut self) {
        self.current = self.target.clone();
        self.start = self.target.clone();
        self.progress = 1.0;
    }

    /// Check if animation is still running
    pub fn is_animating(&self) -> bool {
        self.progress < 1.0
    }

    pub fn phase(&self) -> AnimationPhase {
        if self.is_animating() {
            AnimationPhase::Animating
        } else {
            AnimationPhase::Idle
        }
    }

    /// Get current value
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Get target value
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Normalized time progress of the running animation (1.0 when idle)
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    /// Replace the transition used by future animations
    pub fn set_transition(&mut self, transition: Transition) {
        self.transition = transition;
    }

    /// Set value immediately without animation
    pub fn set_immediate(&mut self, value: T) {
        self.current = value.clone();
        self.target = value.clone();
        self.start = value;
        self.progress = 1.0;
        self.elapsed_ms = 0.0;
    }
}
