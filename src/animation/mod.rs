mod animatable;
mod state;
mod timing;

pub use animatable::Animatable;
pub use state::{AdvanceResult, AnimationPhase, AnimationState};
pub use timing::TimingFunction;

/// Configuration for how a value should animate when its target changes
#[derive(Clone, Debug)]
pub struct Transition {
    /// Duration of the animation in milliseconds
    pub duration_ms: f32,
    /// Timing function controlling the animation curve
    pub timing: TimingFunction,
    /// Delay before animation starts in milliseconds
    pub delay_ms: f32,
}

impl Transition {
    /// Duration used by the progress ring when none is given
    pub const DEFAULT_DURATION_MS: f32 = 500.0;

    /// Create a new transition with the given duration and timing function
    pub fn new(duration_ms: f32, timing: TimingFunction) -> Self {
        Self {
            duration_ms,
            timing,
            delay_ms: 0.0,
        }
    }

    /// Ease-out transition over the given duration
    pub fn ease_out(duration_ms: f32) -> Self {
        Self::new(duration_ms, TimingFunction::EASE_OUT)
    }

    /// Set the delay before the animation starts
    pub fn delay(mut self, delay_ms: f32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Set the duration of the animation
    pub fn duration(mut self, duration_ms: f32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Set the timing function
    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }
}

impl Default for Transition {
    /// Half-second ease-out, matching the ring's sweep animation
    fn default() -> Self {
        Self::ease_out(Self::DEFAULT_DURATION_MS)
    }
}
