//! Animated circular progress ring.
//!
//! The ring paints a neutral full-circle track and an accent arc that covers
//! the current animated progress. Whenever the target percent changes the arc
//! eases toward it; the host drives the easing by calling
//! [`Widget::advance_animations`] once per frame.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use progress_ring::prelude::*;
//!
//! let mut ring = progress_ring().percent(0.5).size(48.0).stroke_width(6.0);
//! while ring.advance_animations(Duration::from_millis(16)) {}
//! assert_eq!(ring.value(), 0.5);
//!
//! let mut ctx = PaintContext::new();
//! ring.paint(&mut ctx);
//! assert_eq!(ctx.len(), 2);
//! ```

use std::time::Duration;

use crate::animation::{AnimationState, Transition};
use crate::config::RingConfig;
use crate::geometry::{RingGeometry, START_ANGLE_DEGREES};
use crate::invalidation::{ChangeFlags, WidgetId};
use crate::layout::{Constraints, Size};
use crate::renderer::{Dash, LineCap, PaintContext, Stroke};
use crate::transform::Transform;

use super::widget::{Color, Rect, Widget};
use super::impl_dirty_flags;

/// Circular progress indicator with an eased sweep.
///
/// Dropping a ring needs no cleanup: a [`FrameScheduler`](crate::frame::FrameScheduler)
/// only holds weak handles and discards a dead one on its next tick.
pub struct ProgressRing {
    widget_id: WidgetId,
    /// Configuration as the host last supplied it, before clamping
    requested: RingConfig,
    /// Sanitized configuration currently applied
    config: RingConfig,
    geometry: RingGeometry,
    /// Animated progress, starts at 0 for every new ring
    progress: AnimationState<f32>,
    bounds: Rect,
    dirty_flags: ChangeFlags,
}

impl ProgressRing {
    /// Create a ring and start animating from 0 toward `config.percent`
    pub fn new(config: RingConfig) -> Self {
        let applied = config.sanitized();
        let mut ring = Self {
            widget_id: WidgetId::next(),
            geometry: RingGeometry::new(applied.size, applied.stroke_width),
            progress: AnimationState::new(0.0, applied.transition.clone()),
            requested: config.clone(),
            config: RingConfig {
                percent: 0.0,
                ..applied
            },
            bounds: Rect::default(),
            dirty_flags: ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT,
        };
        ring.set_config(config);
        ring
    }

    /// Apply a new configuration from the host.
    ///
    /// Geometry is recomputed when size or stroke change; a changed percent
    /// redirects the animation from wherever the arc currently is.
    /// Clamping always starts from the values the host asked for, so a
    /// stroke clamped against a small size recovers once the size grows.
    pub fn set_config(&mut self, config: RingConfig) {
        self.requested = config.clone();
        let config = config.sanitized();

        if config.size != self.config.size || config.stroke_width != self.config.stroke_width {
            self.geometry = RingGeometry::new(config.size, config.stroke_width);
            self.mark_dirty(ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT);
        }

        if config.track_color != self.config.track_color
            || config.indicator_color != self.config.indicator_color
        {
            self.mark_dirty(ChangeFlags::NEEDS_PAINT);
        }

        self.progress.set_transition(config.transition.clone());
        if self.progress.animate_to(config.percent) {
            log::debug!(
                "Ring {:?}: animating {} -> {}",
                self.widget_id,
                self.progress.current(),
                config.percent
            );
            self.mark_dirty(ChangeFlags::NEEDS_PAINT);
        }

        self.config = config;
    }

    /// Change only the target percent
    pub fn set_percent(&mut self, percent: f32) {
        let config = RingConfig {
            percent,
            ..self.requested.clone()
        };
        self.set_config(config);
    }

    pub fn percent(mut self, percent: f32) -> Self {
        self.set_percent(percent);
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        let config = self.requested.clone().size(size);
        self.set_config(config);
        self
    }

    pub fn stroke_width(mut self, stroke_width: f32) -> Self {
        let config = self.requested.clone().stroke_width(stroke_width);
        self.set_config(config);
        self
    }

    pub fn track_color(mut self, color: Color) -> Self {
        let config = self.requested.clone().track_color(color);
        self.set_config(config);
        self
    }

    pub fn indicator_color(mut self, color: Color) -> Self {
        let config = self.requested.clone().indicator_color(color);
        self.set_config(config);
        self
    }

    /// Set the transition used for future percent changes
    pub fn transition(mut self, transition: Transition) -> Self {
        let config = self.requested.clone().transition(transition);
        self.set_config(config);
        self
    }

    /// Jump to `percent` without animating
    pub fn set_percent_immediate(&mut self, percent: f32) {
        self.set_percent(percent);
        self.progress.set_immediate(self.config.percent);
        self.mark_dirty(ChangeFlags::NEEDS_PAINT);
    }

    /// Configuration in effect after clamping
    pub fn config(&self) -> &RingConfig {
        &self.config
    }

    /// Configuration as supplied by the host
    pub fn requested_config(&self) -> &RingConfig {
        &self.requested
    }

    pub fn geometry(&self) -> &RingGeometry {
        &self.geometry
    }

    /// Target progress the ring is heading to
    pub fn target(&self) -> f32 {
        *self.progress.target()
    }

    /// Current animated progress
    pub fn value(&self) -> f32 {
        *self.progress.current()
    }

    /// Dash offset of the indicator for the current animated progress
    pub fn dash_offset(&self) -> f32 {
        self.geometry.dash_offset(self.value())
    }

    pub fn is_animating(&self) -> bool {
        self.progress.is_animating()
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }
}

impl Widget for ProgressRing {
    fn id(&self) -> WidgetId {
        self.widget_id
    }

    fn advance_animations(&mut self, dt: Duration) -> bool {
        if self.progress.advance(dt).is_changed() {
            self.mark_dirty(ChangeFlags::NEEDS_PAINT);
        }
        self.progress.is_animating()
    }

    fn layout(&mut self, constraints: Constraints) -> Size {
        let size = constraints.constrain(Size::new(self.config.size, self.config.size));
        self.bounds = Rect::from_size(size);
        self.dirty_flags.remove(ChangeFlags::NEEDS_LAYOUT);
        size
    }

    fn paint(&self, ctx: &mut PaintContext) {
        let (cx, cy) = self.geometry.center();
        let radius = self.geometry.radius();
        let width = self.geometry.stroke_width();

        // Start the stroke at 12 o'clock instead of 3 o'clock
        ctx.push_transform(Transform::rotate_degrees_about(START_ANGLE_DEGREES, cx, cy));

        ctx.draw_stroke_circle(
            (cx, cy),
            radius,
            Stroke::new(width, self.config.track_color).cap(LineCap::Round),
        );

        let value = self.value();
        if value > 0.0 {
            ctx.draw_stroke_circle(
                (cx, cy),
                radius,
                Stroke::new(width, self.config.indicator_color)
                    .cap(LineCap::Round)
                    .dash(Dash::new(
                        self.geometry.dash_array(),
                        self.geometry.dash_offset(value),
                    )),
            );
        }

        ctx.pop_transform();
    }

    impl_dirty_flags!();
}

impl Default for ProgressRing {
    fn default() -> Self {
        Self::new(RingConfig::default())
    }
}

/// Create a progress ring with the default configuration
pub fn progress_ring() -> ProgressRing {
    ProgressRing::default()
}
