//! An animated circular progress ring.
//!
//! A [`ProgressRing`](widgets::ProgressRing) maps a progress value in [0, 1]
//! onto the dash offset of a stroked circle and eases between values whenever
//! the host changes the target percent. The host owns the frame loop: it calls
//! [`Widget::advance_animations`](widgets::Widget::advance_animations) (or a
//! [`FrameScheduler`](frame::FrameScheduler)) once per frame, then paints.
//!
//! ```
//! use std::time::Duration;
//! use progress_ring::prelude::*;
//!
//! let mut ring = progress_ring().size(64.0);
//! while ring.advance_animations(Duration::from_millis(16)) {}
//! assert_eq!(ring.value(), 0.75);
//! ```

pub mod animation;
pub mod config;
pub mod frame;
pub mod geometry;
pub mod invalidation;
pub mod layout;
pub mod renderer;
pub mod transform;
pub mod widgets;

pub mod prelude {
    pub use crate::animation::{TimingFunction, Transition};
    pub use crate::config::{ConfigError, RingConfig};
    pub use crate::frame::FrameScheduler;
    pub use crate::geometry::RingGeometry;
    pub use crate::invalidation::{ChangeFlags, WidgetId};
    pub use crate::layout::{Constraints, Size};
    pub use crate::renderer::{render_to_image, to_svg, PaintContext, RenderError};
    pub use crate::widgets::progress_ring::progress_ring;
    pub use crate::widgets::{Color, ProgressRing, Rect, Widget};
}
