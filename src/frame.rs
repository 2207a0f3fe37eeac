//! Host-driven frame callbacks.
//!
//! The ring never owns a timer. A host render loop keeps a [`FrameScheduler`],
//! registers widgets that have started animating, and calls
//! [`FrameScheduler::tick`] once per frame with the elapsed time.
//!
//! The scheduler only keeps [`Weak`] handles. Dropping a widget mid-animation
//! therefore detaches its callback: the next tick finds the handle dead and
//! discards it instead of touching a destroyed instance.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use std::time::Duration;
//! use progress_ring::prelude::*;
//!
//! let ring = Rc::new(RefCell::new(progress_ring()));
//! let mut scheduler = FrameScheduler::new();
//! scheduler.request_frames(&ring);
//!
//! while scheduler.tick(Duration::from_millis(16)) > 0 {}
//! assert_eq!(ring.borrow().value(), 0.75);
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::invalidation::WidgetId;
use crate::widgets::Widget;

struct FrameCallback {
    widget_id: WidgetId,
    widget: Weak<RefCell<dyn Widget>>,
}

/// Registry of widgets that want a callback on the next frames
#[derive(Default)]
pub struct FrameScheduler {
    callbacks: Vec<FrameCallback>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `widget` for per-frame advancement.
    ///
    /// A widget is registered at most once; returns false if it already was.
    pub fn request_frames<W: Widget + 'static>(&mut self, widget: &Rc<RefCell<W>>) -> bool {
        let widget_id = widget.borrow().id();
        if self.is_scheduled(widget_id) {
            return false;
        }

        let weak: Weak<RefCell<W>> = Rc::downgrade(widget);
        self.callbacks.push(FrameCallback {
            widget_id,
            widget: weak,
        });
        true
    }

    /// Detach a pending callback. Returns false if none was registered.
    pub fn cancel(&mut self, widget_id: WidgetId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|cb| cb.widget_id != widget_id);
        before != self.callbacks.len()
    }

    pub fn is_scheduled(&self, widget_id: WidgetId) -> bool {
        self.callbacks.iter().any(|cb| cb.widget_id == widget_id)
    }

    /// Number of widgets waiting for frames
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Advance every registered widget by `dt`.
    ///
    /// Widgets that finished animating or were dropped are unregistered.
    /// Returns how many widgets still want frames.
    pub fn tick(&mut self, dt: Duration) -> usize {
        self.callbacks.retain(|cb| {
            let Some(widget) = cb.widget.upgrade() else {
                log::debug!("Dropping frame callback of destroyed widget {:?}", cb.widget_id);
                return false;
            };

            let Ok(mut widget) = widget.try_borrow_mut() else {
                // Borrowed by the host right now, try again next frame
                log::warn!("Widget {:?} busy during frame tick", cb.widget_id);
                return true;
            };

            widget.advance_animations(dt)
        });
        self.callbacks.len()
    }
}
