pub mod progress_ring;
pub mod widget;

/// Macro to implement common dirty flag methods for simple widgets.
macro_rules! impl_dirty_flags {
    () => {
        fn mark_dirty(&mut self, flags: crate::invalidation::ChangeFlags) {
            self.dirty_flags |= flags;
        }
        fn needs_layout(&self) -> bool {
            self.dirty_flags
                .contains(crate::invalidation::ChangeFlags::NEEDS_LAYOUT)
        }
        fn needs_paint(&self) -> bool {
            self.dirty_flags
                .contains(crate::invalidation::ChangeFlags::NEEDS_PAINT)
        }
        fn clear_dirty(&mut self) {
            self.dirty_flags = crate::invalidation::ChangeFlags::empty();
        }
    };
}
pub(crate) use impl_dirty_flags;

pub use progress_ring::{progress_ring, ProgressRing};
pub use widget::{Color, Rect, Widget};
