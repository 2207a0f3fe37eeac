use std::sync::atomic::{AtomicU64, Ordering};

use bitflags::bitflags;

bitflags! {
    /// Flags indicating what aspects of rendering need to be updated
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ChangeFlags: u8 {
        /// Widget needs layout recalculation (size may change)
        const NEEDS_LAYOUT = 0b01;
        /// Widget needs repainting (visual appearance changed)
        const NEEDS_PAINT  = 0b10;
    }
}

/// Unique identifier for a widget instance
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct WidgetId(u64);

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);

impl WidgetId {
    /// Generate a new unique widget ID
    pub fn next() -> Self {
        WidgetId(NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_ids_are_unique() {
        let a = WidgetId::next();
        let b = WidgetId::next();
        assert_ne!(a, b);
    }

    #[test]
    fn test_change_flags_combine() {
        let mut flags = ChangeFlags::empty();
        flags |= ChangeFlags::NEEDS_PAINT;
        assert!(flags.contains(ChangeFlags::NEEDS_PAINT));
        assert!(!flags.contains(ChangeFlags::NEEDS_LAYOUT));
        flags |= ChangeFlags::NEEDS_LAYOUT;
        assert_eq!(flags, ChangeFlags::all());
    }
}
