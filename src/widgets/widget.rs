use std::time::Duration;

use crate::invalidation::{ChangeFlags, WidgetId};
use crate::layout::{Constraints, Size};
use crate::renderer::PaintContext;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// 8-bit RGBA channels, rounded and clamped
    pub fn to_rgba8(&self) -> [u8; 4] {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b), channel(self.a)]
    }

    /// `#RRGGBB` form, alpha is dropped
    pub fn to_hex_string(&self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        }
    }
}

pub trait Widget {
    fn id(&self) -> WidgetId;

    /// Advance animations by one host frame of length `dt`.
    /// Returns true if animations are still active and need another frame.
    fn advance_animations(&mut self, dt: Duration) -> bool {
        let _ = dt;
        false
    }

    fn layout(&mut self, constraints: Constraints) -> Size;
    fn paint(&self, ctx: &mut PaintContext);

    fn mark_dirty(&mut self, flags: ChangeFlags);
    fn needs_layout(&self) -> bool;
    fn needs_paint(&self) -> bool;
    fn clear_dirty(&mut self);
}
