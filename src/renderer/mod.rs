//! Paint recording and output backends.
//!
//! Widgets record [`DrawCommand`]s into a [`PaintContext`]; the context can
//! then be serialized to SVG ([`svg`]) and rasterized ([`raster`]).

pub mod commands;
pub mod raster;
pub mod svg;

pub use commands::{Dash, DrawCommand, LineCap, PaintEntry, Stroke};
pub use raster::{rasterize, render_to_image, save_png, RenderError};
pub use svg::to_svg;

use crate::transform::Transform;

/// Collects the draw commands of one frame
#[derive(Debug, Default)]
pub struct PaintContext {
    entries: Vec<PaintEntry>,
    /// Transform stack for composing parent→child transformations
    transform_stack: Vec<Transform>,
}

impl PaintContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with pre-allocated capacity to avoid per-frame allocations
    pub fn with_capacity(entries: usize) -> Self {
        Self {
            entries: Vec::with_capacity(entries),
            transform_stack: Vec::with_capacity(4),
        }
    }

    /// Clear all buffers for reuse, preserving allocated capacity
    pub fn clear(&mut self) {
        self.entries.clear();
        self.transform_stack.clear();
    }

    pub fn draw_stroke_circle(&mut self, center: (f32, f32), radius: f32, stroke: Stroke) {
        self.push(DrawCommand::StrokeCircle {
            center,
            radius,
            stroke,
        });
    }

    fn push(&mut self, command: DrawCommand) {
        let transform = self.current_transform();
        self.entries.push(PaintEntry { command, transform });
    }

    /// Push a transform, composed with the current one
    pub fn push_transform(&mut self, transform: Transform) {
        let composed = self.current_transform().then(&transform);
        self.transform_stack.push(composed);
    }

    pub fn pop_transform(&mut self) {
        self.transform_stack.pop();
    }

    /// Get the current composed transform
    pub fn current_transform(&self) -> Transform {
        self.transform_stack
            .last()
            .copied()
            .unwrap_or(Transform::IDENTITY)
    }

    pub fn entries(&self) -> &[PaintEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
