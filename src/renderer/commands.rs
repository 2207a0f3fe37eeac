//! Draw command definitions.

use crate::transform::Transform;
use crate::widgets::Color;

/// How the ends of an open stroke are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl LineCap {
    pub fn as_svg(&self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}

/// A single-dash pattern: `length` drawn, `length` skipped, shifted by `offset`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dash {
    pub length: f32,
    pub offset: f32,
}

impl Dash {
    pub fn new(length: f32, offset: f32) -> Self {
        Self { length, offset }
    }
}

/// Stroke style for outlined shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Stroke width in logical pixels
    pub width: f32,
    pub color: Color,
    pub cap: LineCap,
    pub dash: Option<Dash>,
}

impl Stroke {
    pub fn new(width: f32, color: Color) -> Self {
        Self {
            width,
            color,
            cap: LineCap::default(),
            dash: None,
        }
    }

    pub fn cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    pub fn dash(mut self, dash: Dash) -> Self {
        self.dash = Some(dash);
        self
    }
}

/// A single draw operation in local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Stroke the outline of a circle.
    ///
    /// The outline starts at 3 o'clock and runs clockwise, which is where a
    /// dash pattern begins.
    StrokeCircle {
        /// Center point in local coordinates
        center: (f32, f32),
        /// Radius of the stroke's center line
        radius: f32,
        stroke: Stroke,
    },
}

/// A draw command together with the transform active when it was recorded
#[derive(Debug, Clone, PartialEq)]
pub struct PaintEntry {
    pub command: DrawCommand,
    pub transform: Transform,
}
