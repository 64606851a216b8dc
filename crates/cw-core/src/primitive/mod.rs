//! Primitive line emitters shared by every view generator
//!
//! Emits [`Line3D`] segments for basic drawing shapes:
//! - Rectangle and outward/inward offset rectangle
//! - Centered reference line along a view axis
//! - 12-edge box through an arbitrary projection (isometric)

mod box_edges;
mod rectangle;
mod reference;

pub use box_edges::emit_box_edges;
pub use rectangle::{Rect, emit_offset_rectangle, emit_rectangle};
pub use reference::{Axis2, emit_centered_reference_line};

use glam::{DVec2, DVec3};

use crate::geometry::{Line3D, LineStyle};

/// Style, weight and color applied to every emitted segment
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub style: LineStyle,
    pub weight: f64,
    pub color: Option<String>,
}

impl Stroke {
    pub fn solid(weight: f64) -> Self {
        Self {
            style: LineStyle::Solid,
            weight,
            color: None,
        }
    }

    pub fn dashed(weight: f64) -> Self {
        Self {
            style: LineStyle::Dashed,
            weight,
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    fn line(&self, start: DVec3, end: DVec3) -> Line3D {
        Line3D {
            start,
            end,
            style: self.style,
            weight: self.weight,
            color: self.color.clone(),
        }
    }
}

/// Emit one 2D segment on the view plane (z = 0)
pub fn emit_segment(lines: &mut Vec<Line3D>, start: DVec2, end: DVec2, stroke: &Stroke) {
    lines.push(stroke.line(start.extend(0.0), end.extend(0.0)));
}
