//! Axis-aligned rectangle emission

use glam::DVec2;

use super::{Stroke, emit_segment};
use crate::geometry::Line3D;

/// Axis-aligned rectangle on the view plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: DVec2,
    pub max: DVec2,
}

impl Rect {
    /// Rectangle spanning two corners (in any order)
    pub fn new(a: DVec2, b: DVec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Rectangle grown by `offset` on every side (shrunk when negative)
    pub fn offset(&self, offset: f64) -> Self {
        Self {
            min: self.min - DVec2::splat(offset),
            max: self.max + DVec2::splat(offset),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// Emit the four edges of `rect`: bottom, right, top, left
///
/// A rectangle with zero width or height emits nothing; callers omit absent
/// features instead of drawing degenerate outlines.
pub fn emit_rectangle(lines: &mut Vec<Line3D>, rect: Rect, stroke: &Stroke) {
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return;
    }

    let bl = rect.min;
    let br = DVec2::new(rect.max.x, rect.min.y);
    let tr = rect.max;
    let tl = DVec2::new(rect.min.x, rect.max.y);

    emit_segment(lines, bl, br, stroke);
    emit_segment(lines, br, tr, stroke);
    emit_segment(lines, tr, tl, stroke);
    emit_segment(lines, tl, bl, stroke);
}

/// Emit `rect` grown outward by `offset` on every side
pub fn emit_offset_rectangle(lines: &mut Vec<Line3D>, rect: Rect, offset: f64, stroke: &Stroke) {
    emit_rectangle(lines, rect.offset(offset), stroke);
}
