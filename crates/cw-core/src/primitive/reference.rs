//! Reference lines centered on a feature

use glam::DVec2;

use super::{Stroke, emit_segment};
use crate::geometry::Line3D;

/// View-plane axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis2 {
    Horizontal,
    Vertical,
}

impl Axis2 {
    fn direction(&self) -> DVec2 {
        match self {
            Axis2::Horizontal => DVec2::X,
            Axis2::Vertical => DVec2::Y,
        }
    }
}

/// Emit a line of `length` centered on `center`, parallel to `axis`
pub fn emit_centered_reference_line(
    lines: &mut Vec<Line3D>,
    center: DVec2,
    length: f64,
    axis: Axis2,
    stroke: &Stroke,
) {
    if length <= 0.0 {
        return;
    }
    let half = axis.direction() * (length / 2.0);
    emit_segment(lines, center - half, center + half, stroke);
}
