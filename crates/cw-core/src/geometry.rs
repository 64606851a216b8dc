//! Drawing geometry: lines, dimension lines, annotations and per-view bags

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use crate::error::{DrawingError, DrawingResult};

/// A coordinate in the cabinet's local linear unit
pub type Point3 = DVec3;

/// Linear unit shared by every coordinate of one cabinet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    #[default]
    Inch,
    Millimeter,
}

impl LengthUnit {
    /// Glyph appended to unqualified dimension labels
    pub fn glyph(&self) -> &'static str {
        match self {
            LengthUnit::Inch => "\"",
            LengthUnit::Millimeter => "mm",
        }
    }
}

/// Line semantics: visible structure vs. hidden/internal/reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    /// Structural or visible edge
    #[default]
    Solid,
    /// Hidden, internal or reference edge
    Dashed,
}

/// A straight segment of a view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line3D {
    pub start: Point3,
    pub end: Point3,
    pub style: LineStyle,
    /// Stroke weight in cabinet units
    pub weight: f64,
    /// CSS color; black when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Line3D {
    /// Length of the segment
    pub fn length(&self) -> f64 {
        (self.end - self.start).length()
    }

    pub fn is_dashed(&self) -> bool {
        self.style == LineStyle::Dashed
    }
}

/// View axis a dimension line runs parallel to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DimensionAxis {
    Horizontal,
    Vertical,
}

/// A measured span with its label, offset away from the measured edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionLine {
    /// Measured point on the geometry
    pub start: Point3,
    /// Measured point on the geometry
    pub end: Point3,
    /// Measured length (always positive)
    pub value: f64,
    pub unit: LengthUnit,
    pub label: String,
    /// Signed perpendicular distance: +y for horizontal spans, +x for vertical spans
    pub offset: f64,
}

impl DimensionLine {
    /// Axis the span runs parallel to
    pub fn axis(&self) -> DimensionAxis {
        let delta = self.end - self.start;
        if delta.x.abs() >= delta.y.abs() {
            DimensionAxis::Horizontal
        } else {
            DimensionAxis::Vertical
        }
    }

    /// Perpendicular displacement from the measured span to the drawn line
    pub fn offset_vector(&self) -> DVec3 {
        match self.axis() {
            DimensionAxis::Horizontal => DVec3::new(0.0, self.offset, 0.0),
            DimensionAxis::Vertical => DVec3::new(self.offset, 0.0, 0.0),
        }
    }

    /// Endpoints of the drawn (offset) dimension line
    pub fn offset_endpoints(&self) -> (Point3, Point3) {
        let shift = self.offset_vector();
        (self.start + shift, self.end + shift)
    }

    /// Midpoint of the drawn line, where the label sits
    pub fn label_position(&self) -> Point3 {
        let (a, b) = self.offset_endpoints();
        (a + b) * 0.5
    }
}

/// Free text placed on a view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub position: Point3,
    pub text: String,
    /// Font size in cabinet units
    pub font_size: f64,
    /// Point the callout refers to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leader: Option<Point3>,
}

impl Annotation {
    pub fn new(position: Point3, text: impl Into<String>, font_size: f64) -> Self {
        Self {
            position,
            text: text.into(),
            font_size,
            leader: None,
        }
    }

    /// Attach a leader pointing at `target`
    pub fn with_leader(mut self, target: Point3) -> Self {
        self.leader = Some(target);
        self
    }
}

/// Axis-aligned 2D extent of a view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds2 {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bounds2 {
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

}

/// Output of one view generator
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WireframeGeometry {
    pub lines: Vec<Line3D>,
    pub dimensions: Vec<DimensionLine>,
    pub annotations: Vec<Annotation>,
}

impl WireframeGeometry {
    /// 2D extent of the drawn lines (None when there are no lines)
    pub fn bounds(&self) -> Option<Bounds2> {
        let mut points = self
            .lines
            .iter()
            .flat_map(|line| [line.start.truncate(), line.end.truncate()]);
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Bounds2 { min, max })
    }

    /// Reject geometry that carries NaN or infinite numbers
    pub fn check_finite(&self) -> DrawingResult<()> {
        for (i, line) in self.lines.iter().enumerate() {
            if !line.start.is_finite() || !line.end.is_finite() || !line.weight.is_finite() {
                return Err(DrawingError::SerializationOverflow(format!(
                    "line {} has a non-finite coordinate or weight",
                    i
                )));
            }
        }
        for (i, dim) in self.dimensions.iter().enumerate() {
            if !dim.start.is_finite()
                || !dim.end.is_finite()
                || !dim.value.is_finite()
                || !dim.offset.is_finite()
            {
                return Err(DrawingError::SerializationOverflow(format!(
                    "dimension {} ('{}') has a non-finite value",
                    i, dim.label
                )));
            }
        }
        for (i, annotation) in self.annotations.iter().enumerate() {
            let leader_ok = annotation.leader.is_none_or(|p| p.is_finite());
            if !annotation.position.is_finite() || !annotation.font_size.is_finite() || !leader_ok
            {
                return Err(DrawingError::SerializationOverflow(format!(
                    "annotation {} ('{}') has a non-finite value",
                    i, annotation.text
                )));
            }
        }
        Ok(())
    }
}
