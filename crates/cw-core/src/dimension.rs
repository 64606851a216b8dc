//! Dimension Annotator
//!
//! Collects the spans a view wants documented and resolves them into
//! [`DimensionLine`]s. Dimensions on the same side of the geometry are
//! nested by magnitude: the smallest span sits nearest the part and every
//! enclosing span is pushed one tier further out, so labels never collide.

use glam::{DVec2, DVec3};

use crate::config::DimensionStyle;
use crate::constants::{DIMENSION_PRECISION, LENGTH_EPSILON};
use crate::geometry::{DimensionAxis, DimensionLine, LengthUnit};

/// Side of the geometry a dimension is placed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimensionSide {
    Bottom,
    Top,
    Left,
    Right,
}

impl DimensionSide {
    const ALL: [DimensionSide; 4] = [
        DimensionSide::Bottom,
        DimensionSide::Top,
        DimensionSide::Left,
        DimensionSide::Right,
    ];

    /// Axis a span on this side runs parallel to
    pub fn axis(&self) -> DimensionAxis {
        match self {
            DimensionSide::Bottom | DimensionSide::Top => DimensionAxis::Horizontal,
            DimensionSide::Left | DimensionSide::Right => DimensionAxis::Vertical,
        }
    }

    /// Sign of the offset pointing away from the geometry
    pub fn sign(&self) -> f64 {
        match self {
            DimensionSide::Top | DimensionSide::Right => 1.0,
            DimensionSide::Bottom | DimensionSide::Left => -1.0,
        }
    }
}

#[derive(Debug, Clone)]
struct DimensionRequest {
    start: DVec2,
    end: DVec2,
    side: DimensionSide,
    qualifier: Option<&'static str>,
}

impl DimensionRequest {
    fn value(&self) -> f64 {
        (self.end - self.start).length()
    }

    fn is_parallel_to_side(&self) -> bool {
        let delta = self.end - self.start;
        match self.side.axis() {
            DimensionAxis::Horizontal => delta.y.abs() <= LENGTH_EPSILON,
            DimensionAxis::Vertical => delta.x.abs() <= LENGTH_EPSILON,
        }
    }
}

/// Per-view dimension collector
pub struct DimensionAnnotator<'a> {
    style: &'a DimensionStyle,
    unit: LengthUnit,
    requests: Vec<DimensionRequest>,
}

impl<'a> DimensionAnnotator<'a> {
    pub fn new(style: &'a DimensionStyle, unit: LengthUnit) -> Self {
        Self {
            style,
            unit,
            requests: Vec::new(),
        }
    }

    /// Request a span labeled with its value and unit glyph
    pub fn measure(&mut self, start: DVec2, end: DVec2, side: DimensionSide) -> &mut Self {
        self.push(start, end, side, None)
    }

    /// Request a span labeled with its value and a qualifier (e.g. `TOTAL`)
    pub fn measure_qualified(
        &mut self,
        start: DVec2,
        end: DVec2,
        side: DimensionSide,
        qualifier: &'static str,
    ) -> &mut Self {
        self.push(start, end, side, Some(qualifier))
    }

    fn push(
        &mut self,
        start: DVec2,
        end: DVec2,
        side: DimensionSide,
        qualifier: Option<&'static str>,
    ) -> &mut Self {
        self.requests.push(DimensionRequest {
            start,
            end,
            side,
            qualifier,
        });
        self
    }

    /// Resolve all requests into offset, labeled dimension lines
    ///
    /// Zero-length spans (absent features) and spans that are not parallel
    /// to their side's axis are omitted.
    pub fn finish(self) -> Vec<DimensionLine> {
        let mut dimensions = Vec::with_capacity(self.requests.len());

        for side in DimensionSide::ALL {
            let mut tier: Vec<&DimensionRequest> = self
                .requests
                .iter()
                .filter(|r| r.side == side)
                .filter(|r| {
                    if r.value() <= LENGTH_EPSILON {
                        tracing::debug!(?side, qualifier = ?r.qualifier, "omitting zero-length dimension");
                        return false;
                    }
                    if !r.is_parallel_to_side() {
                        tracing::debug!(?side, start = ?r.start, end = ?r.end, "omitting dimension not parallel to its side");
                        return false;
                    }
                    true
                })
                .collect();
            tier.sort_by(|a, b| a.value().total_cmp(&b.value()));

            for (i, request) in tier.into_iter().enumerate() {
                let value = request.value();
                let distance = self.style.first_offset + i as f64 * self.style.tier_spacing;
                dimensions.push(DimensionLine {
                    start: DVec3::new(request.start.x, request.start.y, 0.0),
                    end: DVec3::new(request.end.x, request.end.y, 0.0),
                    value,
                    unit: self.unit,
                    label: format_dimension_label(value, self.unit, request.qualifier),
                    offset: side.sign() * distance,
                });
            }
        }

        dimensions
    }
}

/// Format a dimension label: fixed precision plus unit glyph or qualifier
///
/// `24.0` inches → `24.00"`; with qualifier `TOTAL` → `24.00 TOTAL`.
pub fn format_dimension_label(value: f64, unit: LengthUnit, qualifier: Option<&str>) -> String {
    match qualifier {
        Some(q) => format!("{:.*} {}", DIMENSION_PRECISION, value, q),
        None => format!("{:.*}{}", DIMENSION_PRECISION, value, unit.glyph()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> DimensionStyle {
        DimensionStyle {
            first_offset: 2.0,
            tier_spacing: 1.5,
            ..Default::default()
        }
    }

    #[test]
    fn test_label_format() {
        assert_eq!(format_dimension_label(24.0, LengthUnit::Inch, None), "24.00\"");
        assert_eq!(
            format_dimension_label(39.0, LengthUnit::Inch, Some("TOTAL")),
            "39.00 TOTAL"
        );
        assert_eq!(
            format_dimension_label(609.6, LengthUnit::Millimeter, None),
            "609.60mm"
        );
        assert_eq!(format_dimension_label(1.0 / 3.0, LengthUnit::Inch, None), "0.33\"");
    }

    #[test]
    fn test_nested_offsets_ordered_by_magnitude() {
        let style = style();
        let mut annotator = DimensionAnnotator::new(&style, LengthUnit::Inch);
        annotator
            .measure_qualified(
                DVec2::new(24.0, -4.5),
                DVec2::new(24.0, 34.5),
                DimensionSide::Right,
                "TOTAL",
            )
            .measure(DVec2::new(24.0, 0.0), DVec2::new(24.0, 34.5), DimensionSide::Right);
        let dims = annotator.finish();

        assert_eq!(dims.len(), 2);
        assert_eq!(dims[0].label, "34.50\"");
        assert_eq!(dims[0].offset, 2.0);
        assert_eq!(dims[1].label, "39.00 TOTAL");
        assert_eq!(dims[1].offset, 3.5);
    }

    #[test]
    fn test_offsets_point_away_from_geometry() {
        let style = style();
        let mut annotator = DimensionAnnotator::new(&style, LengthUnit::Inch);
        annotator
            .measure(DVec2::ZERO, DVec2::new(24.0, 0.0), DimensionSide::Bottom)
            .measure(DVec2::ZERO, DVec2::new(0.0, 10.0), DimensionSide::Left);
        let dims = annotator.finish();
        assert!(dims.iter().all(|d| d.offset < 0.0));
        assert_eq!(dims[0].axis(), DimensionAxis::Horizontal);
        assert_eq!(dims[1].axis(), DimensionAxis::Vertical);
    }

    #[test]
    fn test_omits_missing_targets() {
        let style = style();
        let mut annotator = DimensionAnnotator::new(&style, LengthUnit::Inch);
        annotator
            .measure_qualified(DVec2::ZERO, DVec2::ZERO, DimensionSide::Right, "TOE KICK")
            .measure(DVec2::ZERO, DVec2::new(3.0, 4.0), DimensionSide::Bottom);
        assert!(annotator.finish().is_empty());
    }

    #[test]
    fn test_values_always_positive() {
        let style = style();
        let mut annotator = DimensionAnnotator::new(&style, LengthUnit::Inch);
        annotator.measure(DVec2::new(24.0, 0.0), DVec2::ZERO, DimensionSide::Top);
        let dims = annotator.finish();
        assert_eq!(dims[0].value, 24.0);
        assert_eq!(dims[0].offset, 2.0);
    }
}
