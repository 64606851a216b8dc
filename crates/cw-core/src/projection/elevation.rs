//! Front elevation generation

use glam::{DVec2, DVec3};

use super::{DrawingMode, ProjectionEngine};
use crate::cabinet::BaseCabinet;
use crate::constants::{HOLE_MARKER, QUALIFIER_CLEAR, QUALIFIER_TOE_KICK, QUALIFIER_TOTAL};
use crate::dimension::{DimensionAnnotator, DimensionSide};
use crate::geometry::{Annotation, WireframeGeometry};
use crate::primitive::{
    Axis2, Rect, emit_centered_reference_line, emit_offset_rectangle, emit_rectangle, emit_segment,
};

const TITLE: &str = "FRONT ELEVATION";

pub(super) fn generate(
    engine: &ProjectionEngine,
    cabinet: &BaseCabinet,
    mode: DrawingMode,
) -> WireframeGeometry {
    let show_internals = mode.show_internals();
    let config = engine.config();
    let standards = &config.construction;
    let d = &cabinet.dimensions;
    let t = cabinet.panel_thickness();
    let box_rect = Rect::new(DVec2::ZERO, DVec2::new(d.width, d.height));

    let mut geometry = WireframeGeometry::default();
    let lines = &mut geometry.lines;

    emit_rectangle(lines, box_rect, &engine.structural());

    if cabinet.has_toe_kick() {
        emit_rectangle(
            lines,
            Rect::new(DVec2::new(0.0, -d.toe_kick_height), DVec2::new(d.width, 0.0)),
            &engine.structural(),
        );
    }

    if show_internals {
        emit_segment(lines, DVec2::new(t, 0.0), DVec2::new(t, d.height), &engine.structural());
        emit_segment(
            lines,
            DVec2::new(d.width - t, 0.0),
            DVec2::new(d.width - t, d.height),
            &engine.structural(),
        );

        let interior_center_x = d.width / 2.0;
        emit_centered_reference_line(
            lines,
            DVec2::new(interior_center_x, t),
            cabinet.interior_width(),
            Axis2::Horizontal,
            &engine.structural(),
        );
        // Top stretcher
        emit_centered_reference_line(
            lines,
            DVec2::new(interior_center_x, d.height - t),
            cabinet.interior_width(),
            Axis2::Horizontal,
            &engine.reference(),
        );
        if cabinet.components.adjustable_shelf {
            emit_centered_reference_line(
                lines,
                DVec2::new(interior_center_x, d.height / 2.0),
                cabinet.interior_width(),
                Axis2::Horizontal,
                &engine.reference(),
            );
        }

        for y in hole_ladder(
            d.height,
            t,
            standards.hole_spacing,
            standards.shelf_pin_count,
        ) {
            for x in [t, d.width - t] {
                geometry.annotations.push(Annotation::new(
                    DVec3::new(x, y, 0.0),
                    HOLE_MARKER,
                    config.dimensions.marker_font_size,
                ));
            }
        }
    }

    // The door floats in front of the box in both modes
    emit_offset_rectangle(
        &mut geometry.lines,
        box_rect,
        standards.door_overlay,
        &engine.door(),
    );

    let mut annotator = DimensionAnnotator::new(&config.dimensions, cabinet.unit);
    annotator
        .measure(
            DVec2::new(0.0, d.height),
            DVec2::new(d.width, d.height),
            DimensionSide::Top,
        )
        .measure(
            DVec2::new(d.width, 0.0),
            DVec2::new(d.width, d.height),
            DimensionSide::Right,
        )
        .measure_qualified(
            DVec2::new(d.width, -d.toe_kick_height),
            DVec2::new(d.width, 0.0),
            DimensionSide::Right,
            QUALIFIER_TOE_KICK,
        );
    if cabinet.has_toe_kick() {
        annotator.measure_qualified(
            DVec2::new(d.width, -d.toe_kick_height),
            DVec2::new(d.width, d.height),
            DimensionSide::Right,
            QUALIFIER_TOTAL,
        );
    }
    if show_internals {
        annotator
            .measure_qualified(
                DVec2::new(t, d.height),
                DVec2::new(d.width - t, d.height),
                DimensionSide::Top,
                QUALIFIER_CLEAR,
            )
            .measure_qualified(
                DVec2::new(0.0, t),
                DVec2::new(0.0, d.height - t),
                DimensionSide::Left,
                QUALIFIER_CLEAR,
            );
    }
    geometry.dimensions = annotator.finish();

    let title = engine.title(&geometry, TITLE);
    geometry.annotations.push(title);

    geometry
}

/// Heights of an illustrative shelf-pin ladder centered on mid-height
///
/// Always `count` holes `spacing` apart regardless of cabinet height; holes
/// that would land in the bottom panel or top stretcher are skipped.
fn hole_ladder(height: f64, thickness: f64, spacing: f64, count: u32) -> Vec<f64> {
    let center = height / 2.0;
    let first = center - spacing * (count.saturating_sub(1)) as f64 / 2.0;
    (0..count)
        .map(|i| first + i as f64 * spacing)
        .filter(|y| *y > thickness && *y < height - thickness)
        .collect()
}
