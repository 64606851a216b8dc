//! Top (plan) view generation

use glam::{DVec2, DVec3};

use super::{DrawingMode, ProjectionEngine, ShelfIndicator};
use crate::cabinet::BaseCabinet;
use crate::constants::{HOLE_MARKER, QUALIFIER_CLEAR};
use crate::dimension::{DimensionAnnotator, DimensionSide};
use crate::geometry::{Annotation, WireframeGeometry};
use crate::primitive::{Axis2, Rect, emit_centered_reference_line, emit_rectangle, emit_segment};

const TITLE: &str = "PLAN VIEW";

const SHELF_INDICATOR: ShelfIndicator = ShelfIndicator::PartialFrontEdge;

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

    let mut geometry = WireframeGeometry::default();
    let lines = &mut geometry.lines;

    emit_rectangle(
        lines,
        Rect::new(DVec2::ZERO, DVec2::new(d.width, d.depth)),
        &engine.structural(),
    );

    let back_y = d.depth - standards.back_panel_setback;

    if show_internals {
        // Inner faces of the side panels
        emit_segment(lines, DVec2::new(t, 0.0), DVec2::new(t, d.depth), &engine.structural());
        emit_segment(
            lines,
            DVec2::new(d.width - t, 0.0),
            DVec2::new(d.width - t, d.depth),
            &engine.structural(),
        );

        if back_y > 0.0 {
            emit_segment(
                lines,
                DVec2::new(t, back_y),
                DVec2::new(d.width - t, back_y),
                &engine.reference(),
            );
        }

        if cabinet.components.adjustable_shelf && standards.shelf_front_setback < back_y {
            match SHELF_INDICATOR {
                ShelfIndicator::PartialFrontEdge => emit_centered_reference_line(
                    lines,
                    DVec2::new(d.width / 2.0, standards.shelf_front_setback),
                    cabinet.interior_width() / 2.0,
                    Axis2::Horizontal,
                    &engine.reference(),
                ),
            }
        }

        // One shelf-pin hole near each corner of the opening
        let front_pin = standards.shelf_pin_inset;
        let back_pin = back_y - standards.shelf_pin_inset;
        for y in [front_pin, back_pin] {
            if y <= 0.0 || y >= d.depth {
                continue;
            }
            for x in [t, d.width - t] {
                geometry.annotations.push(Annotation::new(
                    DVec3::new(x, y, 0.0),
                    HOLE_MARKER,
                    config.dimensions.marker_font_size,
                ));
            }
        }
    }

    let mut annotator = DimensionAnnotator::new(&config.dimensions, cabinet.unit);
    annotator
        .measure(DVec2::ZERO, DVec2::new(d.width, 0.0), DimensionSide::Bottom)
        .measure(
            DVec2::new(d.width, 0.0),
            DVec2::new(d.width, d.depth),
            DimensionSide::Right,
        );
    if show_internals {
        annotator.measure_qualified(
            DVec2::new(t, 0.0),
            DVec2::new(d.width - t, 0.0),
            DimensionSide::Bottom,
            QUALIFIER_CLEAR,
        );
    }
    geometry.dimensions = annotator.finish();

    let title = engine.title(&geometry, TITLE);
    geometry.annotations.push(title);

    geometry
}
