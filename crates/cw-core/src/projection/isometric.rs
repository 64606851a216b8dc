//! Isometric (axonometric) view generation

use glam::{DVec2, DVec3};

use super::{DrawingMode, ProjectionEngine};
use crate::cabinet::BaseCabinet;
use crate::constants::QUALIFIER_CLEAR;
use crate::dimension::{DimensionAnnotator, DimensionSide, format_dimension_label};
use crate::geometry::{Annotation, Line3D, WireframeGeometry};
use crate::primitive::{Stroke, emit_box_edges};

const TITLE: &str = "ISOMETRIC";

/// Fixed 30° axonometric projection, screen-down convention
///
/// `project(x, y, z) = (x·cos30 − y·cos30, x·sin30 + y·sin30 − z)` with
/// x = width, y = depth, z = height. Orthographic: parallel edges stay
/// parallel and every principal axis keeps a uniform scale.
pub fn project_isometric(p: DVec3) -> DVec2 {
    let (sin30, cos30) = 30f64.to_radians().sin_cos();
    DVec2::new(
        p.x * cos30 - p.y * cos30,
        p.x * sin30 + p.y * sin30 - p.z,
    )
}

/// Projected point in the drawing's up-positive frame
fn to_view(p: DVec3) -> DVec3 {
    let screen = project_isometric(p);
    DVec3::new(screen.x, -screen.y, 0.0)
}

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

    emit_box_edges(
        lines,
        DVec3::ZERO,
        DVec3::new(d.width, d.depth, d.height),
        to_view,
        &engine.structural(),
    );

    if show_internals {
        let hidden = engine.reference();
        let back_face = d.depth - standards.back_panel_setback;
        let back_front = back_face - standards.back_panel_thickness;

        let mut part = |min: DVec3, max: DVec3| emit_part(lines, min, max, &hidden);

        // Side panels
        part(DVec3::ZERO, DVec3::new(t, d.depth, d.height));
        part(
            DVec3::new(d.width - t, 0.0, 0.0),
            DVec3::new(d.width, d.depth, d.height),
        );
        // Bottom panel, up to the back panel
        part(DVec3::new(t, 0.0, 0.0), DVec3::new(d.width - t, back_front, t));
        // Back panel
        part(
            DVec3::new(t, back_front, 0.0),
            DVec3::new(d.width - t, back_face, d.height),
        );
        if cabinet.components.adjustable_shelf {
            let half = cabinet.material.thickness / 2.0;
            part(
                DVec3::new(t, standards.shelf_front_setback, d.height / 2.0 - half),
                DVec3::new(d.width - t, back_front, d.height / 2.0 + half),
            );
        }
        if cabinet.has_toe_kick() {
            part(
                DVec3::new(0.0, standards.toe_kick_setback, -d.toe_kick_height),
                DVec3::new(d.width, d.depth, 0.0),
            );
        }
    }

    // Leftmost vertical edge in the projection is the back-left corner
    let left_edge = |z: f64| to_view(DVec3::new(0.0, d.depth, z)).truncate();
    let mut annotator = DimensionAnnotator::new(&config.dimensions, cabinet.unit);
    annotator.measure(left_edge(0.0), left_edge(d.height), DimensionSide::Left);
    if show_internals {
        annotator.measure_qualified(
            left_edge(t),
            left_edge(d.height - t),
            DimensionSide::Left,
            QUALIFIER_CLEAR,
        );
    }
    geometry.dimensions = annotator.finish();

    // Width and depth edges are never parallel to a view axis: use callouts
    let callout_drop = DVec3::new(0.0, -config.dimensions.first_offset, 0.0);
    let font_size = config.dimensions.callout_font_size;
    for (edge_mid, value, qualifier) in [
        (DVec3::new(d.width / 2.0, 0.0, 0.0), d.width, "W"),
        (DVec3::new(d.width, d.depth / 2.0, 0.0), d.depth, "D"),
    ] {
        let target = to_view(edge_mid);
        geometry.annotations.push(
            Annotation::new(
                target + callout_drop,
                format_dimension_label(value, cabinet.unit, Some(qualifier)),
                font_size,
            )
            .with_leader(target),
        );
    }

    let title = engine.title(&geometry, TITLE);
    geometry.annotations.push(title);

    geometry
}

/// Emit one part's box, skipping parts with no volume
fn emit_part(lines: &mut Vec<Line3D>, min: DVec3, max: DVec3, stroke: &Stroke) {
    let size = max - min;
    if size.min_element() <= 0.0 {
        tracing::debug!(?min, ?max, "skipping degenerate part");
        return;
    }
    emit_box_edges(lines, min, max, to_view, stroke);
}
