//! End-to-end tests: cabinet → views → drawing → SVG
//!
//! Covers the drawing guarantees hosts rely on: determinism, envelope
//! sizes, containment of construction detail, toe-kick handling, isometric
//! congruence and the shape of exported documents.

use approx::assert_relative_eq;
use cw_core::{
    BaseCabinet, CabinetComponents, CabinetDimensions, CabinetMaterial, DrawingError, LengthUnit,
    LineStyle, ProjectionEngine, ViewKind, WireframeGeometry, export_drawing_view, export_to_svg,
    generate_cabinet_drawing, generate_elevation_view, generate_isometric_view, generate_top_view,
    project_isometric,
};
use glam::{DVec2, DVec3};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("cw_core=debug")
        .with_test_writer()
        .try_init();
}

/// 24 x 34.5 x 24 base cabinet with a 4.5" toe kick and an adjustable shelf
fn scenario_cabinet() -> BaseCabinet {
    BaseCabinet {
        dimensions: CabinetDimensions {
            width: 24.0,
            height: 34.5,
            depth: 24.0,
            thickness: 0.75,
            toe_kick_height: 4.5,
            total_height: 39.0,
        },
        material: CabinetMaterial {
            thickness: 0.75,
            name: Some("Maple ply".to_string()),
        },
        components: CabinetComponents {
            adjustable_shelf: true,
        },
        unit: LengthUnit::Inch,
    }
}

fn bounds_of<'a>(lines: impl Iterator<Item = &'a cw_core::Line3D>) -> (DVec2, DVec2) {
    lines
        .flat_map(|l| [l.start.truncate(), l.end.truncate()])
        .fold(
            (DVec2::splat(f64::MAX), DVec2::splat(f64::MIN)),
            |(min, max), p| (min.min(p), max.max(p)),
        )
}

fn count(svg: &str, needle: &str) -> usize {
    svg.matches(needle).count()
}

mod properties {
    use super::*;

    #[test]
    fn determinism() {
        init_tracing();
        let cabinet = scenario_cabinet();
        for show_internals in [false, true] {
            let a = generate_cabinet_drawing(&cabinet, show_internals).unwrap();
            let b = generate_cabinet_drawing(&cabinet, show_internals).unwrap();
            assert_eq!(a, b);

            for kind in ViewKind::all() {
                let svg_a = export_drawing_view(&a, *kind, 800, 600, None).unwrap();
                let svg_b = export_drawing_view(&b, *kind, 800, 600, None).unwrap();
                assert_eq!(svg_a, svg_b);
            }
        }
    }

    #[test]
    fn elevation_envelope() {
        let geometry = generate_elevation_view(&scenario_cabinet(), false).unwrap();
        let box_lines = geometry.lines.iter().filter(|l| {
            l.style == LineStyle::Solid && l.start.y >= 0.0 && l.end.y >= 0.0
        });
        let (min, max) = bounds_of(box_lines);
        assert_eq!(min, DVec2::ZERO);
        assert_eq!(max, DVec2::new(24.0, 34.5));
    }

    #[test]
    fn top_envelope() {
        let geometry = generate_top_view(&scenario_cabinet(), false).unwrap();
        let (min, max) = bounds_of(geometry.lines.iter());
        assert_eq!(max - min, DVec2::new(24.0, 24.0));
    }

    fn assert_internals_inside(
        submittal: &WireframeGeometry,
        shop: &WireframeGeometry,
        max: DVec2,
    ) {
        let internal: Vec<_> = shop
            .lines
            .iter()
            .filter(|l| !submittal.lines.contains(l))
            .collect();
        assert!(!internal.is_empty());
        for line in internal {
            for p in [line.start, line.end] {
                assert!(
                    p.x >= 0.0 && p.x <= max.x && p.y >= 0.0 && p.y <= max.y,
                    "internal point {:?} outside the box",
                    p
                );
            }
        }
    }

    #[test]
    fn internal_containment() {
        let cabinet = scenario_cabinet();
        let d = cabinet.dimensions;

        let submittal = generate_top_view(&cabinet, false).unwrap();
        let shop = generate_top_view(&cabinet, true).unwrap();
        assert_internals_inside(&submittal, &shop, DVec2::new(d.width, d.depth));

        let submittal = generate_elevation_view(&cabinet, false).unwrap();
        let shop = generate_elevation_view(&cabinet, true).unwrap();
        assert_internals_inside(&submittal, &shop, DVec2::new(d.width, d.height));

        // Hole markers sit on the inner faces of the side panels
        for marker in shop.annotations.iter().filter(|a| a.text == cw_core::HOLE_MARKER) {
            let x = marker.position.x;
            assert!(x == d.thickness || x == d.width - d.thickness);
            assert!(marker.position.y > d.thickness && marker.position.y < d.height - d.thickness);
        }
    }

    #[test]
    fn isometric_parts_inside_outer_box() {
        // Without a toe kick every shop part lies inside the carcass box
        let cabinet = scenario_cabinet().with_toe_kick(0.0);
        let submittal = generate_isometric_view(&cabinet, false).unwrap();
        let shop = generate_isometric_view(&cabinet, true).unwrap();

        // The projected box is a hexagon whose edges follow the three
        // projected axes: a point is inside iff it is inside the strip
        // spanned by the corners across each axis.
        let axes = [DVec3::X, DVec3::Y, DVec3::Z].map(|axis| {
            let screen = project_isometric(axis) - project_isometric(DVec3::ZERO);
            DVec2::new(screen.x, -screen.y)
        });
        let corners: Vec<DVec2> = submittal
            .lines
            .iter()
            .flat_map(|l| [l.start.truncate(), l.end.truncate()])
            .collect();

        let parts: Vec<_> = shop.lines.iter().filter(|l| l.is_dashed()).collect();
        // side panels, bottom, back, shelf
        assert_eq!(parts.len(), 5 * 12);

        for axis in axes {
            let (lo, hi) = corners
                .iter()
                .map(|c| axis.perp_dot(*c))
                .fold((f64::MAX, f64::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)));
            for line in &parts {
                for p in [line.start.truncate(), line.end.truncate()] {
                    let v = axis.perp_dot(p);
                    assert!(
                        v >= lo - 1e-9 && v <= hi + 1e-9,
                        "part point {:?} outside the projected box",
                        p
                    );
                }
            }
        }
    }

    #[test]
    fn toe_kick_boundary() {
        let geometry = generate_elevation_view(&scenario_cabinet(), false).unwrap();
        let toe_kick: Vec<_> = geometry
            .lines
            .iter()
            .filter(|l| l.style == LineStyle::Solid && (l.start.y < 0.0 || l.end.y < 0.0))
            .collect();
        assert_eq!(toe_kick.len(), 3);
        let (min, max) = bounds_of(toe_kick.into_iter());
        assert_eq!(max.y, 0.0);
        assert_eq!(max.y - min.y, 4.5);
    }

    #[test]
    fn toe_kick_omission() {
        let cabinet = scenario_cabinet().with_toe_kick(0.0);
        for show_internals in [false, true] {
            let geometry = generate_elevation_view(&cabinet, show_internals).unwrap();
            assert!(
                geometry
                    .lines
                    .iter()
                    .filter(|l| l.style == LineStyle::Solid)
                    .all(|l| l.start.y >= 0.0 && l.end.y >= 0.0)
            );
            // No degenerate zero-height rectangle at y = 0
            let horizontal_at_zero = geometry
                .lines
                .iter()
                .filter(|l| l.style == LineStyle::Solid && l.start.y == 0.0 && l.end.y == 0.0)
                .count();
            assert_eq!(horizontal_at_zero, 1);
            assert!(geometry.dimensions.iter().all(|d| d.value > 0.0));
        }
    }

    #[test]
    fn isometric_vertical_congruence() {
        let cabinet = BaseCabinet::new(24.0, 30.0, 24.0);
        let a = project_isometric(DVec3::new(0.0, 0.0, 30.0)) - project_isometric(DVec3::ZERO);
        let b = project_isometric(DVec3::new(24.0, 0.0, 30.0))
            - project_isometric(DVec3::new(24.0, 0.0, 0.0));
        assert_relative_eq!(a.perp_dot(b), 0.0, epsilon = 1e-9);
        assert_relative_eq!(a.length(), b.length(), epsilon = 1e-9);

        let geometry = generate_isometric_view(&cabinet, false).unwrap();
        let verticals: Vec<_> = geometry
            .lines
            .iter()
            .filter(|l| (l.end.x - l.start.x).abs() < 1e-9)
            .collect();
        assert_eq!(verticals.len(), 4);
        for line in verticals {
            assert_relative_eq!(line.length(), 30.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn isometric_parallel_edges_stay_parallel() {
        let geometry = generate_isometric_view(&BaseCabinet::new(30.0, 30.0, 12.0), false).unwrap();
        let directions: Vec<DVec3> = geometry
            .lines
            .iter()
            .map(|l| (l.end - l.start).normalize())
            .collect();
        // Each group of 4 box edges shares one of three directions
        let mut distinct: Vec<DVec3> = Vec::new();
        for dir in directions {
            if !distinct
                .iter()
                .any(|d| d.cross(dir).length() < 1e-9)
            {
                distinct.push(dir);
            }
        }
        assert_eq!(distinct.len(), 3);
    }
}

mod scenario {
    use super::*;

    #[test]
    fn elevation_shelf_and_total_dimension() {
        init_tracing();
        let drawing = generate_cabinet_drawing(&scenario_cabinet(), true).unwrap();
        let elevation = &drawing.elevation_view;

        let shelf = elevation
            .lines
            .iter()
            .find(|l| l.style == LineStyle::Dashed && l.start.y == 17.25 && l.end.y == 17.25)
            .expect("shelf line at mid-height");
        assert_eq!(shelf.start.x.min(shelf.end.x), 0.75);
        assert_eq!(shelf.start.x.max(shelf.end.x), 23.25);

        let total = elevation
            .dimensions
            .iter()
            .find(|d| d.label == "39.00 TOTAL")
            .expect("total height dimension");
        assert_eq!(total.start.y.min(total.end.y), -4.5);
        assert_eq!(total.start.y.max(total.end.y), 34.5);
        assert_eq!(total.value, 39.0);

        // Total sits outside the box height dimension
        let height = elevation
            .dimensions
            .iter()
            .find(|d| d.label == "34.50\"")
            .unwrap();
        assert!(total.offset > height.offset && height.offset > 0.0);
    }

    #[test]
    fn export_shape() {
        let drawing = generate_cabinet_drawing(&scenario_cabinet(), true).unwrap();
        for kind in ViewKind::all() {
            let geometry = drawing.view(*kind);
            let svg = export_to_svg(geometry, 800, 600, None).unwrap();
            assert!(svg.contains("width=\"800\" height=\"600\""));
            assert_eq!(count(&svg, "<line "), geometry.lines.len());
            assert_eq!(
                count(&svg, "<text "),
                geometry.annotations.len() + geometry.dimensions.len()
            );
            assert!(!svg.contains("href"));
        }
    }

    #[test]
    fn export_flips_every_element_kind() {
        let geometry = generate_elevation_view(&scenario_cabinet(), true).unwrap();
        let svg = export_to_svg(&geometry, 800, 600, None).unwrap();

        // Shelf line at y = 17.25 in
        assert!(svg.contains("y1=\"-172.5\" x2=\"232.5\" y2=\"-172.5\""));
        // Middle hole of the left ladder, also at y = 17.25 in
        assert!(svg.contains("<text x=\"7.5\" y=\"-172.5\""));
        // Width dimension on top: y = 34.5 + 4 in offset
        assert!(svg.contains("<text x=\"120\" y=\"-385\" font-size=\"10\">24.00&quot;</text>"));
    }

    #[test]
    fn font_size_settings_reach_the_svg() {
        let mut config = cw_core::DraftingConfig::default();
        config.dimensions.callout_font_size = 3.0;
        let engine = ProjectionEngine::new(config).unwrap();
        let geometry = engine
            .generate_view(ViewKind::Iso, &scenario_cabinet(), false)
            .unwrap();

        let svg = export_to_svg(&geometry, 800, 600, None).unwrap();
        assert!(svg.contains("font-size=\"30\">24.00 W</text>"));
        assert!(svg.contains("font-size=\"30\">24.00 D</text>"));

        let options = cw_core::SvgExportOptions {
            dimension_font_size: 2.0,
            ..Default::default()
        };
        let svg = cw_core::export_to_svg_with_options(&geometry, 800, 600, None, &options).unwrap();
        assert!(svg.contains("font-size=\"20\" transform=\"rotate(-90"));
        assert!(!svg.contains("font-size=\"10\" transform"));
    }

    #[test]
    fn invalid_config_is_rejected_before_drawing() {
        let mut config = cw_core::DraftingConfig::default();
        config.construction.door_overlay = f64::NAN;
        config.construction.hole_spacing = -1.25;
        assert!(matches!(
            ProjectionEngine::new(config),
            Err(cw_core::ConfigError::Invalid(_))
        ));

        let mut config = cw_core::DraftingConfig::default();
        config.construction.shelf_pin_count = u32::MAX;
        assert!(ProjectionEngine::new(config).is_err());
    }

    #[test]
    fn custom_standards_flow_through() {
        let engine = ProjectionEngine::new(cw_core::DraftingConfig::with_construction(
            cw_core::ConstructionStandards::system_32(),
        ))
        .unwrap();
        let geometry = engine
            .generate_view(ViewKind::Elevation, &scenario_cabinet(), true)
            .unwrap();
        let mut ladder: Vec<f64> = geometry
            .annotations
            .iter()
            .filter(|a| a.text == cw_core::HOLE_MARKER && a.position.x == 0.75)
            .map(|a| a.position.y)
            .collect();
        ladder.sort_by(f64::total_cmp);
        assert_eq!(ladder.len(), 5);
        assert_relative_eq!((ladder[1] - ladder[0]) * 25.4, 32.0, epsilon = 1e-9);
    }

    #[test]
    fn errors_are_distinct() {
        let bad = BaseCabinet::new(-24.0, 34.5, 24.0);
        assert!(matches!(
            generate_cabinet_drawing(&bad, true),
            Err(DrawingError::InvalidDimension(_))
        ));
        assert!(matches!(
            "section".parse::<ViewKind>(),
            Err(DrawingError::UnsupportedView(_))
        ));

        let mut geometry = generate_top_view(&scenario_cabinet(), false).unwrap();
        geometry.lines[0].end.x = f64::NAN;
        assert!(matches!(
            export_to_svg(&geometry, 800, 600, None),
            Err(DrawingError::SerializationOverflow(_))
        ));
    }
}
