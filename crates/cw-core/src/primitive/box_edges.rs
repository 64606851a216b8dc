//! Box (rectangular prism) edge emission

use glam::DVec3;

use super::Stroke;
use crate::geometry::Line3D;

/// Emit the 12 edges of the box spanning `min`..`max`, mapped by `project`
///
/// # Arguments
/// * `min`, `max` - opposite corners: x = width, y = depth, z = height
/// * `project` - maps a 3D corner to its drawn position
pub fn emit_box_edges(
    lines: &mut Vec<Line3D>,
    min: DVec3,
    max: DVec3,
    project: impl Fn(DVec3) -> DVec3,
    stroke: &Stroke,
) {
    // Corner index bits: x = 1, y = 2, z = 4
    let corners: [DVec3; 8] = std::array::from_fn(|i| {
        DVec3::new(
            if i & 1 == 0 { min.x } else { max.x },
            if i & 2 == 0 { min.y } else { max.y },
            if i & 4 == 0 { min.z } else { max.z },
        )
    });
    let projected = corners.map(project);

    let mut add_edge = |a: usize, b: usize| {
        lines.push(Line3D {
            start: projected[a],
            end: projected[b],
            style: stroke.style,
            weight: stroke.weight,
            color: stroke.color.clone(),
        });
    };

    // Bottom face
    add_edge(0, 1);
    add_edge(1, 3);
    add_edge(3, 2);
    add_edge(2, 0);

    // Top face
    add_edge(4, 5);
    add_edge(5, 7);
    add_edge(7, 6);
    add_edge(6, 4);

    // Verticals
    add_edge(0, 4);
    add_edge(1, 5);
    add_edge(2, 6);
    add_edge(3, 7);
}
