//! SVG export of a single drawing view
//!
//! The output is a self-contained SVG document (no external references).
//! The model's y axis points up and the canvas' points down; the exporter
//! flips it exactly once, identically for lines, dimension labels and
//! annotations. Nothing is clipped: choosing a canvas or `viewBox` that
//! contains the geometry is up to the caller.

mod options;
mod svg;

pub use options::SvgExportOptions;
pub use svg::{fmt_num, to_canvas, xml_escape};

use crate::drawing::{CabinetDrawing, ViewKind};
use crate::error::{DrawingError, DrawingResult};
use crate::geometry::WireframeGeometry;

use svg::generate_svg_string;

/// Export one view to an SVG string with default options
///
/// `view_box`, when given, replaces the default framing verbatim.
pub fn export_to_svg(
    geometry: &WireframeGeometry,
    width: u32,
    height: u32,
    view_box: Option<&str>,
) -> DrawingResult<String> {
    export_to_svg_with_options(
        geometry,
        width,
        height,
        view_box,
        &SvgExportOptions::default(),
    )
}

/// Export one view to an SVG string
pub fn export_to_svg_with_options(
    geometry: &WireframeGeometry,
    width: u32,
    height: u32,
    view_box: Option<&str>,
    options: &SvgExportOptions,
) -> DrawingResult<String> {
    if width == 0 || height == 0 {
        return Err(DrawingError::InvalidDimension(format!(
            "canvas must be at least 1x1, got {}x{}",
            width, height
        )));
    }
    if !options.pixels_per_unit.is_finite() || options.pixels_per_unit <= 0.0 {
        return Err(DrawingError::InvalidDimension(format!(
            "pixels_per_unit must be positive, got {}",
            options.pixels_per_unit
        )));
    }
    if let Some(view_box) = view_box {
        validate_view_box(view_box)?;
    }
    geometry.check_finite()?;

    let view_box = match view_box {
        Some(v) => v.trim().to_string(),
        None => options.default_view_box(width, height),
    };

    let svg = generate_svg_string(geometry, width, height, &view_box, options);
    tracing::debug!(
        width,
        height,
        view_box = %view_box,
        bytes = svg.len(),
        "exported view to SVG"
    );
    Ok(svg)
}

/// Export one view of a drawing
pub fn export_drawing_view(
    drawing: &CabinetDrawing,
    kind: ViewKind,
    width: u32,
    height: u32,
    view_box: Option<&str>,
) -> DrawingResult<String> {
    export_to_svg(drawing.view(kind), width, height, view_box)
}

/// A viewBox is four finite numbers with positive width and height
fn validate_view_box(view_box: &str) -> DrawingResult<()> {
    let values: Vec<f64> = view_box
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(str::parse::<f64>)
        .collect::<Result<_, _>>()
        .map_err(|e| DrawingError::InvalidDimension(format!("viewBox '{}': {}", view_box, e)))?;

    match values.as_slice() {
        [x, y, w, h] if x.is_finite() && y.is_finite() && *w > 0.0 && *h > 0.0 => Ok(()),
        _ => Err(DrawingError::InvalidDimension(format!(
            "viewBox '{}' must be 'min-x min-y width height' with positive size",
            view_box
        ))),
    }
}
