//! SVG generation utilities

use glam::{DVec2, DVec3};

use super::SvgExportOptions;
use crate::geometry::{Annotation, DimensionAxis, DimensionLine, Line3D, LineStyle, WireframeGeometry};

/// Write a complete SVG document for one view
///
/// Inputs are assumed validated: finite geometry, positive canvas size.
pub fn generate_svg_string(
    geometry: &WireframeGeometry,
    width: u32,
    height: u32,
    view_box: &str,
    options: &SvgExportOptions,
) -> String {
    let mut svg = String::new();
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"{}\">\n",
        width,
        height,
        xml_escape(view_box)
    ));

    svg.push_str("  <g id=\"geometry\" fill=\"none\" stroke-linecap=\"round\">\n");
    for line in &geometry.lines {
        write_line(&mut svg, line, options);
    }
    svg.push_str("  </g>\n");

    svg.push_str(&text_group_open("dimensions", options));
    for dimension in &geometry.dimensions {
        write_dimension_label(&mut svg, dimension, options);
    }
    svg.push_str("  </g>\n");

    svg.push_str(&text_group_open("annotations", options));
    for annotation in &geometry.annotations {
        write_annotation(&mut svg, annotation, options);
    }
    svg.push_str("  </g>\n");

    svg.push_str("</svg>\n");
    svg
}

fn text_group_open(id: &str, options: &SvgExportOptions) -> String {
    format!(
        "  <g id=\"{}\" font-family=\"{}\" fill=\"{}\" text-anchor=\"middle\">\n",
        id,
        xml_escape(&options.font_family),
        xml_escape(&options.default_color)
    )
}

/// Model (up-positive) to canvas (down-positive): the only y flip
pub fn to_canvas(p: DVec3, pixels_per_unit: f64) -> DVec2 {
    DVec2::new(p.x * pixels_per_unit, -p.y * pixels_per_unit)
}

pub fn write_line(svg: &mut String, line: &Line3D, options: &SvgExportOptions) {
    let k = options.pixels_per_unit;
    let a = to_canvas(line.start, k);
    let b = to_canvas(line.end, k);
    let color = line.color.as_deref().unwrap_or(&options.default_color);

    svg.push_str(&format!(
        "    <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"",
        fmt_num(a.x),
        fmt_num(a.y),
        fmt_num(b.x),
        fmt_num(b.y),
        xml_escape(color),
        fmt_num(line.weight * k)
    ));
    if line.style == LineStyle::Dashed {
        svg.push_str(&format!(
            " stroke-dasharray=\"{}\"",
            xml_escape(&options.dash_pattern)
        ));
    }
    svg.push_str("/>\n");
}

pub fn write_dimension_label(svg: &mut String, dimension: &DimensionLine, options: &SvgExportOptions) {
    let k = options.pixels_per_unit;
    let p = to_canvas(dimension.label_position(), k);
    let (x, y) = (fmt_num(p.x), fmt_num(p.y));

    svg.push_str(&format!(
        "    <text x=\"{}\" y=\"{}\" font-size=\"{}\"",
        x,
        y,
        fmt_num(options.dimension_font_size * k)
    ));
    if dimension.axis() == DimensionAxis::Vertical {
        svg.push_str(&format!(" transform=\"rotate(-90 {} {})\"", x, y));
    }
    svg.push_str(&format!(">{}</text>\n", xml_escape(&dimension.label)));
}

pub fn write_annotation(svg: &mut String, annotation: &Annotation, options: &SvgExportOptions) {
    let k = options.pixels_per_unit;
    let p = to_canvas(annotation.position, k);

    if let Some(target) = annotation.leader {
        let t = to_canvas(target, k);
        svg.push_str(&format!(
            "    <polyline points=\"{},{} {},{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
            fmt_num(p.x),
            fmt_num(p.y),
            fmt_num(t.x),
            fmt_num(t.y),
            xml_escape(&options.default_color),
            fmt_num(options.leader_width)
        ));
    }

    svg.push_str(&format!(
        "    <text x=\"{}\" y=\"{}\" font-size=\"{}\">{}</text>\n",
        fmt_num(p.x),
        fmt_num(p.y),
        fmt_num(annotation.font_size * k),
        xml_escape(&annotation.text)
    ));
}

/// Format a number with at most 3 decimals, trailing zeros trimmed
pub fn fmt_num(value: f64) -> String {
    let mut s = format!("{:.3}", value);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

pub fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
