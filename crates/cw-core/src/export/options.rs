//! Export options for SVG generation

use serde::{Deserialize, Serialize};

use crate::constants::{CANVAS_MARGIN, DASH_PATTERN, DEFAULT_STROKE_COLOR, PIXELS_PER_UNIT};

/// Export options for SVG generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvgExportOptions {
    /// Pixels per cabinet unit, applied to coordinates, stroke widths and font sizes
    pub pixels_per_unit: f64,
    /// Distance from the canvas' left and bottom edges to the model origin (pixels)
    pub margin: f64,
    /// `stroke-dasharray` for dashed lines (pixels)
    pub dash_pattern: String,
    /// Color of lines that carry none, and of all text
    pub default_color: String,
    /// Font size of dimension labels (cabinet units)
    pub dimension_font_size: f64,
    /// Stroke width of annotation leaders (pixels)
    pub leader_width: f64,
    pub font_family: String,
}

impl Default for SvgExportOptions {
    fn default() -> Self {
        Self {
            pixels_per_unit: PIXELS_PER_UNIT,
            margin: CANVAS_MARGIN,
            dash_pattern: DASH_PATTERN.to_string(),
            default_color: DEFAULT_STROKE_COLOR.to_string(),
            dimension_font_size: 1.0,
            leader_width: 0.5,
            font_family: "sans-serif".to_string(),
        }
    }
}

impl SvgExportOptions {
    /// Options with a custom scale
    pub fn with_scale(mut self, pixels_per_unit: f64) -> Self {
        self.pixels_per_unit = pixels_per_unit;
        self
    }

    /// Default framing: model origin `margin` pixels from the lower-left corner
    pub fn default_view_box(&self, width: u32, height: u32) -> String {
        format!(
            "{} {} {} {}",
            super::svg::fmt_num(-self.margin),
            super::svg::fmt_num(self.margin - f64::from(height)),
            width,
            height
        )
    }
}
