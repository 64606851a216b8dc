//! Drawing Assembler: the three views of one cabinet as a single value

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cabinet::BaseCabinet;
use crate::error::{DrawingError, DrawingResult};
use crate::geometry::WireframeGeometry;
use crate::projection::ProjectionEngine;

/// The fixed set of views a drawing contains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    Top,
    Elevation,
    Iso,
}

impl ViewKind {
    /// All view kinds, in drawing order
    pub fn all() -> &'static [ViewKind] {
        &[ViewKind::Top, ViewKind::Elevation, ViewKind::Iso]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewKind::Top => "top",
            ViewKind::Elevation => "elevation",
            ViewKind::Iso => "iso",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewKind {
    type Err = DrawingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" | "plan" => Ok(ViewKind::Top),
            "elevation" | "front" => Ok(ViewKind::Elevation),
            "iso" | "isometric" => Ok(ViewKind::Iso),
            _ => Err(DrawingError::UnsupportedView(format!(
                "'{}' is not one of top, elevation, iso",
                s
            ))),
        }
    }
}

/// Plan, front elevation and isometric views of one cabinet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CabinetDrawing {
    pub top_view: WireframeGeometry,
    pub elevation_view: WireframeGeometry,
    pub iso_view: WireframeGeometry,
}

impl CabinetDrawing {
    pub fn view(&self, kind: ViewKind) -> &WireframeGeometry {
        match kind {
            ViewKind::Top => &self.top_view,
            ViewKind::Elevation => &self.elevation_view,
            ViewKind::Iso => &self.iso_view,
        }
    }
}

impl ProjectionEngine {
    /// Generate a single view by kind
    pub fn generate_view(
        &self,
        kind: ViewKind,
        cabinet: &BaseCabinet,
        show_internals: bool,
    ) -> DrawingResult<WireframeGeometry> {
        match kind {
            ViewKind::Top => self.generate_top_view(cabinet, show_internals),
            ViewKind::Elevation => self.generate_elevation_view(cabinet, show_internals),
            ViewKind::Iso => self.generate_isometric_view(cabinet, show_internals),
        }
    }

    /// Generate all three views with the same cabinet and flag
    pub fn generate_drawing(
        &self,
        cabinet: &BaseCabinet,
        show_internals: bool,
    ) -> DrawingResult<CabinetDrawing> {
        Ok(CabinetDrawing {
            top_view: self.generate_top_view(cabinet, show_internals)?,
            elevation_view: self.generate_elevation_view(cabinet, show_internals)?,
            iso_view: self.generate_isometric_view(cabinet, show_internals)?,
        })
    }
}

/// Generate all three views with the default (imperial) configuration
pub fn generate_cabinet_drawing(
    cabinet: &BaseCabinet,
    show_internals: bool,
) -> DrawingResult<CabinetDrawing> {
    ProjectionEngine::default().generate_drawing(cabinet, show_internals)
}
