//! Projection Engine
//!
//! Pure functions mapping a [`BaseCabinet`] and a "show internal
//! construction" flag into view-local line geometry:
//! - Top (plan) view: x = width, y = depth, front edge at y = 0
//! - Front elevation: x = width, y = height, box bottom at y = 0
//! - Isometric: fixed axonometric projection of x = width, y = depth, z = height
//!
//! `show_internals = false` is submittal mode (outer envelope only);
//! `show_internals = true` is shop mode (full construction detail).

mod elevation;
mod isometric;
mod top;

pub use isometric::project_isometric;

use glam::DVec2;

use crate::cabinet::BaseCabinet;
use crate::config::{ConfigError, DraftingConfig};
use crate::constants::DOOR_COLOR;
use crate::error::DrawingResult;
use crate::geometry::{Annotation, Bounds2, WireframeGeometry};
use crate::primitive::Stroke;

/// Level of detail of a generated drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DrawingMode {
    /// Outer envelope only, for customer approval
    #[default]
    Submittal,
    /// Full construction detail for the shop floor
    Shop,
}

impl DrawingMode {
    pub fn show_internals(&self) -> bool {
        matches!(self, DrawingMode::Shop)
    }
}

impl From<bool> for DrawingMode {
    fn from(show_internals: bool) -> Self {
        if show_internals {
            DrawingMode::Shop
        } else {
            DrawingMode::Submittal
        }
    }
}

/// How the adjustable shelf is indicated in the plan view
///
/// The plan view deliberately draws only a partial reference line at the
/// shelf front instead of the full shelf outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShelfIndicator {
    /// Centered dashed line, half the interior width long, at the shelf front
    PartialFrontEdge,
}

/// Stateless view generator configured by a [`DraftingConfig`]
///
/// The config is validated once on construction, so every generator can
/// rely on finite, in-range construction constants.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectionEngine {
    config: DraftingConfig,
}

impl ProjectionEngine {
    pub fn new(config: DraftingConfig) -> Result<Self, ConfigError> {
        config.validate().inspect_err(|e| {
            tracing::warn!("rejecting drafting config: {}", e);
        })?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DraftingConfig {
        &self.config
    }

    /// Plan view: width × depth envelope, panels, back and shelf references
    pub fn generate_top_view(
        &self,
        cabinet: &BaseCabinet,
        show_internals: bool,
    ) -> DrawingResult<WireframeGeometry> {
        self.check(cabinet, "top")?;
        let mode = DrawingMode::from(show_internals);
        let geometry = top::generate(self, cabinet, mode);
        log_view("top", mode, &geometry);
        Ok(geometry)
    }

    /// Front elevation: box, toe kick, overlay door and construction lines
    pub fn generate_elevation_view(
        &self,
        cabinet: &BaseCabinet,
        show_internals: bool,
    ) -> DrawingResult<WireframeGeometry> {
        self.check(cabinet, "elevation")?;
        let mode = DrawingMode::from(show_internals);
        let geometry = elevation::generate(self, cabinet, mode);
        log_view("elevation", mode, &geometry);
        Ok(geometry)
    }

    /// Isometric wireframe of the box and, in shop mode, its parts
    pub fn generate_isometric_view(
        &self,
        cabinet: &BaseCabinet,
        show_internals: bool,
    ) -> DrawingResult<WireframeGeometry> {
        self.check(cabinet, "iso")?;
        let mode = DrawingMode::from(show_internals);
        let geometry = isometric::generate(self, cabinet, mode);
        log_view("iso", mode, &geometry);
        Ok(geometry)
    }

    fn check(&self, cabinet: &BaseCabinet, view: &str) -> DrawingResult<()> {
        cabinet.validate().inspect_err(|e| {
            tracing::warn!(view, "rejecting cabinet: {}", e);
        })
    }

    fn structural(&self) -> Stroke {
        Stroke::solid(self.config.line_weights.structural)
    }

    fn reference(&self) -> Stroke {
        Stroke::dashed(self.config.line_weights.reference)
    }

    fn door(&self) -> Stroke {
        Stroke::dashed(self.config.line_weights.door).with_color(DOOR_COLOR)
    }

    /// View title centered below everything drawn
    fn title(&self, geometry: &WireframeGeometry, text: &str) -> Annotation {
        let style = &self.config.dimensions;
        let bounds = geometry.bounds().unwrap_or(Bounds2 {
            min: DVec2::ZERO,
            max: DVec2::ZERO,
        });
        // Clear two tiers of bottom dimensions before placing the title
        let y = bounds.min.y - style.first_offset - 2.0 * style.tier_spacing - style.title_font_size;
        let x = bounds.min.x + bounds.width() / 2.0;
        Annotation::new(DVec2::new(x, y).extend(0.0), text, style.title_font_size)
    }
}

fn log_view(view: &str, mode: DrawingMode, geometry: &WireframeGeometry) {
    tracing::debug!(
        view,
        ?mode,
        lines = geometry.lines.len(),
        dimensions = geometry.dimensions.len(),
        annotations = geometry.annotations.len(),
        "generated view"
    );
}

/// Plan view with the default (imperial) configuration
pub fn generate_top_view(
    cabinet: &BaseCabinet,
    show_internals: bool,
) -> DrawingResult<WireframeGeometry> {
    ProjectionEngine::default().generate_top_view(cabinet, show_internals)
}

/// Front elevation with the default (imperial) configuration
pub fn generate_elevation_view(
    cabinet: &BaseCabinet,
    show_internals: bool,
) -> DrawingResult<WireframeGeometry> {
    ProjectionEngine::default().generate_elevation_view(cabinet, show_internals)
}

/// Isometric view with the default (imperial) configuration
pub fn generate_isometric_view(
    cabinet: &BaseCabinet,
    show_internals: bool,
) -> DrawingResult<WireframeGeometry> {
    ProjectionEngine::default().generate_isometric_view(cabinet, show_internals)
}
