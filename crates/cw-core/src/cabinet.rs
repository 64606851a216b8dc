//! Cabinet Model: the input contract owned by the calling subsystem
//!
//! The drafting core only reads a [`BaseCabinet`]; it never mutates or
//! persists it. Field names serialize in camelCase to match the host's
//! cabinet-configuration payloads.

use serde::{Deserialize, Serialize};

use crate::constants::LENGTH_EPSILON;
use crate::error::{DrawingError, DrawingResult};
use crate::geometry::LengthUnit;

/// Box dimensions of a floor cabinet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CabinetDimensions {
    /// Outside width of the box (x)
    pub width: f64,
    /// Box height, excluding the toe kick (z in 3D, y in elevation)
    pub height: f64,
    /// Outside depth of the box (y in plan)
    pub depth: f64,
    /// Carcass panel thickness
    ///
    /// Every panel inset in the views (side panels, bottom, top stretcher,
    /// clear openings) uses this value. `CabinetMaterial::thickness` only
    /// sizes the shelf, so the two may differ.
    pub thickness: f64,
    /// Toe kick height below the box; 0 for no toe kick
    pub toe_kick_height: f64,
    /// Box height plus toe kick
    pub total_height: f64,
}

/// Sheet material of the cabinet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CabinetMaterial {
    /// Shelf stock thickness
    pub thickness: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Optional interior components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CabinetComponents {
    #[serde(default)]
    pub adjustable_shelf: bool,
}

/// A parametric base (floor) cabinet box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseCabinet {
    pub dimensions: CabinetDimensions,
    pub material: CabinetMaterial,
    #[serde(default)]
    pub components: CabinetComponents,
    #[serde(default)]
    pub unit: LengthUnit,
}

impl Default for BaseCabinet {
    fn default() -> Self {
        Self::new(24.0, 34.5, 24.0)
    }
}

impl BaseCabinet {
    /// Standard carcass: 3/4" panels, 4-1/2" toe kick, no shelf
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        let thickness = 0.75;
        let toe_kick_height = 4.5;
        Self {
            dimensions: CabinetDimensions {
                width,
                height,
                depth,
                thickness,
                toe_kick_height,
                total_height: height + toe_kick_height,
            },
            material: CabinetMaterial {
                thickness,
                name: None,
            },
            components: CabinetComponents::default(),
            unit: LengthUnit::Inch,
        }
    }

    /// Set the carcass panel thickness
    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.dimensions.thickness = thickness;
        self
    }

    /// Set the toe kick height, keeping `total_height` consistent
    pub fn with_toe_kick(mut self, toe_kick_height: f64) -> Self {
        self.dimensions.toe_kick_height = toe_kick_height;
        self.dimensions.total_height = self.dimensions.height + toe_kick_height;
        self
    }

    pub fn with_adjustable_shelf(mut self, adjustable_shelf: bool) -> Self {
        self.components.adjustable_shelf = adjustable_shelf;
        self
    }

    pub fn with_material(mut self, material: CabinetMaterial) -> Self {
        self.material = material;
        self
    }

    pub fn with_unit(mut self, unit: LengthUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Carcass panel thickness
    pub fn panel_thickness(&self) -> f64 {
        self.dimensions.thickness
    }

    /// Clear width between the two side panels
    pub fn interior_width(&self) -> f64 {
        self.dimensions.width - 2.0 * self.dimensions.thickness
    }

    /// Clear height between the bottom panel and the top stretcher
    pub fn interior_height(&self) -> f64 {
        self.dimensions.height - 2.0 * self.dimensions.thickness
    }

    pub fn has_toe_kick(&self) -> bool {
        self.dimensions.toe_kick_height > 0.0
    }

    /// Check basic dimensional sanity
    ///
    /// Nothing is clamped: the first violation is returned as
    /// [`DrawingError::InvalidDimension`].
    pub fn validate(&self) -> DrawingResult<()> {
        let d = &self.dimensions;

        for (name, value) in [
            ("width", d.width),
            ("height", d.height),
            ("depth", d.depth),
            ("thickness", d.thickness),
            ("totalHeight", d.total_height),
            ("material.thickness", self.material.thickness),
        ] {
            require_positive(name, value)?;
        }

        if !d.toe_kick_height.is_finite() || d.toe_kick_height < 0.0 {
            return Err(DrawingError::InvalidDimension(format!(
                "toeKickHeight must be zero or positive, got {}",
                d.toe_kick_height
            )));
        }
        if d.toe_kick_height >= d.height {
            return Err(DrawingError::InvalidDimension(format!(
                "toeKickHeight ({}) must be less than height ({})",
                d.toe_kick_height, d.height
            )));
        }
        if d.total_height < d.height {
            return Err(DrawingError::InvalidDimension(format!(
                "totalHeight ({}) must not be less than height ({})",
                d.total_height, d.height
            )));
        }
        if (d.total_height - (d.height + d.toe_kick_height)).abs() > LENGTH_EPSILON {
            return Err(DrawingError::InvalidDimension(format!(
                "totalHeight ({}) must equal height ({}) plus toeKickHeight ({})",
                d.total_height, d.height, d.toe_kick_height
            )));
        }
        if 2.0 * d.thickness >= d.width || 2.0 * d.thickness >= d.height || d.thickness >= d.depth {
            return Err(DrawingError::InvalidDimension(format!(
                "thickness ({}) leaves no interior in a {} x {} x {} box",
                d.thickness, d.width, d.height, d.depth
            )));
        }

        Ok(())
    }
}

fn require_positive(name: &str, value: f64) -> DrawingResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(DrawingError::InvalidDimension(format!(
            "{} must be a positive number, got {}",
            name, value
        )))
    }
}
