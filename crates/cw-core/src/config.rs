//! Drafting configuration
//!
//! Construction standards, dimension placement and line weights are plain
//! serializable values injected into the [`ProjectionEngine`]. Switching
//! hole systems or door overlays means swapping a config, never touching
//! projection code.
//!
//! [`ProjectionEngine`]: crate::projection::ProjectionEngine

use serde::{Deserialize, Serialize};

use crate::constants::MAX_SHELF_PIN_COUNT;

/// Shop construction constants, in the cabinet's unit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConstructionStandards {
    /// Distance between shelf-pin holes in a ladder
    pub hole_spacing: f64,
    /// Number of holes drawn per ladder (illustrative sample)
    pub shelf_pin_count: u32,
    /// Inset of plan-view shelf-pin markers from the front and back
    pub shelf_pin_inset: f64,
    /// How far the overlay door extends past the box on every side
    pub door_overlay: f64,
    /// Distance of the back panel from the back edge of the box
    pub back_panel_setback: f64,
    /// Back panel stock thickness
    pub back_panel_thickness: f64,
    /// Distance of the shelf front from the front edge of the box
    pub shelf_front_setback: f64,
    /// Recess of the toe kick from the front of the box
    pub toe_kick_setback: f64,
}

impl Default for ConstructionStandards {
    fn default() -> Self {
        Self::imperial()
    }
}

impl ConstructionStandards {
    /// Imperial face-frameless standard (inches)
    pub fn imperial() -> Self {
        Self {
            hole_spacing: 1.25,
            shelf_pin_count: 5,
            shelf_pin_inset: 2.0,
            door_overlay: 0.5,
            back_panel_setback: 0.75,
            back_panel_thickness: 0.25,
            shelf_front_setback: 1.0,
            toe_kick_setback: 3.0,
        }
    }

    /// European 32 mm hole system, expressed in inches
    pub fn system_32() -> Self {
        const MM: f64 = 1.0 / 25.4;
        Self {
            hole_spacing: 32.0 * MM,
            shelf_pin_count: 5,
            shelf_pin_inset: 37.0 * MM,
            door_overlay: 16.0 * MM,
            back_panel_setback: 19.0 * MM,
            back_panel_thickness: 6.0 * MM,
            shelf_front_setback: 20.0 * MM,
            toe_kick_setback: 75.0 * MM,
        }
    }

    /// Convert every length by `factor` (e.g. 25.4 for inches to mm)
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            hole_spacing: self.hole_spacing * factor,
            shelf_pin_count: self.shelf_pin_count,
            shelf_pin_inset: self.shelf_pin_inset * factor,
            door_overlay: self.door_overlay * factor,
            back_panel_setback: self.back_panel_setback * factor,
            back_panel_thickness: self.back_panel_thickness * factor,
            shelf_front_setback: self.shelf_front_setback * factor,
            toe_kick_setback: self.toe_kick_setback * factor,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.shelf_pin_count > MAX_SHELF_PIN_COUNT {
            return Err(ConfigError::Invalid(format!(
                "construction.shelf_pin_count must be at most {}, got {}",
                MAX_SHELF_PIN_COUNT, self.shelf_pin_count
            )));
        }
        require_positive("construction.hole_spacing", self.hole_spacing)?;
        require_positive("construction.back_panel_thickness", self.back_panel_thickness)?;
        for (name, value) in [
            ("construction.shelf_pin_inset", self.shelf_pin_inset),
            ("construction.door_overlay", self.door_overlay),
            ("construction.back_panel_setback", self.back_panel_setback),
            ("construction.shelf_front_setback", self.shelf_front_setback),
            ("construction.toe_kick_setback", self.toe_kick_setback),
        ] {
            require_non_negative(name, value)?;
        }
        Ok(())
    }
}

/// Dimension line placement and text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DimensionStyle {
    /// Distance from the geometry to the innermost dimension line
    pub first_offset: f64,
    /// Distance between nested dimension tiers
    pub tier_spacing: f64,
    /// Isometric width/depth callout font size (cabinet units)
    ///
    /// Dimension labels are sized at export time by `SvgExportOptions`.
    pub callout_font_size: f64,
    /// View title font size (cabinet units)
    pub title_font_size: f64,
    /// Hole marker and callout font size (cabinet units)
    pub marker_font_size: f64,
}

impl Default for DimensionStyle {
    fn default() -> Self {
        Self {
            first_offset: 2.0,
            tier_spacing: 2.0,
            callout_font_size: 1.0,
            title_font_size: 1.5,
            marker_font_size: 0.75,
        }
    }
}

impl DimensionStyle {
    fn validate(&self) -> Result<(), ConfigError> {
        require_positive("dimensions.first_offset", self.first_offset)?;
        require_positive("dimensions.tier_spacing", self.tier_spacing)?;
        require_positive("dimensions.callout_font_size", self.callout_font_size)?;
        require_positive("dimensions.title_font_size", self.title_font_size)?;
        require_positive("dimensions.marker_font_size", self.marker_font_size)
    }
}

/// Stroke weights per line role (cabinet units)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineWeights {
    /// Outer envelope and structural panels
    pub structural: f64,
    /// Hidden and reference lines
    pub reference: f64,
    /// Overlay door outline
    pub door: f64,
}

impl Default for LineWeights {
    fn default() -> Self {
        Self {
            structural: 0.1,
            reference: 0.05,
            door: 0.05,
        }
    }
}

impl LineWeights {
    fn validate(&self) -> Result<(), ConfigError> {
        require_positive("line_weights.structural", self.structural)?;
        require_positive("line_weights.reference", self.reference)?;
        require_positive("line_weights.door", self.door)
    }
}

/// Complete configuration of the projection engine
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DraftingConfig {
    #[serde(default)]
    pub construction: ConstructionStandards,
    #[serde(default)]
    pub dimensions: DimensionStyle,
    #[serde(default)]
    pub line_weights: LineWeights,
}

impl DraftingConfig {
    /// Config using the given construction standard and default styling
    pub fn with_construction(construction: ConstructionStandards) -> Self {
        Self {
            construction,
            ..Self::default()
        }
    }

    /// Parse a RON config; missing sections fall back to defaults
    pub fn from_ron_str(content: &str) -> Result<Self, ConfigError> {
        let config: DraftingConfig =
            ron::from_str(content).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty RON
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.construction.validate()?;
        self.dimensions.validate()?;
        self.line_weights.validate()
    }
}

fn require_positive(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{} must be positive, got {}", name, value)))
    }
}

fn require_non_negative(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "{} must not be negative, got {}",
            name, value
        )))
    }
}

/// Config-related errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
    #[error("Invalid config: {0}")]
    Invalid(String),
}
