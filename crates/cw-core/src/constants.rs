//! Global constants for cw-core

/// Decimal places used for every dimension label
pub const DIMENSION_PRECISION: usize = 2;

/// Tolerance for comparing lengths in the cabinet's unit
pub const LENGTH_EPSILON: f64 = 1e-6;

/// Default door outline color (blue, distinguishes the door from the box)
pub const DOOR_COLOR: &str = "#1f6feb";

/// Default stroke color when a line carries none
pub const DEFAULT_STROKE_COLOR: &str = "#000000";

/// Upper bound on holes drawn per shelf-pin ladder
pub const MAX_SHELF_PIN_COUNT: u32 = 64;

/// Text placed at every shelf-pin hole position
pub const HOLE_MARKER: &str = "o";

/// Dimension qualifier for the full height including the toe kick
pub const QUALIFIER_TOTAL: &str = "TOTAL";

/// Dimension qualifier for interior clear openings
pub const QUALIFIER_CLEAR: &str = "CLR";

/// Dimension qualifier for the toe kick height
pub const QUALIFIER_TOE_KICK: &str = "TOE KICK";

/// Default SVG scale: pixels per cabinet unit
pub const PIXELS_PER_UNIT: f64 = 10.0;

/// Default SVG margin between the canvas edge and the model origin (pixels)
pub const CANVAS_MARGIN: f64 = 80.0;

/// Dash pattern for dashed lines (pixels)
pub const DASH_PATTERN: &str = "6 4";
