//! Casework Drafting Core
//!
//! Turns a parametric cabinet box description into technical drawings:
//! - Cabinet: the input contract and its dimensional validation
//! - Projection: plan, front elevation and isometric line geometry
//! - Dimension: nested, non-overlapping dimension lines with labels
//! - Drawing: the three views of one cabinet as one value
//! - Export: self-contained SVG of a single view
//!
//! Every operation is a pure, synchronous transform: equal input always
//! yields structurally equal output.

pub mod cabinet;
pub mod config;
pub mod constants;
pub mod dimension;
pub mod drawing;
pub mod error;
pub mod export;
pub mod geometry;
pub mod primitive;
pub mod projection;

pub use cabinet::*;
pub use config::*;
pub use constants::*;
pub use dimension::*;
pub use drawing::*;
pub use error::*;
pub use export::*;
pub use geometry::*;
pub use projection::*;
