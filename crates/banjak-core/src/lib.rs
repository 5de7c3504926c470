//! Core types for the banjak particle playground.
//!
//! This crate holds the pieces shared between the scene simulation, the
//! canvas renderer and the terminal front end: scene-space geometry, packed
//! RGB colors, the numeric constants that define the scene, and the marker
//! styles the canvas can rasterize into.

mod color;
mod consts;
mod geom;
mod marker;

pub use color::Rgb;
pub use consts::*;
pub use geom::{Point, cell_to_scene, polygon_contains};
pub use marker::MarkerStyle;
