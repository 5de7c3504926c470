//! Canvas rendering for the banjak particle playground.
//!
//! Scene state is redrawn from scratch every frame: filled shapes are
//! rasterized through the canvas painter, and the scene's stacking order is
//! reproduced with canvas layers so upper shapes overwrite lower ones.

mod paint;
mod shapes;

pub use paint::paint_scene;
pub use shapes::{FilledCircle, FilledPolygon};
