//! Scene-space geometry shared by the simulation and the renderer.

use ratatui::layout::{Position, Rect};

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// A point in scene coordinates: origin at the top-left corner, x growing
/// right and y growing down, inside the 800x600 virtual canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Even-odd point-in-polygon test over a closed outline.
///
/// Casts a ray to the right of `p` and counts edge crossings, so concave
/// outlines such as star shapes resolve correctly: points in the notches
/// between spikes are outside.
pub fn polygon_contains(vertices: &[Point], p: Point) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let (a, b) = (vertices[i], vertices[j]);
        if (a.y > p.y) != (b.y > p.y) {
            let crossing_x = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
            if p.x < crossing_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Map a terminal cell to the scene point under its center.
///
/// `area` is the rectangle the canvas was last rendered into. Cells outside
/// it (status line, padding, a resize race) map to `None` and the caller
/// drops the event.
pub fn cell_to_scene(area: Rect, column: u16, row: u16) -> Option<Point> {
    if area.width == 0 || area.height == 0 || !area.contains(Position::new(column, row)) {
        return None;
    }

    let x = (f64::from(column - area.x) + 0.5) / f64::from(area.width) * CANVAS_WIDTH;
    let y = (f64::from(row - area.y) + 0.5) / f64::from(area.height) * CANVAS_HEIGHT;
    Some(Point::new(x, y))
}
