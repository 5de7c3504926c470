//! Continuously spinning triangles.

use std::f64::consts::PI;

use banjak_core::{Point, Rgb, TRIANGLE_RADIUS, TRIANGLE_SPIN};

/// Identity of a triangle within the scene's fixed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriangleId(pub u32);

/// An equilateral triangle spinning about its center.
#[derive(Debug, Clone)]
pub struct Triangle {
    pub id: TriangleId,
    /// Center position; triangles never move.
    pub pos: Point,
    /// Accumulated rotation in radians, growing without bound.
    pub rotation: f64,
    /// Fill color.
    pub color: Rgb,
}

impl Triangle {
    pub(crate) fn new(id: u32, x: f64, y: f64, color: u32) -> Self {
        Self {
            id: TriangleId(id),
            pos: Point::new(x, y),
            rotation: 0.0,
            color: Rgb(color),
        }
    }

    /// Advance one tick of rotation.
    pub(crate) fn spin(&mut self) {
        self.rotation += TRIANGLE_SPIN;
    }

    /// The three vertices at the current rotation, 120 degrees apart.
    pub fn vertices(&self) -> [Point; 3] {
        std::array::from_fn(|i| {
            let angle = self.rotation + i as f64 * 2.0 * PI / 3.0;
            Point::new(
                self.pos.x + angle.cos() * TRIANGLE_RADIUS,
                self.pos.y + angle.sin() * TRIANGLE_RADIUS,
            )
        })
    }
}
