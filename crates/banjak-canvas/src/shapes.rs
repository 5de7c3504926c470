//! Filled primitives for the ratatui canvas.
//!
//! The stock canvas shapes draw outlines only, so these sample their interior
//! on a half-unit grid and push every covered point through the painter. Half
//! a canvas unit stays below the braille dot pitch until a terminal is over
//! 800 cells wide, so fills come out solid.

use banjak_core::{Point, polygon_contains};
use ratatui::style::Color;
use ratatui::widgets::canvas::{Painter, Shape};

/// Interior sampling step in canvas units.
const STEP: f64 = 0.5;

/// A solid disc in canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct FilledCircle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Color,
}

impl FilledCircle {
    pub const fn new(x: f64, y: f64, radius: f64, color: Color) -> Self {
        Self {
            x,
            y,
            radius,
            color,
        }
    }
}

impl Shape for FilledCircle {
    fn draw(&self, painter: &mut Painter) {
        let mut dy = -self.radius;
        while dy <= self.radius {
            // Width of the chord at this height.
            let half = (self.radius * self.radius - dy * dy).sqrt();
            let mut dx = -half;
            while dx <= half {
                if let Some((px, py)) = painter.get_point(self.x + dx, self.y + dy) {
                    painter.paint(px, py, self.color);
                }
                dx += STEP;
            }
            dy += STEP;
        }
    }
}

/// A solid polygon in canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct FilledPolygon<'a> {
    pub vertices: &'a [Point],
    pub color: Color,
}

impl Shape for FilledPolygon<'_> {
    fn draw(&self, painter: &mut Painter) {
        let Some(first) = self.vertices.first() else {
            return;
        };

        let mut min = *first;
        let mut max = *first;
        for v in self.vertices {
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
        }

        let mut y = min.y;
        while y <= max.y {
            let mut x = min.x;
            while x <= max.x {
                if polygon_contains(self.vertices, Point::new(x, y))
                    && let Some((px, py)) = painter.get_point(x, y)
                {
                    painter.paint(px, py, self.color);
                }
                x += STEP;
            }
            y += STEP;
        }
    }
}
