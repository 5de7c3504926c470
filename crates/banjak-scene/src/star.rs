//! Hover-reactive stars.

use std::f64::consts::PI;

use banjak_core::{
    Point, Rgb, STAR_HOVER_SCALE, STAR_INNER_RADIUS, STAR_OUTER_RADIUS, STAR_REST_SCALE,
    STAR_SPIKES, polygon_contains,
};

/// Identity of a star within the scene's fixed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarId(pub u32);

/// A five-pointed star that reacts to the pointer.
#[derive(Debug, Clone)]
pub struct Star {
    pub id: StarId,
    /// Center position; stars never move.
    pub pos: Point,
    /// Current fill color.
    pub color: Rgb,
    /// Rest scale or hover scale, nothing in between.
    pub scale: f64,
}

impl Star {
    pub(crate) fn new(id: u32, x: f64, y: f64, color: u32) -> Self {
        Self {
            id: StarId(id),
            pos: Point::new(x, y),
            color: Rgb(color),
            scale: STAR_REST_SCALE,
        }
    }

    /// The ten outline vertices at the current scale.
    ///
    /// Walks 36 degree steps starting at angle zero, alternating between the
    /// outer and inner radius, so spike tips sit at even indices.
    pub fn vertices(&self) -> [Point; STAR_SPIKES * 2] {
        let step = PI / STAR_SPIKES as f64;
        std::array::from_fn(|i| {
            let radius = if i % 2 == 0 {
                STAR_OUTER_RADIUS * self.scale
            } else {
                STAR_INNER_RADIUS * self.scale
            };
            let angle = i as f64 * step;
            Point::new(
                self.pos.x + angle.cos() * radius,
                self.pos.y + angle.sin() * radius,
            )
        })
    }

    /// Whether `p` falls inside the outline at the current scale.
    pub fn contains(&self, p: Point) -> bool {
        polygon_contains(&self.vertices(), p)
    }

    pub(crate) fn set_hovered(&mut self, hovered: bool) {
        self.scale = if hovered {
            STAR_HOVER_SCALE
        } else {
            STAR_REST_SCALE
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star() -> Star {
        Star::new(1, 200.0, 150.0, 0xFFFF00)
    }

    #[test]
    fn test_vertices_alternate_outer_and_inner_radius() {
        let star = star();
        let vertices = star.vertices();
        assert_eq!(vertices.len(), 10);

        for (i, v) in vertices.iter().enumerate() {
            let distance = ((v.x - 200.0).powi(2) + (v.y - 150.0).powi(2)).sqrt();
            let expected = if i % 2 == 0 { 20.0 } else { 10.0 };
            assert!(
                (distance - expected).abs() < 1e-9,
                "vertex {i} at distance {distance}"
            );
        }

        // First spike tip points along +x from the center.
        assert!((vertices[0].x - 220.0).abs() < 1e-9);
        assert!((vertices[0].y - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_hover_scales_the_outline() {
        let mut star = star();
        star.set_hovered(true);

        let vertices = star.vertices();
        let tip = ((vertices[0].x - 200.0).powi(2) + (vertices[0].y - 150.0).powi(2)).sqrt();
        let notch = ((vertices[1].x - 200.0).powi(2) + (vertices[1].y - 150.0).powi(2)).sqrt();
        assert!((tip - 30.0).abs() < 1e-9);
        assert!((notch - 15.0).abs() < 1e-9);

        star.set_hovered(false);
        assert!((star.scale - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_contains_center_and_spike_tip_region() {
        let star = star();
        assert!(star.contains(Point::new(200.0, 150.0)));
        assert!(star.contains(Point::new(215.0, 150.0)));
        assert!(!star.contains(Point::new(225.0, 150.0)));
    }

    #[test]
    fn test_contains_excludes_notches_between_spikes() {
        let star = star();
        // Along the 36 degree direction the outline sits at the inner radius,
        // so a point at distance 15 on that ray is outside.
        let angle = PI / 5.0;
        let p = Point::new(200.0 + angle.cos() * 15.0, 150.0 + angle.sin() * 15.0);
        assert!(!star.contains(p));

        // The same point is inside once the star is hovered (inner radius 15).
        let mut hovered = star.clone();
        hovered.set_hovered(true);
        let nearer = Point::new(200.0 + angle.cos() * 13.0, 150.0 + angle.sin() * 13.0);
        assert!(hovered.contains(nearer));
    }
}
