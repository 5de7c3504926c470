//! Per-frame painting of the scene onto a canvas context.

use banjak_core::{CANVAS_HEIGHT, CURSOR_RADIUS, PARTICLE_RADIUS, Point, Rgb};
use banjak_scene::Scene;
use ratatui::widgets::canvas::Context;

use crate::shapes::{FilledCircle, FilledPolygon};

/// Flip a scene point (y grows down) into canvas coordinates (y grows up).
fn to_canvas(p: Point) -> Point {
    Point::new(p.x, CANVAS_HEIGHT - p.y)
}

/// Redraw every live shape from the current scene state.
///
/// Groups are painted bottom to top: trail particles, then the spinning
/// triangles, the cursor disc, and the stars above everything. A layer break
/// between groups keeps an upper shape's cells from mixing with the dots
/// beneath it.
///
/// Particles have no alpha channel to fade with, so their remaining life is
/// folded into the color by blending toward `background`.
pub fn paint_scene(ctx: &mut Context, scene: &Scene, background: Rgb) {
    for particle in scene.particles() {
        let pos = to_canvas(particle.pos);
        let color = particle.color.blend(background, particle.alpha());
        ctx.draw(&FilledCircle::new(
            pos.x,
            pos.y,
            PARTICLE_RADIUS,
            color.to_color(),
        ));
    }
    ctx.layer();

    for triangle in scene.triangles() {
        let vertices = triangle.vertices().map(to_canvas);
        ctx.draw(&FilledPolygon {
            vertices: &vertices,
            color: triangle.color.to_color(),
        });
    }
    ctx.layer();

    let cursor = to_canvas(scene.position());
    ctx.draw(&FilledCircle::new(
        cursor.x,
        cursor.y,
        CURSOR_RADIUS,
        scene.color().to_color(),
    ));
    ctx.layer();

    for star in scene.stars() {
        let vertices = star.vertices().map(to_canvas);
        ctx.draw(&FilledPolygon {
            vertices: &vertices,
            color: star.color.to_color(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use banjak_core::{CANVAS_WIDTH, MarkerStyle};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::style::Color;
    use ratatui::widgets::canvas::Canvas;

    const WIDTH: u16 = 80;
    const HEIGHT: u16 = 24;

    fn render(scene: &Scene) -> Buffer {
        let backend = TestBackend::new(WIDTH, HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let canvas = Canvas::default()
                    .marker(MarkerStyle::Braille.marker())
                    .background_color(Rgb::BLACK.to_color())
                    .x_bounds([0.0, CANVAS_WIDTH])
                    .y_bounds([0.0, CANVAS_HEIGHT])
                    .paint(|ctx| paint_scene(ctx, scene, Rgb::BLACK));
                frame.render_widget(canvas, frame.area());
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    /// The cell a scene point falls into, given the canvas fills the terminal.
    fn cell_of(p: Point) -> (u16, u16) {
        let flipped = to_canvas(p);
        let px = (flipped.x * (f64::from(WIDTH) * 2.0 - 1.0) / CANVAS_WIDTH) as u16;
        let py =
            ((CANVAS_HEIGHT - flipped.y) * (f64::from(HEIGHT) * 4.0 - 1.0) / CANVAS_HEIGHT) as u16;
        (px / 2, py / 4)
    }

    fn region_has_color(buffer: &Buffer, center: (u16, u16), reach: u16, color: Color) -> bool {
        let area = Rect::new(0, 0, WIDTH, HEIGHT);
        for dy in -(reach as i32)..=reach as i32 {
            for dx in -(reach as i32)..=reach as i32 {
                let x = center.0 as i32 + dx;
                let y = center.1 as i32 + dy;
                if x < 0 || y < 0 || x >= area.width as i32 || y >= area.height as i32 {
                    continue;
                }
                if let Some(cell) = buffer.cell((x as u16, y as u16))
                    && cell.fg == color
                {
                    return true;
                }
            }
        }
        false
    }

    #[test]
    fn test_initial_frame_places_every_fixed_shape() {
        let scene = Scene::with_seed(1);
        let buffer = render(&scene);

        // Stars at their scene positions, in their starting colors.
        assert!(region_has_color(
            &buffer,
            cell_of(Point::new(200.0, 150.0)),
            1,
            Color::Rgb(0xFF, 0xFF, 0x00),
        ));
        assert!(region_has_color(
            &buffer,
            cell_of(Point::new(600.0, 150.0)),
            1,
            Color::Rgb(0xFF, 0x00, 0xFF),
        ));
        assert!(region_has_color(
            &buffer,
            cell_of(Point::new(400.0, 450.0)),
            1,
            Color::Rgb(0x00, 0xFF, 0xFF),
        ));

        // Both triangles and the cursor disc.
        assert!(region_has_color(
            &buffer,
            cell_of(Point::new(100.0, 100.0)),
            2,
            Color::Rgb(0xFF, 0x00, 0x00),
        ));
        assert!(region_has_color(
            &buffer,
            cell_of(Point::new(700.0, 500.0)),
            2,
            Color::Rgb(0x00, 0xFF, 0x00),
        ));
        assert!(region_has_color(
            &buffer,
            cell_of(Point::new(400.0, 300.0)),
            2,
            Color::Rgb(0x00, 0xFF, 0x00),
        ));
    }

    #[test]
    fn test_trail_particles_show_up_faded() {
        let mut scene = Scene::with_seed(1);
        scene.pointer_moved(Point::new(500.0, 80.0));
        for _ in 0..25 {
            scene.tick();
        }

        let particle = &scene.particles()[0];
        let expected = particle
            .color
            .blend(Rgb::BLACK, particle.alpha())
            .to_color();

        let buffer = render(&scene);
        assert!(region_has_color(&buffer, cell_of(particle.pos), 2, expected));
    }

    #[test]
    fn test_empty_regions_keep_the_background() {
        let scene = Scene::with_seed(1);
        let buffer = render(&scene);

        // Nothing lives near the top-right corner of the scene.
        let (cx, cy) = cell_of(Point::new(780.0, 20.0));
        let cell = buffer.cell((cx, cy)).unwrap();
        assert_eq!(cell.symbol(), " ");
    }
}
