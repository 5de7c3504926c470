//! Numeric constants that define the scene and its pacing.

use std::time::Duration;

/// Width of the virtual canvas in scene units.
pub const CANVAS_WIDTH: f64 = 800.0;

/// Height of the virtual canvas in scene units.
pub const CANVAS_HEIGHT: f64 = 600.0;

/// Interval between animation ticks (roughly 60 per second).
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Radius of the cursor disc that follows the pointer.
pub const CURSOR_RADIUS: f64 = 30.0;

/// Radius of a trail particle.
pub const PARTICLE_RADIUS: f64 = 3.0;

/// Life of a freshly emitted particle, in ticks.
pub const PARTICLE_LIFE: i32 = 50;

/// Added to a particle's vertical velocity each tick.
pub const GRAVITY: f64 = 0.1;

/// Pointer travel per axis beyond which a trail particle is emitted.
pub const EMIT_THRESHOLD: f64 = 5.0;

/// Distance from a triangle's center to each of its vertices.
pub const TRIANGLE_RADIUS: f64 = 30.0;

/// Radians added to every triangle's rotation each tick.
pub const TRIANGLE_SPIN: f64 = 0.02;

/// Number of spikes on a star outline.
pub const STAR_SPIKES: usize = 5;

/// Distance from a star's center to a spike tip, at scale 1.
pub const STAR_OUTER_RADIUS: f64 = 20.0;

/// Distance from a star's center to the notch between spikes, at scale 1.
pub const STAR_INNER_RADIUS: f64 = 10.0;

/// Star scale when the pointer is not over it.
pub const STAR_REST_SCALE: f64 = 1.0;

/// Star scale while the pointer hovers it.
pub const STAR_HOVER_SCALE: f64 = 1.5;
