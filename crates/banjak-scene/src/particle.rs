//! Trail particles emitted behind the pointer.

use banjak_core::{GRAVITY, PARTICLE_LIFE, Point, Rgb};

/// Identity of a particle, unique for the lifetime of a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticleId(pub u64);

/// A single trail particle.
#[derive(Debug, Clone)]
pub struct Particle {
    pub id: ParticleId,
    /// Current position in scene coordinates.
    pub pos: Point,
    /// Horizontal velocity in scene units per tick.
    pub vx: f64,
    /// Vertical velocity in scene units per tick, positive downward.
    pub vy: f64,
    /// Remaining life in ticks.
    pub life: i32,
    /// Draw color captured at emission.
    pub color: Rgb,
}

impl Particle {
    /// Advance one tick: integrate position, spend one life, apply gravity.
    ///
    /// Position integrates the pre-gravity velocity, so gravity first shows
    /// up in the position one tick after it was added.
    pub(crate) fn step(&mut self) {
        self.pos.x += self.vx;
        self.pos.y += self.vy;
        self.life -= 1;
        self.vy += GRAVITY;
    }

    /// Whether the particle survives into the next frame.
    pub(crate) fn alive(&self) -> bool {
        self.life > 0
    }

    /// Opacity in `[0, 1]`, proportional to remaining life.
    pub fn alpha(&self) -> f64 {
        f64::from(self.life) / f64::from(PARTICLE_LIFE)
    }
}
