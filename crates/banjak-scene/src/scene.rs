//! The scene: owned state, animation driver and pointer dispatch.

use banjak_core::{EMIT_THRESHOLD, PARTICLE_LIFE, Point, Rgb};
use fastrand::Rng;

use crate::particle::{Particle, ParticleId};
use crate::star::{Star, StarId};
use crate::triangle::{Triangle, TriangleId};

/// What a pointer position lands on. Stars sit above the background, so a
/// point inside a star never reaches the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Star(StarId),
    Background,
}

/// Complete mutable state of the playground.
///
/// The front end drives it through [`Scene::pointer_moved`],
/// [`Scene::pointer_pressed`] and [`Scene::tick`]; the renderer reads the
/// accessors back out. All randomness flows through the owned [`Rng`], so a
/// seeded scene replays the same run.
#[derive(Debug)]
pub struct Scene {
    /// Last pointer position accepted by the background, in scene coordinates.
    position: Point,
    /// Current draw color for the cursor disc and newly emitted particles.
    color: Rgb,
    stars: Vec<Star>,
    particles: Vec<Particle>,
    triangles: Vec<Triangle>,
    /// Star currently under the pointer, if any.
    hovered: Option<StarId>,
    next_particle_id: u64,
    rng: Rng,
}

impl Scene {
    pub fn new() -> Self {
        Self::with_rng(Rng::new())
    }

    /// A scene whose random draws replay deterministically.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(Rng::with_seed(seed))
    }

    fn with_rng(rng: Rng) -> Self {
        Self {
            position: Point::new(400.0, 300.0),
            color: Rgb(0x00FF00),
            stars: vec![
                Star::new(1, 200.0, 150.0, 0xFFFF00),
                Star::new(2, 600.0, 150.0, 0xFF00FF),
                Star::new(3, 400.0, 450.0, 0x00FFFF),
            ],
            particles: Vec::new(),
            triangles: vec![
                Triangle::new(1, 100.0, 100.0, 0xFF0000),
                Triangle::new(2, 700.0, 500.0, 0x00FF00),
            ],
            hovered: None,
            next_particle_id: 0,
            rng,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Advance the scene by one fixed animation step.
    ///
    /// Every live particle integrates and spends one life, expired ones are
    /// compacted away in place, and every triangle turns a little.
    pub fn tick(&mut self) {
        self.particles.retain_mut(|p| {
            p.step();
            p.alive()
        });
        for triangle in &mut self.triangles {
            triangle.spin();
        }
    }

    /// The topmost shape under `p`.
    ///
    /// Later stars draw above earlier ones, so they are tested in reverse.
    pub fn hit_test(&self, p: Point) -> Hit {
        self.stars
            .iter()
            .rev()
            .find(|star| star.contains(p))
            .map(|star| Hit::Star(star.id))
            .unwrap_or(Hit::Background)
    }

    /// Route a pointer move to whatever it lands on.
    ///
    /// Over a star the move only updates hover state; the background never
    /// sees it, so nothing is emitted and the tracked position stays put.
    pub fn pointer_moved(&mut self, p: Point) {
        match self.hit_test(p) {
            Hit::Star(id) => self.set_hovered(Some(id)),
            Hit::Background => {
                self.set_hovered(None);
                if (p.x - self.position.x).abs() > EMIT_THRESHOLD
                    || (p.y - self.position.y).abs() > EMIT_THRESHOLD
                {
                    self.emit_particle();
                }
                self.position = p;
            }
        }
    }

    /// Route a pointer press: recolor the star it hits, or pick a fresh draw
    /// color when it reaches the background.
    pub fn pointer_pressed(&mut self, p: Point) {
        match self.hit_test(p) {
            Hit::Star(id) => {
                let color = self.random_color();
                if let Some(star) = self.star_mut(id) {
                    star.color = color;
                }
            }
            Hit::Background => {
                self.color = self.random_color();
            }
        }
    }

    fn set_hovered(&mut self, id: Option<StarId>) {
        if self.hovered == id {
            return;
        }
        if let Some(previous) = self.hovered
            && let Some(star) = self.star_mut(previous)
        {
            star.set_hovered(false);
        }
        if let Some(current) = id
            && let Some(star) = self.star_mut(current)
        {
            star.set_hovered(true);
        }
        self.hovered = id;
    }

    /// Spawn a particle at the previous tracked position with a random kick
    /// biased upward.
    fn emit_particle(&mut self) {
        let vx = (self.rng.f64() - 0.5) * 3.0;
        let vy = (self.rng.f64() - 0.5) * 3.0 - 2.0;
        let id = ParticleId(self.next_particle_id);
        self.next_particle_id += 1;
        self.particles.push(Particle {
            id,
            pos: self.position,
            vx,
            vy,
            life: PARTICLE_LIFE,
            color: self.color,
        });
    }

    fn random_color(&mut self) -> Rgb {
        Rgb(self.rng.u32(..=0xFFFFFF))
    }

    fn star_mut(&mut self, id: StarId) -> Option<&mut Star> {
        self.stars.iter_mut().find(|star| star.id == id)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
