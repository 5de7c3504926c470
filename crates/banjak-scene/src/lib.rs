//! Scene state and simulation for the banjak particle playground.
//!
//! This crate owns everything that changes over time: the tracked pointer
//! position and draw color, the trail particles, the spinning triangles and
//! the hover-reactive stars. The terminal front end feeds it pointer events
//! and fixed ticks; the canvas crate reads it back out to paint a frame.

mod particle;
mod scene;
mod star;
mod triangle;

pub use particle::{Particle, ParticleId};
pub use scene::{Hit, Scene};
pub use star::{Star, StarId};
pub use triangle::{Triangle, TriangleId};
