//! Particle field simulation
//!
//! Pure and deterministic for a given seed:
//! - One `step` per displayed frame, no time scaling
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod links;
pub mod particle;
pub mod state;
pub mod step;

pub use links::{Link, link_alpha, links};
pub use particle::Particle;
pub use state::{Density, FieldState, Viewport};
pub use step::step;
