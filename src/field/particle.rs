//! A single drifting point

use glam::Vec2;
use rand::Rng;

use super::state::Viewport;
use crate::settings::FieldSettings;

/// A particle drawn as a small filled circle
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// Displacement per frame
    pub vel: Vec2,
    pub radius: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Spawn at a uniform position inside the viewport with a small random drift
    pub fn random<R: Rng>(rng: &mut R, viewport: Viewport, settings: &FieldSettings) -> Self {
        let pos = Vec2::new(
            rng.random::<f32>() * viewport.width,
            rng.random::<f32>() * viewport.height,
        );
        let vel = Vec2::new(
            (rng.random::<f32>() - 0.5) * 2.0 * settings.max_speed,
            (rng.random::<f32>() - 0.5) * 2.0 * settings.max_speed,
        );
        let radius =
            settings.min_radius + rng.random::<f32>() * (settings.max_radius - settings.min_radius);
        Self { pos, vel, radius }
    }

    /// Move by one frame of velocity, then reflect off any edge that was crossed.
    ///
    /// Position is not clamped: a particle may sit up to one step outside the
    /// viewport before the flipped velocity carries it back in.
    pub fn advance(&mut self, viewport: Viewport) {
        self.pos += self.vel;
        if self.pos.x < 0.0 || self.pos.x > viewport.width {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < 0.0 || self.pos.y > viewport.height {
            self.vel.y = -self.vel.y;
        }
    }
}
