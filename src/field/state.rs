//! Field state: viewport plus the particle set it owns

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::particle::Particle;
use crate::settings::FieldSettings;

/// Drawable area in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True if `pos` lies within [0, width] x [0, height]
    pub fn contains(&self, pos: Vec2) -> bool {
        (0.0..=self.width).contains(&pos.x) && (0.0..=self.height).contains(&pos.y)
    }
}

/// Particle density tier, chosen from viewport width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Density {
    /// Narrow (phone-sized) viewports
    Compact,
    Full,
}

/// The simulated particle field
#[derive(Debug, Clone)]
pub struct FieldState {
    viewport: Viewport,
    particles: Vec<Particle>,
    settings: FieldSettings,
    rng: Pcg32,
    /// Frames advanced since the last (re)population
    frame: u64,
}

impl FieldState {
    /// Create a populated field for the given viewport
    pub fn new(seed: u64, viewport: Viewport, settings: FieldSettings) -> Self {
        let mut state = Self {
            viewport,
            particles: Vec::new(),
            settings,
            rng: Pcg32::seed_from_u64(seed),
            frame: 0,
        };
        state.populate();
        state
    }

    /// Adopt new viewport dimensions and regenerate every particle.
    ///
    /// This is a full reset: the count is recomputed for the new width and
    /// all positions are re-randomised.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.populate();
    }

    fn populate(&mut self) {
        let count = self.settings.particle_count(self.viewport.width);
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let p = Particle::random(&mut self.rng, self.viewport, &self.settings);
            self.particles.push(p);
        }
        self.frame = 0;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn density(&self) -> Density {
        self.settings.density(self.viewport.width)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn settings(&self) -> &FieldSettings {
        &self.settings
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub(super) fn bump_frame(&mut self) {
        self.frame += 1;
    }
}
