//! Portfolio page behavior layer
//!
//! Core modules:
//! - `field`: Particle field simulation (pure, seeded, platform independent)
//! - `renderer`: Draws the field onto a 2D `Surface`
//! - `router`: Single-page section navigation
//! - `modal`: Resume and certificate preview overlays
//! - `settings`: Tunables and DOM hooks
//! - `web`: Browser bindings (wasm32 only)

pub mod error;
pub mod field;
pub mod modal;
pub mod renderer;
pub mod router;
pub mod settings;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::{PageError, PageResult};
pub use field::{Density, FieldState, Particle, Viewport};
pub use modal::{CertificateCatalog, Document, DocumentModal, ModalKind, Modals};
pub use renderer::{Rgba, Surface, draw_field};
pub use router::{NavButton, Router, Section};
pub use settings::Settings;

/// Page configuration constants
pub mod consts {
    /// Viewports narrower than this get the compact particle count
    pub const COMPACT_WIDTH_THRESHOLD: f32 = 600.0;
    pub const COMPACT_PARTICLE_COUNT: usize = 40;
    pub const FULL_PARTICLE_COUNT: usize = 90;

    /// Particles closer than this are joined by a line
    pub const LINK_DISTANCE: f32 = 140.0;
    /// Line alpha for two coincident particles
    pub const MAX_LINK_ALPHA: f32 = 0.5;
    pub const LINK_WIDTH: f32 = 1.0;

    /// Velocity components are drawn from [-MAX_SPEED, MAX_SPEED)
    pub const MAX_SPEED: f32 = 0.25;
    pub const MIN_RADIUS: f32 = 1.0;
    pub const MAX_RADIUS: f32 = 3.0;

    /// Indigo accent shared by dots and lines
    pub const ACCENT_RGB: (u8, u8, u8) = (129, 140, 248);
    pub const DOT_ALPHA: f32 = 0.9;

    /// Section shown on page load
    pub const HOME_SECTION: &str = "home";

    pub const RESUME_PATH: &str = "assets/resume.pdf";
}
