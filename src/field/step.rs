//! Per-frame update
//!
//! The field runs at display refresh rate with no time scaling: every
//! displayed frame advances each particle by exactly one velocity step.

use super::state::FieldState;

/// Advance the whole field by one frame
pub fn step(state: &mut FieldState) {
    let viewport = state.viewport();
    for particle in state.particles_mut() {
        particle.advance(viewport);
    }
    state.bump_frame();
}
