//! Field rendering
//!
//! Draws the particle field through the small set of 2D primitives in
//! [`Surface`]. The browser implements it over a canvas 2D context; tests
//! and the native preview use [`RecordingSurface`].

pub mod color;
pub mod recording;

pub use color::Rgba;
pub use recording::{DrawCommand, RecordingSurface};

use glam::Vec2;

use crate::field::{FieldState, links};

/// Primitive 2D drawing operations
pub trait Surface {
    /// Clear the rectangle (0, 0)..(width, height)
    fn clear(&mut self, width: f32, height: f32);
    fn set_fill_color(&mut self, color: Rgba);
    fn set_stroke_color(&mut self, color: Rgba);
    fn set_line_width(&mut self, width: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32);
    fn stroke_line(&mut self, from: Vec2, to: Vec2);
}

/// Counts from one rendered frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub dots: usize,
    pub lines: usize,
}

/// Render one frame: clear, dots, then proximity lines
pub fn draw_field<S: Surface + ?Sized>(surface: &mut S, state: &FieldState) -> FrameStats {
    let viewport = state.viewport();
    let settings = state.settings();
    let particles = state.particles();

    surface.clear(viewport.width, viewport.height);

    surface.set_fill_color(settings.dot_color);
    for p in particles {
        surface.fill_circle(p.pos, p.radius);
    }

    let mut lines = 0;
    surface.set_line_width(settings.link_width);
    for link in links(particles, settings.link_distance, settings.max_link_alpha) {
        surface.set_stroke_color(settings.line_color.with_alpha(link.alpha));
        surface.stroke_line(particles[link.a].pos, particles[link.b].pos);
        lines += 1;
    }

    FrameStats {
        dots: particles.len(),
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{Particle, Viewport};
    use crate::settings::FieldSettings;

    /// A field with hand-placed particles
    fn field_with(positions: &[(f32, f32)]) -> FieldState {
        let mut state = FieldState::new(1, Viewport::new(1000.0, 800.0), FieldSettings::default());
        let particles = state.particles_mut();
        for (p, &(x, y)) in particles.iter_mut().zip(positions) {
            *p = Particle::new(Vec2::new(x, y), Vec2::ZERO, 2.0);
        }
        // Park the rest far apart along the bottom so they never link
        for (i, p) in particles.iter_mut().enumerate().skip(positions.len()) {
            let far = i as f32 * 200.0;
            *p = Particle::new(Vec2::new(far, 5_000.0 + far), Vec2::ZERO, 2.0);
        }
        state
    }

    #[test]
    fn test_frame_starts_with_clear() {
        let state = field_with(&[]);
        let mut surface = RecordingSurface::default();
        draw_field(&mut surface, &state);
        assert_eq!(
            surface.commands()[0],
            DrawCommand::Clear {
                width: 1000.0,
                height: 800.0
            }
        );
    }

    #[test]
    fn test_every_particle_is_drawn_in_accent() {
        let state = field_with(&[]);
        let mut surface = RecordingSurface::default();
        let stats = draw_field(&mut surface, &state);
        assert_eq!(stats.dots, 90);
        assert_eq!(surface.circles().count(), 90);
        assert!(
            surface
                .commands()
                .contains(&DrawCommand::FillColor(Rgba::new(129, 140, 248, 0.9)))
        );
    }

    #[test]
    fn test_lines_only_for_close_pairs() {
        // (0,1) at 100, (1,2) at 150, (0,2) at 250
        let state = field_with(&[(100.0, 100.0), (200.0, 100.0), (350.0, 100.0)]);
        let mut surface = RecordingSurface::default();
        let stats = draw_field(&mut surface, &state);
        assert_eq!(stats.lines, 1);

        let lines: Vec<_> = surface.lines().collect();
        assert_eq!(lines.len(), 1);
        let (from, to, color, width) = lines[0];
        assert_eq!(from, Vec2::new(100.0, 100.0));
        assert_eq!(to, Vec2::new(200.0, 100.0));
        assert_eq!(width, 1.0);
        let expected = (1.0 - 100.0 / 140.0) * 0.5;
        assert!((color.a - expected).abs() < 1e-6);
        assert_eq!((color.r, color.g, color.b), (129, 140, 248));
    }
}
