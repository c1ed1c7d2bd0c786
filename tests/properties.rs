//! Property tests for the field, router and modals

use glam::Vec2;
use portfolio_web::field::{self, links};
use portfolio_web::modal::{CertificateCatalog, ModalKind, Modals};
use portfolio_web::renderer::{RecordingSurface, draw_field};
use portfolio_web::router::{NavButton, Router, Section};
use portfolio_web::settings::FieldSettings;
use portfolio_web::{FieldState, Particle, Viewport};
use proptest::prelude::*;

fn viewport() -> impl Strategy<Value = Viewport> {
    (0.0f32..3000.0, 0.0f32..2000.0).prop_map(|(w, h)| Viewport::new(w, h))
}

proptest! {
    #[test]
    fn particle_count_is_two_tier(seed in any::<u64>(), first in viewport(), second in viewport()) {
        let mut state = FieldState::new(seed, first, FieldSettings::default());
        state.resize(second);
        let expected = if second.width < 600.0 { 40 } else { 90 };
        prop_assert_eq!(state.particles().len(), expected);
        prop_assert_eq!(state.viewport(), second);
    }

    #[test]
    fn positions_stay_within_one_step(
        seed in any::<u64>(),
        vp in viewport(),
        frames in 1usize..400,
    ) {
        let mut state = FieldState::new(seed, vp, FieldSettings::default());
        for _ in 0..frames {
            field::step(&mut state);
            for p in state.particles() {
                let slack = p.vel.abs() + Vec2::splat(1e-3);
                prop_assert!(p.pos.x >= -slack.x && p.pos.x <= vp.width + slack.x);
                prop_assert!(p.pos.y >= -slack.y && p.pos.y <= vp.height + slack.y);
            }
        }
    }

    #[test]
    fn crossing_a_boundary_flips_velocity(
        x in -1.0f32..101.0,
        y in -1.0f32..101.0,
        vx in -0.25f32..0.25,
        vy in -0.25f32..0.25,
    ) {
        let vp = Viewport::new(100.0, 100.0);
        let mut p = Particle::new(Vec2::new(x, y), Vec2::new(vx, vy), 2.0);
        p.advance(vp);
        let out_x = p.pos.x < 0.0 || p.pos.x > vp.width;
        let out_y = p.pos.y < 0.0 || p.pos.y > vp.height;
        prop_assert_eq!(p.vel.x, if out_x { -vx } else { vx });
        prop_assert_eq!(p.vel.y, if out_y { -vy } else { vy });
    }

    #[test]
    fn line_iff_closer_than_threshold(
        points in prop::collection::vec((0.0f32..600.0, 0.0f32..600.0), 0..30)
    ) {
        let particles: Vec<Particle> = points
            .iter()
            .map(|&(x, y)| Particle::new(Vec2::new(x, y), Vec2::ZERO, 1.0))
            .collect();
        let found: Vec<_> = links(&particles, 140.0, 0.5).collect();

        let mut expected = 0;
        for i in 0..particles.len() {
            for j in i + 1..particles.len() {
                let d = particles[i].pos.distance(particles[j].pos);
                let link = found.iter().find(|l| l.a == i && l.b == j);
                if d < 140.0 {
                    expected += 1;
                    let link = link.expect("close pair must be linked");
                    prop_assert!((link.alpha - (1.0 - d / 140.0) * 0.5).abs() < 1e-6);
                    prop_assert!(link.alpha > 0.0 && link.alpha <= 0.5);
                } else {
                    prop_assert!(link.is_none());
                }
            }
        }
        prop_assert_eq!(found.len(), expected);
    }

    #[test]
    fn rendered_lines_match_links(seed in any::<u64>(), vp in viewport()) {
        let state = FieldState::new(seed, vp, FieldSettings::default());
        let mut surface = RecordingSurface::default();
        let stats = draw_field(&mut surface, &state);
        let settings = state.settings();
        let expected =
            links(state.particles(), settings.link_distance, settings.max_link_alpha).count();
        prop_assert_eq!(stats.lines, expected);
        prop_assert_eq!(surface.lines().count(), expected);
        prop_assert_eq!(surface.circles().count(), state.particles().len());
    }

    #[test]
    fn show_section_leaves_exactly_one_visible(ops in prop::collection::vec(0usize..6, 1..40)) {
        let ids = ["home", "about", "skills", "projects", "contact"];
        let mut router = Router::new(
            ids.iter().map(|id| Section::new(*id).with_reveal()).collect(),
            ids.iter().map(|id| NavButton::new(*id)).collect(),
        );
        router.show_section("home");
        let mut current = "home";

        for op in ops {
            // Index 5 is an unknown id and must change nothing
            let id = ids.get(op).copied().unwrap_or("missing");
            if router.show_section(id) {
                current = id;
            }
            let visible: Vec<_> = router.sections().iter().filter(|s| s.visible).collect();
            prop_assert_eq!(visible.len(), 1);
            prop_assert_eq!(visible[0].id.as_str(), current);
            let active: Vec<_> = router.nav().iter().filter(|b| b.active).collect();
            prop_assert_eq!(active.len(), 1);
            prop_assert_eq!(active[0].target.as_str(), current);
        }
    }

    #[test]
    fn close_always_blanks_the_frame(
        opens in prop::collection::vec(
            prop::sample::select(vec!["web-dev", "git-github", "nope", ""]),
            0..5,
        ),
        resume in any::<bool>(),
    ) {
        let mut modals = Modals::new("assets/resume.pdf", CertificateCatalog::default());
        if resume {
            modals.open_resume();
        }
        for key in &opens {
            modals.open_certificate(key);
        }
        for kind in ModalKind::ALL {
            modals.close(kind);
            prop_assert!(!modals.modal(kind).is_visible());
            prop_assert_eq!(modals.modal(kind).frame_src(), None);
        }
    }
}
