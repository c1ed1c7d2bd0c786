//! Proximity links between particles
//!
//! Every unordered pair closer than the link distance gets a line whose
//! alpha falls off linearly with distance. O(n²) per frame, which is fine
//! for the at most ~100 particles the page spawns.

use super::particle::Particle;

/// A line to draw between particles `a` and `b` (`a < b`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
    pub alpha: f32,
}

/// Alpha for a pair `distance` apart, or `None` if they are too far to link.
///
/// `(1 - distance / link_distance) * max_alpha`, strictly below the threshold.
#[inline]
pub fn link_alpha(distance: f32, link_distance: f32, max_alpha: f32) -> Option<f32> {
    if distance < link_distance {
        Some((1.0 - distance / link_distance) * max_alpha)
    } else {
        None
    }
}

/// All links for a particle set, in (a, b) lexicographic order
pub fn links(
    particles: &[Particle],
    link_distance: f32,
    max_alpha: f32,
) -> impl Iterator<Item = Link> + '_ {
    particles.iter().enumerate().flat_map(move |(a, p1)| {
        particles[a + 1..]
            .iter()
            .enumerate()
            .filter_map(move |(offset, p2)| {
                let distance = p1.pos.distance(p2.pos);
                link_alpha(distance, link_distance, max_alpha).map(|alpha| Link {
                    a,
                    b: a + 1 + offset,
                    distance,
                    alpha,
                })
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn at(x: f32, y: f32) -> Particle {
        Particle::new(Vec2::new(x, y), Vec2::ZERO, 2.0)
    }

    #[test]
    fn test_alpha_scales_with_proximity() {
        assert_eq!(link_alpha(0.0, 140.0, 0.5), Some(0.5));
        assert_eq!(link_alpha(70.0, 140.0, 0.5), Some(0.25));
        assert!(link_alpha(139.0, 140.0, 0.5).unwrap() > 0.0);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert_eq!(link_alpha(140.0, 140.0, 0.5), None);
        assert_eq!(link_alpha(500.0, 140.0, 0.5), None);
    }

    #[test]
    fn test_links_each_pair_once() {
        let particles = vec![at(0.0, 0.0), at(30.0, 40.0), at(60.0, 80.0)];
        let found: Vec<_> = links(&particles, 140.0, 0.5).collect();
        let pairs: Vec<_> = found.iter().map(|l| (l.a, l.b)).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
        assert_eq!(found[0].distance, 50.0);
        assert_eq!(found[1].distance, 100.0);
    }

    #[test]
    fn test_far_pairs_are_skipped() {
        // 3-4-5 triangle scaled so (0, 2) is exactly at the threshold
        let particles = vec![at(0.0, 0.0), at(84.0, 0.0), at(84.0, 112.0)];
        let pairs: Vec<_> = links(&particles, 140.0, 0.5).map(|l| (l.a, l.b)).collect();
        assert_eq!(pairs, vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn test_no_links_for_single_particle() {
        assert_eq!(links(&[at(1.0, 1.0)], 140.0, 0.5).count(), 0);
        assert_eq!(links(&[], 140.0, 0.5).count(), 0);
    }
}
