//! Drifting particle field with proximity links

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::FieldConfig;

/// A single drifting point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
}

impl Particle {
    /// Advance one frame, then flip velocity on any axis now outside `[0, extent]`.
    ///
    /// Position is not clamped back, so a particle can sit just past the
    /// edge for a frame or two while it travels back in.
    pub fn advance(&mut self, width: f64, height: f64) {
        self.pos += self.vel;
        if self.pos.x < 0.0 || self.pos.x > width {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < 0.0 || self.pos.y > height {
            self.vel.y = -self.vel.y;
        }
    }
}

/// A line between two nearby particles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: DVec2,
    pub to: DVec2,
    pub alpha: f64,
}

/// Line alpha for a pair at `distance`: linear fade from `max_alpha` at 0
/// to 0 at `threshold`, never negative.
#[inline]
pub fn link_alpha(distance: f64, threshold: f64, max_alpha: f64) -> f64 {
    if distance >= threshold {
        return 0.0;
    }
    max_alpha * (1.0 - distance / threshold)
}

/// Fixed-size particle population on a resizable surface
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    config: FieldConfig,
}

impl ParticleField {
    /// Scatter `config.count` particles uniformly over the surface
    pub fn new<R: Rng>(width: f64, height: f64, config: FieldConfig, rng: &mut R) -> Self {
        let speed = config.max_speed;
        let particles = (0..config.count)
            .map(|_| Particle {
                pos: DVec2::new(sample(rng, 0.0, width), sample(rng, 0.0, height)),
                vel: DVec2::new(sample(rng, -speed, speed), sample(rng, -speed, speed)),
                radius: sample(rng, config.min_radius, config.max_radius),
            })
            .collect();

        Self {
            particles,
            width,
            height,
            config,
        }
    }

    /// Deterministic field for a given seed
    pub fn from_seed(seed: u64, width: f64, height: f64, config: FieldConfig) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        Self::new(width, height, config, &mut rng)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Change surface bounds. Existing positions are left as they are.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Move every particle one frame
    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.advance(w, h);
        }
    }

    /// All unordered pairs closer than the link distance.
    ///
    /// O(n²), fine for the small fixed population this is used with.
    pub fn links(&self) -> Vec<Link> {
        let threshold = self.config.link_distance;
        let max_alpha = self.config.link_alpha;
        let mut links = Vec::new();

        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let d = a.pos.distance(b.pos);
                if d < threshold {
                    links.push(Link {
                        from: a.pos,
                        to: b.pos,
                        alpha: link_alpha(d, threshold, max_alpha),
                    });
                }
            }
        }
        links
    }
}

/// Uniform sample in `[lo, hi)`, tolerating an empty or unbounded range
fn sample<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi > lo && (hi - lo).is_finite() {
        rng.random_range(lo..hi)
    } else {
        lo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn field() -> ParticleField {
        ParticleField::from_seed(7, 800.0, 600.0, FieldConfig::default())
    }

    #[test]
    fn test_new_field_respects_ranges() {
        let field = field();
        assert_eq!(field.len(), 90);
        for p in field.particles() {
            assert!(p.pos.x >= 0.0 && p.pos.x < 800.0);
            assert!(p.pos.y >= 0.0 && p.pos.y < 600.0);
            assert!(p.vel.x.abs() <= 0.3 && p.vel.y.abs() <= 0.3);
            assert!(p.radius >= 0.8 && p.radius < 2.6);
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = field();
        let b = field();
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn test_count_never_changes() {
        let mut field = field();
        for i in 0..500 {
            field.step();
            if i == 250 {
                field.resize(100.0, 50.0);
            }
            assert_eq!(field.len(), 90);
        }
    }

    #[test]
    fn test_bounce_right_edge() {
        let mut p = Particle {
            pos: DVec2::new(99.9, 50.0),
            vel: DVec2::new(0.3, 0.2),
            radius: 1.0,
        };
        p.advance(100.0, 100.0);
        assert_eq!(p.vel, DVec2::new(-0.3, 0.2));
        // Not clamped back into bounds
        assert!(p.pos.x > 100.0);
    }

    #[test]
    fn test_bounce_top_edge() {
        let mut p = Particle {
            pos: DVec2::new(50.0, 0.1),
            vel: DVec2::new(-0.1, -0.25),
            radius: 1.0,
        };
        p.advance(100.0, 100.0);
        assert_eq!(p.vel, DVec2::new(-0.1, 0.25));
    }

    #[test]
    fn test_particle_on_edge_does_not_bounce() {
        let mut p = Particle {
            pos: DVec2::new(99.0, 50.0),
            vel: DVec2::new(1.0, 0.0),
            radius: 1.0,
        };
        p.advance(100.0, 100.0);
        assert_eq!(p.pos.x, 100.0);
        assert_eq!(p.vel.x, 1.0);
    }

    #[test]
    fn test_resize_does_not_move_particles() {
        let mut field = field();
        let before: Vec<DVec2> = field.particles().iter().map(|p| p.pos).collect();
        field.resize(10.0, 10.0);
        let after: Vec<DVec2> = field.particles().iter().map(|p| p.pos).collect();
        assert_eq!(before, after);
        assert_eq!(field.size(), (10.0, 10.0));
    }

    #[test]
    fn test_link_alpha_endpoints() {
        assert!((link_alpha(0.0, 120.0, 0.06) - 0.06).abs() < 1e-12);
        assert_eq!(link_alpha(120.0, 120.0, 0.06), 0.0);
        assert_eq!(link_alpha(500.0, 120.0, 0.06), 0.0);
        assert!((link_alpha(60.0, 120.0, 0.06) - 0.03).abs() < 1e-12);
    }

    #[test]
    fn test_links_only_close_pairs() {
        let config = FieldConfig {
            count: 0,
            ..Default::default()
        };
        let mut field = ParticleField::from_seed(1, 500.0, 500.0, config);
        field.particles = vec![
            Particle { pos: DVec2::new(0.0, 0.0), vel: DVec2::ZERO, radius: 1.0 },
            Particle { pos: DVec2::new(30.0, 40.0), vel: DVec2::ZERO, radius: 1.0 },
            Particle { pos: DVec2::new(400.0, 400.0), vel: DVec2::ZERO, radius: 1.0 },
        ];
        let links = field.links();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].from, DVec2::new(0.0, 0.0));
        assert_eq!(links[0].to, DVec2::new(30.0, 40.0));
        // distance 50
        assert!((links[0].alpha - 0.06 * (1.0 - 50.0 / 120.0)).abs() < 1e-12);
    }

    #[test]
    fn test_zero_count_field_is_empty() {
        let config = FieldConfig {
            count: 0,
            ..Default::default()
        };
        let mut field = ParticleField::from_seed(3, 100.0, 100.0, config);
        field.step();
        assert!(field.is_empty());
        assert!(field.links().is_empty());
    }

    #[test]
    fn test_unbounded_range_samples_low_end() {
        // Width of this range overflows to infinity
        let config = FieldConfig {
            count: 4,
            max_speed: f64::MAX,
            ..Default::default()
        };
        let field = ParticleField::from_seed(9, 100.0, 100.0, config);
        for p in field.particles() {
            assert_eq!(p.vel, DVec2::splat(-f64::MAX));
        }
    }

    proptest! {
        #[test]
        fn prop_bounce_flips_only_crossed_axis(
            x in 0.0f64..100.0,
            y in 0.0f64..100.0,
            vx in -0.3f64..0.3,
            vy in -0.3f64..0.3,
        ) {
            let mut p = Particle { pos: DVec2::new(x, y), vel: DVec2::new(vx, vy), radius: 1.0 };
            p.advance(100.0, 100.0);
            let out_x = p.pos.x < 0.0 || p.pos.x > 100.0;
            let out_y = p.pos.y < 0.0 || p.pos.y > 100.0;
            prop_assert_eq!(p.vel.x, if out_x { -vx } else { vx });
            prop_assert_eq!(p.vel.y, if out_y { -vy } else { vy });
        }

        #[test]
        fn prop_link_alpha_monotonic(a in 0.0f64..=120.0, b in 0.0f64..=120.0) {
            let (near, far) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(link_alpha(near, 120.0, 0.06) >= link_alpha(far, 120.0, 0.06));
            prop_assert!(link_alpha(far, 120.0, 0.06) >= 0.0);
        }

        #[test]
        fn prop_count_invariant(seed in any::<u64>(), steps in 0usize..200) {
            let mut field = ParticleField::from_seed(seed, 640.0, 480.0, FieldConfig::default());
            for _ in 0..steps {
                field.step();
            }
            prop_assert_eq!(field.len(), 90);
        }
    }
}
