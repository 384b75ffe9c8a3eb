//! Orb mascot: a glowing sphere that eases toward the pointer

use std::f64::consts::TAU;

use glam::DVec2;

use crate::config::OrbConfig;

/// Pointer tracking state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerState {
    /// No pointer over the surface, orb returns to center
    Idle,
    /// Pointer over the surface at the given surface-relative position
    Tracking(DVec2),
}

/// Orb position and easing target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orb {
    pub pos: DVec2,
    pub target: DVec2,
    pub radius: f64,
}

impl Orb {
    /// Move `damping` of the remaining distance toward the target
    #[inline]
    pub fn ease(&mut self, damping: f64) {
        self.pos += (self.target - self.pos) * damping;
    }
}

/// Per-frame derived drawing state. Pure function of orb position and time.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbPose {
    /// Orb center with bob applied
    pub center: DVec2,
    pub radius: f64,
    /// Vertical offset applied to every draw this frame
    pub bob: f64,
    /// Satellite centers (bob applied)
    pub satellites: Vec<DVec2>,
}

/// Orb simulation on its own surface
#[derive(Debug, Clone)]
pub struct OrbMascot {
    orb: Orb,
    pointer: PointerState,
    width: f64,
    height: f64,
    config: OrbConfig,
}

impl OrbMascot {
    /// Orb starts at rest in the middle of the surface
    pub fn new(width: f64, height: f64, config: OrbConfig) -> Self {
        let center = DVec2::new(width / 2.0, height / 2.0);
        Self {
            orb: Orb {
                pos: center,
                target: center,
                radius: config.radius,
            },
            pointer: PointerState::Idle,
            width,
            height,
            config,
        }
    }

    pub fn orb(&self) -> &Orb {
        &self.orb
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Pointer moved over the surface (Idle -> Tracking, or update)
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.pointer = PointerState::Tracking(DVec2::new(x, y));
    }

    /// Pointer left the surface (-> Idle)
    pub fn pointer_leave(&mut self) {
        self.pointer = PointerState::Idle;
    }

    /// Change surface bounds. The orb is not re-centered here; an idle orb
    /// drifts to the new center on its own.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Target for the current pointer state
    pub fn current_target(&self) -> DVec2 {
        match self.pointer {
            PointerState::Tracking(p) => p,
            PointerState::Idle => self.center(),
        }
    }

    /// Retarget and ease one frame
    pub fn step(&mut self) {
        self.orb.target = self.current_target();
        self.orb.ease(self.config.damping);
    }

    /// Animation phase for a clock reading in milliseconds
    #[inline]
    pub fn phase(&self, time_ms: f64) -> f64 {
        time_ms * self.config.phase_per_ms
    }

    /// Vertical bob for a clock reading in milliseconds
    pub fn bob(&self, time_ms: f64) -> f64 {
        self.phase(time_ms).sin() * self.config.bob_amplitude
    }

    /// Drawing state at `time_ms`
    pub fn pose(&self, time_ms: f64) -> OrbPose {
        let phase = self.phase(time_ms);
        let bob = self.bob(time_ms);
        let center = self.orb.pos + DVec2::new(0.0, bob);
        let r = self.orb.radius;
        let count = self.config.satellite_count;

        // Evenly spaced on an ellipse slightly wider than tall
        let satellites = (0..count)
            .map(|k| {
                let angle = phase * self.config.satellite_rate + k as f64 * TAU / count as f64;
                center + DVec2::new(angle.cos() * (r + 22.0), angle.sin() * (r + 14.0))
            })
            .collect();

        OrbPose {
            center,
            radius: r,
            bob,
            satellites,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn mascot() -> OrbMascot {
        OrbMascot::new(320.0, 320.0, OrbConfig::default())
    }

    #[test]
    fn test_starts_idle_at_center() {
        let m = mascot();
        assert_eq!(m.pointer(), PointerState::Idle);
        assert_eq!(m.orb().pos, DVec2::new(160.0, 160.0));
        assert_eq!(m.orb().radius, 60.0);
    }

    #[test]
    fn test_tracking_eases_toward_pointer() {
        let mut m = mascot();
        m.pointer_move(260.0, 160.0);
        m.step();
        assert_eq!(m.orb().target, DVec2::new(260.0, 160.0));
        // 6% of the 100px gap
        assert!((m.orb().pos.x - 166.0).abs() < 1e-9);
        assert_eq!(m.orb().pos.y, 160.0);
    }

    #[test]
    fn test_leave_resets_target_to_center() {
        let mut m = mascot();
        m.pointer_move(10.0, 300.0);
        for _ in 0..30 {
            m.step();
        }
        m.pointer_leave();
        assert_eq!(m.pointer(), PointerState::Idle);
        m.step();
        assert_eq!(m.orb().target, DVec2::new(160.0, 160.0));
    }

    #[test]
    fn test_resize_moves_idle_target_not_orb() {
        let mut m = mascot();
        m.resize(640.0, 200.0);
        assert_eq!(m.orb().pos, DVec2::new(160.0, 160.0));
        m.step();
        assert_eq!(m.orb().target, DVec2::new(320.0, 100.0));
    }

    #[test]
    fn test_converges_to_target() {
        let mut m = mascot();
        m.pointer_move(300.0, 20.0);
        for _ in 0..2000 {
            m.step();
        }
        assert!(m.orb().pos.distance(DVec2::new(300.0, 20.0)) < 1e-9);
    }

    #[test]
    fn test_bob_follows_phase() {
        let m = mascot();
        assert_eq!(m.bob(0.0), 0.0);
        // phase pi/2 at t = 785.398ms
        let t = std::f64::consts::FRAC_PI_2 / 0.002;
        assert!((m.bob(t) - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_pose_satellites_evenly_spaced() {
        let m = mascot();
        let pose = m.pose(0.0);
        assert_eq!(pose.satellites.len(), 3);
        assert_eq!(pose.center, DVec2::new(160.0, 160.0));
        // k = 0 sits at angle 0 on the horizontal radius
        assert!((pose.satellites[0] - DVec2::new(160.0 + 82.0, 160.0)).length() < 1e-9);
        // k = 1 at 120 degrees
        let a = TAU / 3.0;
        let expected = DVec2::new(160.0 + a.cos() * 82.0, 160.0 + a.sin() * 74.0);
        assert!((pose.satellites[1] - expected).length() < 1e-9);
    }

    #[test]
    fn test_pose_applies_bob_to_everything() {
        let m = mascot();
        let t = std::f64::consts::FRAC_PI_2 / 0.002;
        let pose = m.pose(t);
        assert!((pose.bob - 6.0).abs() < 1e-9);
        assert!((pose.center.y - 166.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_single_step_shrinks_gap_by_damping(
            cx in -500.0f64..500.0,
            cy in -500.0f64..500.0,
            tx in -500.0f64..500.0,
            ty in -500.0f64..500.0,
        ) {
            let mut orb = Orb { pos: DVec2::new(cx, cy), target: DVec2::new(tx, ty), radius: 60.0 };
            let before = (orb.target - orb.pos).abs();
            orb.ease(0.06);
            let after = (orb.target - orb.pos).abs();
            prop_assert!((after.x - before.x * 0.94).abs() < 1e-9);
            prop_assert!((after.y - before.y * 0.94).abs() < 1e-9);
        }

        #[test]
        fn prop_never_overshoots(
            c in -500.0f64..500.0,
            t in -500.0f64..500.0,
            damping in 0.01f64..0.99,
            steps in 1usize..300,
        ) {
            let mut orb = Orb { pos: DVec2::new(c, c), target: DVec2::new(t, t), radius: 1.0 };
            let side = (t - c).signum();
            for _ in 0..steps {
                orb.ease(damping);
                // Still on the starting side of the target (or on it)
                prop_assert!((t - orb.pos.x) * side >= 0.0);
            }
        }
    }
}
