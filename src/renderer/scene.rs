//! Display list generation for the two canvas effects

use glam::DVec2;

use super::paint::{DrawCmd, Fill, Rgba, Stop, colors};
use crate::consts::{GLOW_LAYERS, SATELLITE_RADIUS};
use crate::sim::{OrbMascot, OrbPose, ParticleField};

/// Particle dot color and global opacity
const PARTICLE_COLOR: Rgba = colors::ACCENT.with_alpha(0.9);
const PARTICLE_ALPHA: f64 = 0.7;
/// Link stroke color; the per-link fade goes on top as global alpha
const LINK_COLOR: Rgba = colors::ACCENT.with_alpha(0.06);
/// Spacing between glow discs
const GLOW_STEP: f64 = 6.0;
const GLOW_ALPHA_STEP: f64 = 0.03;
const RING_GAP: f64 = 12.0;
const RING_WIDTH: f64 = 2.0;

/// Full frame for the particle field (call after `ParticleField::step`)
pub fn particle_field(field: &ParticleField) -> Vec<DrawCmd> {
    let (w, h) = field.size();
    let links = field.links();
    let mut cmds = Vec::with_capacity(2 + field.len() + links.len());

    cmds.push(DrawCmd::Clear {
        width: w,
        height: h,
    });

    // Ambient diagonal tint
    cmds.push(DrawCmd::FillRect {
        width: w,
        height: h,
        fill: Fill::Linear {
            from: DVec2::ZERO,
            to: DVec2::new(w, h),
            stops: vec![
                Stop::new(0.0, colors::ACCENT.with_alpha(0.03)),
                Stop::new(1.0, colors::SECONDARY.with_alpha(0.02)),
            ],
        },
    });

    cmds.extend(field.particles().iter().map(|p| DrawCmd::Disc {
        center: p.pos,
        radius: p.radius,
        fill: Fill::Solid(PARTICLE_COLOR),
        alpha: PARTICLE_ALPHA,
    }));

    cmds.extend(links.into_iter().map(|l| DrawCmd::Line {
        from: l.from,
        to: l.to,
        color: LINK_COLOR,
        alpha: l.alpha,
    }));

    cmds
}

/// Full frame for the orb mascot (call after `OrbMascot::step`)
pub fn orb(mascot: &OrbMascot, pose: &OrbPose) -> Vec<DrawCmd> {
    let (w, h) = mascot.size();
    let c = pose.center;
    let r = pose.radius;
    let mut cmds = Vec::with_capacity(4 + GLOW_LAYERS as usize + pose.satellites.len());

    // Background stays fully transparent
    cmds.push(DrawCmd::Clear {
        width: w,
        height: h,
    });

    // Halo: outermost and faintest first
    for i in (1..=GLOW_LAYERS).rev() {
        let i = i as f64;
        cmds.push(DrawCmd::Disc {
            center: c,
            radius: r + i * GLOW_STEP,
            fill: Fill::Solid(colors::ACCENT.with_alpha(GLOW_ALPHA_STEP * i)),
            alpha: 1.0,
        });
    }

    // Core with an off-center highlight
    cmds.push(DrawCmd::Disc {
        center: c,
        radius: r,
        fill: Fill::Radial {
            inner: c + DVec2::new(-20.0, -10.0),
            inner_radius: 10.0,
            outer: c,
            outer_radius: r,
            stops: vec![
                Stop::new(0.0, colors::WHITE),
                Stop::new(0.15, colors::ICE),
                Stop::new(0.5, colors::ACCENT),
                Stop::new(1.0, colors::DEEP),
            ],
        },
        alpha: 1.0,
    });

    cmds.push(DrawCmd::Ring {
        center: c,
        radius: r + RING_GAP,
        color: colors::SECONDARY.with_alpha(0.6),
        width: RING_WIDTH,
    });

    cmds.extend(pose.satellites.iter().map(|&s| DrawCmd::Disc {
        center: s,
        radius: SATELLITE_RADIUS,
        fill: Fill::Solid(colors::WHITE.with_alpha(0.9)),
        alpha: 1.0,
    }));

    cmds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FieldConfig, OrbConfig};

    #[test]
    fn test_particle_frame_layout() {
        let field = ParticleField::from_seed(42, 400.0, 300.0, FieldConfig::default());
        let cmds = particle_field(&field);
        let links = field.links().len();

        assert_eq!(cmds.len(), 2 + 90 + links);
        assert!(matches!(cmds[0], DrawCmd::Clear { width, height } if width == 400.0 && height == 300.0));
        assert!(matches!(cmds[1], DrawCmd::FillRect { fill: Fill::Linear { .. }, .. }));

        let discs = cmds.iter().filter(|c| matches!(c, DrawCmd::Disc { .. })).count();
        assert_eq!(discs, 90);

        for cmd in &cmds[92..] {
            match cmd {
                DrawCmd::Line { alpha, .. } => assert!(*alpha > 0.0 && *alpha <= 0.06),
                other => panic!("unexpected {:?}", other),
            }
        }
    }

    #[test]
    fn test_orb_frame_layout() {
        let mascot = OrbMascot::new(320.0, 320.0, OrbConfig::default());
        let pose = mascot.pose(0.0);
        let cmds = orb(&mascot, &pose);

        // clear + 8 glow + core + ring + 3 satellites
        assert_eq!(cmds.len(), 14);

        match &cmds[1] {
            DrawCmd::Disc { radius, fill: Fill::Solid(color), .. } => {
                assert_eq!(*radius, 60.0 + 48.0);
                assert!((color.a - 0.24).abs() < 1e-12);
            }
            other => panic!("unexpected {:?}", other),
        }
        match &cmds[8] {
            DrawCmd::Disc { radius, fill: Fill::Solid(color), .. } => {
                assert_eq!(*radius, 66.0);
                assert!((color.a - 0.03).abs() < 1e-12);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(&cmds[9], DrawCmd::Disc { radius, fill: Fill::Radial { .. }, .. } if *radius == 60.0));
        assert!(matches!(&cmds[10], DrawCmd::Ring { radius, width, .. } if *radius == 72.0 && *width == 2.0));
        assert!(matches!(&cmds[13], DrawCmd::Disc { radius, .. } if *radius == 6.0));
    }

    #[test]
    fn test_orb_frame_uses_bobbed_center() {
        let mascot = OrbMascot::new(200.0, 200.0, OrbConfig::default());
        let t = std::f64::consts::FRAC_PI_2 / 0.002;
        let pose = mascot.pose(t);
        let cmds = orb(&mascot, &pose);
        match &cmds[10] {
            DrawCmd::Ring { center, .. } => assert!((center.y - 106.0).abs() < 1e-9),
            other => panic!("unexpected {:?}", other),
        }
    }
}
