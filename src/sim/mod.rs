//! Deterministic simulation module
//!
//! All animation and page-state logic lives here. This module must stay pure:
//! - Seeded RNG only
//! - Time comes in as an argument, never read from a clock
//! - No rendering or platform dependencies

pub mod field;
pub mod frame;
pub mod orb;
pub mod scroll;
pub mod typing;

pub use field::{Link, Particle, ParticleField, link_alpha};
pub use frame::LoopState;
pub use orb::{Orb, OrbMascot, OrbPose, PointerState};
pub use scroll::{
    SectionBounds, active_section, back_to_top_visible, link_is_active, link_targets, should_reveal,
    skill_width, skills_triggered,
};
pub use typing::{TypingEffect, TypingFrame};
