//! Portfolio FX - canvas effects and page widgets for a portfolio site
//!
//! Core modules:
//! - `sim`: Deterministic simulation (particle field, orb mascot, typing, scroll helpers)
//! - `renderer`: Display list generation and Canvas 2D painting
//! - `platform`: Browser glue (DOM, events, animation frames)
//! - `theme` / `storage`: Light/dark theme persisted through a key-value store
//! - `config`: Data-driven tuning

pub mod config;
pub mod contact;
pub mod error;
pub mod nav;
pub mod platform;
pub mod renderer;
pub mod resume;
pub mod sim;
pub mod storage;
pub mod theme;

pub use config::FxConfig;
pub use error::FxError;
pub use storage::{KeyValueStore, MemoryStore};
pub use theme::{Theme, ThemeController};

/// Tuning constants (defaults for [`FxConfig`])
pub mod consts {
    /// Particle field population
    pub const PARTICLE_COUNT: usize = 90;
    /// Max absolute velocity per axis (surface units per frame)
    pub const PARTICLE_MAX_SPEED: f64 = 0.3;
    /// Upper bound on a configured population (links are O(n²))
    pub const MAX_PARTICLE_COUNT: usize = 500;
    /// Upper bound on a configured per-axis speed
    pub const MAX_PARTICLE_SPEED: f64 = 50.0;
    pub const PARTICLE_MIN_RADIUS: f64 = 0.8;
    pub const PARTICLE_MAX_RADIUS: f64 = 2.6;
    /// Pairs closer than this get a connecting line
    pub const LINK_DISTANCE: f64 = 120.0;
    /// Line alpha at distance zero
    pub const LINK_MAX_ALPHA: f64 = 0.06;

    /// Orb core sphere radius
    pub const ORB_RADIUS: f64 = 60.0;
    /// Fraction of remaining distance covered per frame
    pub const ORB_DAMPING: f64 = 0.06;
    /// Vertical bob amplitude
    pub const ORB_BOB_AMPLITUDE: f64 = 6.0;
    /// Animation phase advance per millisecond of clock time
    pub const ORB_PHASE_PER_MS: f64 = 0.002;
    /// Satellite angular speed relative to phase
    pub const SATELLITE_RATE: f64 = 0.8;
    pub const SATELLITE_COUNT: usize = 3;
    pub const SATELLITE_RADIUS: f64 = 6.0;
    /// Concentric glow discs around the core
    pub const GLOW_LAYERS: u32 = 8;

    /// Typing effect delays (ms)
    pub const TYPE_DELAY_MS: u32 = 80;
    pub const DELETE_DELAY_MS: u32 = 40;
    pub const HOLD_DELAY_MS: u32 = 1200;

    /// Scroll position past which the back-to-top button shows
    pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;
    /// Sections count as current this far before their top edge
    pub const SECTION_LEAD: f64 = 100.0;
    /// Reveal elements once they are this far above the viewport bottom
    pub const REVEAL_MARGIN: f64 = 80.0;
    /// Skill bars fill once their section is above this fraction of the viewport
    pub const SKILL_TRIGGER_FRACTION: f64 = 0.8;
    /// Skill bar width when the element carries no value
    pub const SKILL_DEFAULT_PERCENT: &str = "60";

    pub const DEFAULT_RESUME_PATH: &str = "assets/resume/resume.pdf";
}

/// Resolve drawing surface size from a container's client size.
///
/// Each axis falls back to the viewport independently when the container
/// reports zero.
#[inline]
pub fn resolve_surface_size(client: (u32, u32), viewport: (u32, u32)) -> (u32, u32) {
    let w = if client.0 == 0 { viewport.0 } else { client.0 };
    let h = if client.1 == 0 { viewport.1 } else { client.1 };
    (w, h)
}
