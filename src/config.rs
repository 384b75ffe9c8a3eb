//! Effect tuning
//!
//! Every section falls back to the `consts` defaults, so a partial JSON
//! document (or none at all) is valid.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::Result;

/// Particle field tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub count: usize,
    /// Max absolute velocity per axis
    pub max_speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub link_distance: f64,
    pub link_alpha: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            max_speed: PARTICLE_MAX_SPEED,
            min_radius: PARTICLE_MIN_RADIUS,
            max_radius: PARTICLE_MAX_RADIUS,
            link_distance: LINK_DISTANCE,
            link_alpha: LINK_MAX_ALPHA,
        }
    }
}

/// Orb mascot tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbConfig {
    pub radius: f64,
    /// Easing factor, expected in (0, 1)
    pub damping: f64,
    pub bob_amplitude: f64,
    pub phase_per_ms: f64,
    pub satellite_rate: f64,
    pub satellite_count: usize,
}

impl Default for OrbConfig {
    fn default() -> Self {
        Self {
            radius: ORB_RADIUS,
            damping: ORB_DAMPING,
            bob_amplitude: ORB_BOB_AMPLITUDE,
            phase_per_ms: ORB_PHASE_PER_MS,
            satellite_rate: SATELLITE_RATE,
            satellite_count: SATELLITE_COUNT,
        }
    }
}

/// Typing effect tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub phrases: Vec<String>,
    pub type_delay_ms: u32,
    pub delete_delay_ms: u32,
    pub hold_delay_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            phrases: vec![
                "a passionate Web Developer".to_string(),
                "a Tech Enthusiast".to_string(),
                "a CodeSoft Intern".to_string(),
            ],
            type_delay_ms: TYPE_DELAY_MS,
            delete_delay_ms: DELETE_DELAY_MS,
            hold_delay_ms: HOLD_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeConfig {
    /// Used when the view button carries no `data-src`
    pub default_path: String,
}

impl Default for ResumeConfig {
    fn default() -> Self {
        Self {
            default_path: DEFAULT_RESUME_PATH.to_string(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FxConfig {
    pub field: FieldConfig,
    pub orb: OrbConfig,
    pub typing: TypingConfig,
    pub resume: ResumeConfig,
}

impl FxConfig {
    /// Parse from JSON, filling anything missing with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let mut config: FxConfig = serde_json::from_str(json)?;
        config.sanitize();
        Ok(config)
    }

    /// Pull out-of-range values back to something drawable
    pub fn sanitize(&mut self) {
        if !(self.orb.damping > 0.0 && self.orb.damping < 1.0) {
            log::warn!(
                "orb damping {} outside (0, 1), using {}",
                self.orb.damping,
                ORB_DAMPING
            );
            self.orb.damping = ORB_DAMPING;
        }
        if !(self.orb.radius.is_finite() && self.orb.radius > 0.0) {
            log::warn!("orb radius {} not positive, using {}", self.orb.radius, ORB_RADIUS);
            self.orb.radius = ORB_RADIUS;
        }
        finite_or(&mut self.orb.bob_amplitude, ORB_BOB_AMPLITUDE, "orb bob_amplitude");
        finite_or(&mut self.orb.phase_per_ms, ORB_PHASE_PER_MS, "orb phase_per_ms");
        finite_or(&mut self.orb.satellite_rate, SATELLITE_RATE, "orb satellite_rate");

        if self.field.count > MAX_PARTICLE_COUNT {
            log::warn!(
                "field count {} above {}, capping",
                self.field.count,
                MAX_PARTICLE_COUNT
            );
            self.field.count = MAX_PARTICLE_COUNT;
        }
        if !(self.field.max_speed.is_finite() && self.field.max_speed.abs() <= MAX_PARTICLE_SPEED)
        {
            log::warn!(
                "field max_speed {} outside [-{}, {}], using {}",
                self.field.max_speed,
                MAX_PARTICLE_SPEED,
                MAX_PARTICLE_SPEED,
                PARTICLE_MAX_SPEED
            );
            self.field.max_speed = PARTICLE_MAX_SPEED;
        }
        self.field.max_speed = self.field.max_speed.abs();
        non_negative_or(&mut self.field.min_radius, PARTICLE_MIN_RADIUS, "field min_radius");
        non_negative_or(&mut self.field.max_radius, PARTICLE_MAX_RADIUS, "field max_radius");
        if self.field.min_radius > self.field.max_radius {
            std::mem::swap(&mut self.field.min_radius, &mut self.field.max_radius);
        }
        if !(self.field.link_distance.is_finite() && self.field.link_distance > 0.0) {
            self.field.link_distance = LINK_DISTANCE;
        }
        non_negative_or(&mut self.field.link_alpha, LINK_MAX_ALPHA, "field link_alpha");
    }

    /// Browser: read `#fx-config` JSON if the page provides it
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("fx-config"))
            .and_then(|el| el.text_content());

        match text {
            Some(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded effect config from page");
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring invalid #fx-config: {}", e);
                    Self::default()
                }
            },
            None => {
                log::debug!("No #fx-config element, using defaults");
                Self::default()
            }
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

fn finite_or(value: &mut f64, fallback: f64, name: &str) {
    if !value.is_finite() {
        log::warn!("{} {} not finite, using {}", name, value, fallback);
        *value = fallback;
    }
}

fn non_negative_or(value: &mut f64, fallback: f64, name: &str) {
    if !(value.is_finite() && *value >= 0.0) {
        log::warn!("{} {} negative or not finite, using {}", name, value, fallback);
        *value = fallback;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let config = FxConfig::default();
        assert_eq!(config.field.count, 90);
        assert_eq!(config.field.link_distance, 120.0);
        assert_eq!(config.orb.damping, 0.06);
        assert_eq!(config.typing.phrases.len(), 3);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = FxConfig::from_json(r#"{"orb": {"radius": 40.0}}"#).unwrap();
        assert_eq!(config.orb.radius, 40.0);
        assert_eq!(config.orb.damping, ORB_DAMPING);
        assert_eq!(config.field, FieldConfig::default());
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(FxConfig::from_json("{not json").is_err());
    }

    #[test]
    fn test_sanitize_rejects_bad_damping() {
        let config = FxConfig::from_json(r#"{"orb": {"damping": 1.5}}"#).unwrap();
        assert_eq!(config.orb.damping, ORB_DAMPING);
    }

    #[test]
    fn test_sanitize_orders_radius_range() {
        let config =
            FxConfig::from_json(r#"{"field": {"min_radius": 3.0, "max_radius": 1.0}}"#).unwrap();
        assert_eq!(config.field.min_radius, 1.0);
        assert_eq!(config.field.max_radius, 3.0);
    }

    #[test]
    fn test_sanitize_rejects_huge_speed() {
        use crate::sim::ParticleField;

        let config = FxConfig::from_json(r#"{"field": {"max_speed": 1e308}}"#).unwrap();
        assert_eq!(config.field.max_speed, PARTICLE_MAX_SPEED);

        // Must build without panicking in the RNG
        let field = ParticleField::from_seed(1, 100.0, 100.0, config.field);
        assert_eq!(field.len(), PARTICLE_COUNT);
    }

    #[test]
    fn test_sanitize_keeps_negative_speed_magnitude() {
        let config = FxConfig::from_json(r#"{"field": {"max_speed": -0.5}}"#).unwrap();
        assert_eq!(config.field.max_speed, 0.5);
    }

    #[test]
    fn test_sanitize_rejects_negative_radii() {
        let config = FxConfig::from_json(
            r#"{"field": {"min_radius": -5.0, "max_radius": -1.0}, "orb": {"radius": -10.0}}"#,
        )
        .unwrap();
        assert_eq!(config.field.min_radius, PARTICLE_MIN_RADIUS);
        assert_eq!(config.field.max_radius, PARTICLE_MAX_RADIUS);
        assert_eq!(config.orb.radius, ORB_RADIUS);
    }

    #[test]
    fn test_sanitize_requires_positive_orb_radius() {
        let config = FxConfig::from_json(r#"{"orb": {"radius": 0.0}}"#).unwrap();
        assert_eq!(config.orb.radius, ORB_RADIUS);
    }

    #[test]
    fn test_sanitize_replaces_non_finite_values() {
        let mut config = FxConfig::default();
        config.field.max_speed = f64::INFINITY;
        config.field.max_radius = f64::NAN;
        config.field.link_distance = f64::INFINITY;
        config.orb.radius = f64::NAN;
        config.orb.phase_per_ms = f64::NEG_INFINITY;
        config.sanitize();
        assert_eq!(config.field.max_speed, PARTICLE_MAX_SPEED);
        assert_eq!(config.field.max_radius, PARTICLE_MAX_RADIUS);
        assert_eq!(config.field.link_distance, LINK_DISTANCE);
        assert_eq!(config.orb.radius, ORB_RADIUS);
        assert_eq!(config.orb.phase_per_ms, ORB_PHASE_PER_MS);
    }

    #[test]
    fn test_sanitize_caps_count() {
        let config = FxConfig::from_json(r#"{"field": {"count": 1000000}}"#).unwrap();
        assert_eq!(config.field.count, MAX_PARTICLE_COUNT);

        let config = FxConfig::from_json(r#"{"field": {"count": 12}}"#).unwrap();
        assert_eq!(config.field.count, 12);
    }
}
