//! Simulation parameters with validation and JSON file loading.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised when validating simulation parameters.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Map bounds are empty, inverted, or non-finite.
    #[error("map bounds {width}x{height} must be positive and finite")]
    InvalidBounds {
        /// Configured map width.
        width: f32,
        /// Configured map height.
        height: f32,
    },
    /// A probability lies outside the unit interval.
    #[error("{name} must lie in [0, 1], got {value}")]
    ProbabilityOutOfRange {
        /// Name of the offending field.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// A radius, rate, or decrement is negative or non-finite.
    #[error("{name} must be non-negative and finite, got {value}")]
    NegativeValue {
        /// Name of the offending field.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// A randomization range is unordered or non-positive.
    #[error("{name} range [{lo}, {hi}] must be positive and ordered")]
    EmptyRange {
        /// Name of the offending field.
        name: &'static str,
        /// Lower bound of the rejected range.
        lo: f32,
        /// Upper bound of the rejected range.
        hi: f32,
    },
    /// A velocity component is zero, negative, or non-finite.
    #[error("velocity ({x}, {y}) must have positive finite components")]
    InvalidVelocity {
        /// X step magnitude.
        x: f32,
        /// Y step magnitude.
        y: f32,
    },
}

/// Errors raised when loading parameters from a JSON file.
#[derive(Debug, Error)]
pub enum ParamsLoadError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid JSON for [`Params`].
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
    /// The file parsed but the values are out of range.
    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

/// Simulation parameters that control world and person behavior.
///
/// Missing fields in a config file fall back to their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Map width in world units.
    pub map_width: f32,
    /// Map height in world units.
    pub map_height: f32,
    /// Initial person population.
    pub n_people: usize,
    /// Initial apple count, also the respawn target.
    pub n_apples: usize,
    /// Apples regrown per tick while the stock is below [`Params::n_apples`].
    /// Fractional rates carry over between ticks instead of rounding away,
    /// so 0.25 regrows one apple every fourth tick.
    pub apple_spawn_rate: f32,
    /// Energy restored by eating one apple.
    pub apple_energy: f32,
    /// Apple radius used by the renderer.
    pub apple_radius: f32,
    /// Max distance for local wander targets.
    pub comfort_radius: f32,
    /// Max distance at which apples become detectable.
    pub perception_radius: f32,
    /// Probability per retarget of picking a map-wide point instead of a
    /// comfort-zone point.
    pub wander_probability: f32,
    /// Per-tick step magnitude on the X axis.
    pub velocity_x: f32,
    /// Per-tick step magnitude on the Y axis.
    pub velocity_y: f32,
    /// Life lost per tick.
    pub life_decrement: f32,
    /// Energy lost per tick.
    pub energy_decrement: f32,
    /// Range the per-person maximum life is drawn from.
    pub life_range: [f32; 2],
    /// Range the per-person maximum energy is drawn from.
    pub energy_range: [f32; 2],
    /// Range each side of a person's body rectangle is drawn from.
    pub size_range: [f32; 2],
}

impl Default for Params {
    fn default() -> Self {
        Self {
            map_width: 800.0,
            map_height: 600.0,
            n_people: 12,
            n_apples: 40,
            apple_spawn_rate: 0.25,
            apple_energy: 40.0,
            apple_radius: 3.0,
            comfort_radius: 100.0,
            perception_radius: 50.0,
            wander_probability: 0.1,
            velocity_x: 1.0,
            velocity_y: 1.0,
            life_decrement: 1.0,
            energy_decrement: 1.0,
            life_range: [600.0, 1200.0],
            energy_range: [300.0, 600.0],
            size_range: [8.0, 14.0],
        }
    }
}

impl Params {
    /// Ensures every parameter is in range, failing fast on the first
    /// violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.map_width > 0.0 && self.map_width.is_finite())
            || !(self.map_height > 0.0 && self.map_height.is_finite())
        {
            return Err(ConfigError::InvalidBounds {
                width: self.map_width,
                height: self.map_height,
            });
        }
        check_probability("wander_probability", self.wander_probability)?;
        check_non_negative("comfort_radius", self.comfort_radius)?;
        check_non_negative("perception_radius", self.perception_radius)?;
        check_non_negative("apple_radius", self.apple_radius)?;
        check_non_negative("apple_spawn_rate", self.apple_spawn_rate)?;
        check_non_negative("apple_energy", self.apple_energy)?;
        check_non_negative("life_decrement", self.life_decrement)?;
        check_non_negative("energy_decrement", self.energy_decrement)?;
        if !(self.velocity_x > 0.0 && self.velocity_x.is_finite())
            || !(self.velocity_y > 0.0 && self.velocity_y.is_finite())
        {
            return Err(ConfigError::InvalidVelocity {
                x: self.velocity_x,
                y: self.velocity_y,
            });
        }
        check_range("life_range", self.life_range)?;
        check_range("energy_range", self.energy_range)?;
        check_range("size_range", self.size_range)?;
        Ok(())
    }

    /// Loads and validates parameters from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ParamsLoadError> {
        let json = std::fs::read_to_string(path)?;
        let params: Params = serde_json::from_str(&json)?;
        params.validate()?;
        Ok(params)
    }
}

fn check_probability(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ProbabilityOutOfRange { name, value })
    }
}

fn check_non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NegativeValue { name, value })
    }
}

fn check_range(name: &'static str, [lo, hi]: [f32; 2]) -> Result<(), ConfigError> {
    if lo > 0.0 && lo <= hi && lo.is_finite() && hi.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::EmptyRange { name, lo, hi })
    }
}
