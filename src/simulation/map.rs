//! Map bounds and random point generation.
//!
//! The map owns no entity state; it only answers geometric questions about
//! its rectangle and hands out random points for wander targets and spawns.

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

use super::params::ConfigError;

/// A rectangular map spanning `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy)]
pub struct Map {
    width: f32,
    height: f32,
}

impl Map {
    /// Creates a map, rejecting empty, inverted, or non-finite bounds.
    pub fn new(width: f32, height: f32) -> Result<Self, ConfigError> {
        if width > 0.0 && width.is_finite() && height > 0.0 && height.is_finite() {
            Ok(Self { width, height })
        } else {
            Err(ConfigError::InvalidBounds { width, height })
        }
    }

    /// Map width in world units.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Map height in world units.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Tests whether a point lies within the bounds, edges included.
    pub fn contains(&self, point: Vec2) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }

    /// Clamps a point onto the bounds rectangle.
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.clamp(0.0, self.width),
            point.y.clamp(0.0, self.height),
        )
    }

    /// Returns a uniformly random point within the bounds.
    pub fn random_point(&self, rng: &mut impl Rng) -> Vec2 {
        Vec2::new(
            rng.random_range(0.0..self.width),
            rng.random_range(0.0..self.height),
        )
    }

    /// Returns a uniformly random point within `radius` of `center`,
    /// clamped onto the bounds.
    ///
    /// For a `center` inside the bounds the clamped point still lies within
    /// `radius` of it: per-axis clamping can only shorten the offset.
    pub fn random_point_in_circle(&self, rng: &mut impl Rng, center: Vec2, radius: f32) -> Vec2 {
        let angle = rng.random_range(0.0..TAU);
        let distance = radius * rng.random::<f32>().sqrt();
        let point = center + Vec2::new(angle.cos(), angle.sin()) * distance;
        self.clamp(point)
    }
}
