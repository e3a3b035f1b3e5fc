//! Geometric utility functions for distance calculations.

use geo::algorithm::Distance;
use geo::{Euclidean, Point};
use glam::Vec2;

/// Calculates the Euclidean distance between two points.
///
/// # Arguments
///
/// * `a` - First point
/// * `b` - Second point
///
/// # Returns
///
/// The straight-line distance between `a` and `b`.
pub fn euclidean_distance(a: Vec2, b: Vec2) -> f32 {
    Euclidean.distance(Point::new(a.x, a.y), Point::new(b.x, b.y))
}

/// Tests whether a point lies within a circle, boundary included.
///
/// # Arguments
///
/// * `point` - The point to test
/// * `center` - Center of the circle
/// * `radius` - Radius of the circle
///
/// # Returns
///
/// `true` when the distance from `point` to `center` is at most `radius`.
pub fn point_in_circle(point: Vec2, center: Vec2, radius: f32) -> bool {
    euclidean_distance(point, center) <= radius
}
