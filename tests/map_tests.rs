#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use glam::Vec2;
use orchard::simulation::geometry::{euclidean_distance, point_in_circle};
use orchard::simulation::map::Map;
use orchard::simulation::params::ConfigError;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_rejects_degenerate_bounds() {
    for (w, h) in [(0.0, 100.0), (100.0, 0.0), (-5.0, 100.0), (f32::NAN, 100.0)] {
        let err = Map::new(w, h).expect_err("degenerate bounds");
        assert!(matches!(err, ConfigError::InvalidBounds { .. }));
    }
}

#[test]
fn test_contains_includes_the_edges() {
    let map = Map::new(100.0, 50.0).expect("valid map");

    assert!(map.contains(Vec2::ZERO));
    assert!(map.contains(Vec2::new(100.0, 50.0)));
    assert!(map.contains(Vec2::new(30.0, 20.0)));
    assert!(!map.contains(Vec2::new(100.1, 20.0)));
    assert!(!map.contains(Vec2::new(30.0, -0.1)));
}

#[test]
fn test_clamp_pulls_points_onto_the_bounds() {
    let map = Map::new(100.0, 50.0).expect("valid map");

    assert_eq!(map.clamp(Vec2::new(-10.0, 25.0)), Vec2::new(0.0, 25.0));
    assert_eq!(map.clamp(Vec2::new(130.0, 60.0)), Vec2::new(100.0, 50.0));
    assert_eq!(map.clamp(Vec2::new(40.0, 10.0)), Vec2::new(40.0, 10.0));
}

#[test]
fn test_random_points_stay_in_bounds() {
    let map = Map::new(320.0, 200.0).expect("valid map");
    let mut rng = SmallRng::seed_from_u64(21);

    for _ in 0..200 {
        assert!(map.contains(map.random_point(&mut rng)));
    }
}

#[test]
fn test_random_circle_points_stay_within_radius() {
    let map = Map::new(100.0, 100.0).expect("valid map");
    let mut rng = SmallRng::seed_from_u64(22);
    let center = Vec2::new(50.0, 50.0);

    for _ in 0..200 {
        let point = map.random_point_in_circle(&mut rng, center, 10.0);
        assert!(map.contains(point));
        assert!(point_in_circle(point, center, 10.0 + 1e-3));
    }
}

#[test]
fn test_circle_points_near_a_corner_are_clamped_inside() {
    let map = Map::new(100.0, 100.0).expect("valid map");
    let mut rng = SmallRng::seed_from_u64(23);
    let corner = Vec2::ZERO;

    for _ in 0..200 {
        let point = map.random_point_in_circle(&mut rng, corner, 10.0);
        assert!(map.contains(point));
        // Per-axis clamping toward an in-bounds center only shortens the offset
        assert!(euclidean_distance(point, corner) <= 10.0 + 1e-3);
    }
}
