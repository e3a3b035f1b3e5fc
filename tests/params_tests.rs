#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use orchard::simulation::params::{ConfigError, Params, ParamsLoadError};
use std::fs;
use std::path::Path;

#[test]
fn test_default_params_validate() {
    Params::default().validate().expect("defaults are valid");
}

#[test]
fn test_probability_out_of_range_is_rejected() {
    let params = Params {
        wander_probability: 1.5,
        ..Params::default()
    };
    assert_eq!(
        params.validate(),
        Err(ConfigError::ProbabilityOutOfRange {
            name: "wander_probability",
            value: 1.5,
        })
    );
}

#[test]
fn test_negative_values_are_rejected() {
    let params = Params {
        perception_radius: -1.0,
        ..Params::default()
    };
    assert_eq!(
        params.validate(),
        Err(ConfigError::NegativeValue {
            name: "perception_radius",
            value: -1.0,
        })
    );

    let params = Params {
        energy_decrement: f32::INFINITY,
        ..Params::default()
    };
    assert!(matches!(
        params.validate(),
        Err(ConfigError::NegativeValue {
            name: "energy_decrement",
            ..
        })
    ));
}

#[test]
fn test_degenerate_ranges_are_rejected() {
    let params = Params {
        life_range: [0.0, 100.0],
        ..Params::default()
    };
    assert!(matches!(
        params.validate(),
        Err(ConfigError::EmptyRange {
            name: "life_range",
            ..
        })
    ));

    let params = Params {
        size_range: [14.0, 8.0],
        ..Params::default()
    };
    assert!(matches!(
        params.validate(),
        Err(ConfigError::EmptyRange {
            name: "size_range",
            ..
        })
    ));
}

#[test]
fn test_zero_velocity_is_rejected() {
    let params = Params {
        velocity_x: 0.0,
        ..Params::default()
    };
    assert_eq!(
        params.validate(),
        Err(ConfigError::InvalidVelocity { x: 0.0, y: 1.0 })
    );
}

#[test]
fn test_empty_map_is_rejected() {
    let params = Params {
        map_height: 0.0,
        ..Params::default()
    };
    assert!(matches!(
        params.validate(),
        Err(ConfigError::InvalidBounds { .. })
    ));
}

#[test]
fn test_load_round_trips_through_json() {
    let params = Params {
        n_people: 3,
        wander_probability: 0.5,
        ..Params::default()
    };

    let path = "test_params_roundtrip.json";
    fs::write(path, serde_json::to_string(&params).expect("serializes")).expect("writes");

    let loaded = Params::load(Path::new(path)).expect("loads");
    assert_eq!(loaded.n_people, 3);
    assert_eq!(loaded.wander_probability, 0.5);
    assert_eq!(loaded.map_width, params.map_width);

    fs::remove_file(path).ok();
}

#[test]
fn test_load_fills_missing_fields_with_defaults() {
    let path = "test_params_partial.json";
    fs::write(path, r#"{"n_people": 3}"#).expect("writes");

    let loaded = Params::load(Path::new(path)).expect("loads");
    assert_eq!(loaded.n_people, 3);
    assert_eq!(loaded.map_width, Params::default().map_width);
    assert_eq!(loaded.perception_radius, Params::default().perception_radius);

    fs::remove_file(path).ok();
}

#[test]
fn test_load_rejects_out_of_range_values() {
    let path = "test_params_invalid.json";
    fs::write(path, r#"{"wander_probability": 2.0}"#).expect("writes");

    let err = Params::load(Path::new(path)).expect_err("out of range");
    assert!(matches!(err, ParamsLoadError::Invalid(_)));

    fs::remove_file(path).ok();
}

#[test]
fn test_load_rejects_malformed_json() {
    let path = "test_params_malformed.json";
    fs::write(path, "not json at all").expect("writes");

    let err = Params::load(Path::new(path)).expect_err("malformed file");
    assert!(matches!(err, ParamsLoadError::Parse(_)));

    fs::remove_file(path).ok();
}

#[test]
fn test_load_reports_missing_file() {
    let err = Params::load(Path::new("does_not_exist_orchard.json")).expect_err("missing file");
    assert!(matches!(err, ParamsLoadError::Io(_)));
}
