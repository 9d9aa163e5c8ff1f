//! Config domain: tests for parsing and validating motion tuning.

use std::path::Path;

use super::{
    MOTION_CONFIG_PATH, MOTION_SCHEMA_VERSION, MotionConfig, load_motion_config,
    parse_motion_config, validate_config,
};
use crate::movement::{GameLayer, JumpHoldPolicy};

const SAMPLE: &str = r#"
(
    schema_version: 1,
    gravity: 900.0,
    tuning: (
        base_speed: 5.0,
        crouch_speed_factor: 0.5,
        jump_force: 10.0,
        keep_jumping_force: 4.0,
        keep_jumping_duration: 0.5,
        body_mass: 2.0,
        standing_size: (1.0, 2.0),
        ground_probe: (
            origin_offset: (0.0, 0.1),
            max_range: 0.2,
            layers: [Ground],
        ),
        head_probe: (
            origin_offset: (0.0, 0.0),
            max_range: 0.1,
            layers: [Ground, Default],
        ),
        hold_policy: LatestOnly,
        walk_threshold: 0.1,
    ),
)
"#;

// -----------------------------------------------------------------------------
// Parsing tests
// -----------------------------------------------------------------------------

#[test]
fn test_parse_sample_config() {
    let config = parse_motion_config(SAMPLE, "sample.ron").expect("sample parses");

    assert_eq!(config.schema_version, MOTION_SCHEMA_VERSION);
    assert_eq!(config.gravity, 900.0);
    assert_eq!(config.tuning.base_speed, 5.0);
    assert_eq!(config.tuning.body_mass, 2.0);
    assert_eq!(config.tuning.hold_policy, JumpHoldPolicy::LatestOnly);
    assert_eq!(
        config.tuning.head_probe.layers,
        vec![GameLayer::Ground, GameLayer::Default]
    );
    assert!(validate_config(&config).is_empty());
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_motion_config("( schema_version: 1, gravity: )", "broken.ron")
        .expect_err("truncated config must fail");

    assert_eq!(err.file, "broken.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().starts_with("Failed to load broken.ron"));
}

#[test]
fn test_unknown_schema_version_is_rejected() {
    let text = SAMPLE.replace("schema_version: 1", "schema_version: 7");
    let err = parse_motion_config(&text, "future.ron").expect_err("schema 7 is unsupported");

    assert!(err.message.contains("schema_version 7"));
}

#[test]
fn test_missing_file_reports_io_error() {
    let err = load_motion_config(Path::new("does/not/exist/motion.ron"))
        .expect_err("missing file must fail");

    assert!(err.message.starts_with("IO error"));
}

#[test]
fn test_shipped_config_loads_cleanly() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(MOTION_CONFIG_PATH);
    let config = load_motion_config(&path).expect("shipped motion.ron parses");

    assert!(validate_config(&config).is_empty());
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_default_config_is_valid() {
    assert!(validate_config(&MotionConfig::default()).is_empty());
}

#[test]
fn test_validation_flags_bad_values() {
    let mut config = MotionConfig::default();
    config.tuning.crouch_speed_factor = 1.5;
    config.tuning.keep_jumping_duration = 0.0;
    config.tuning.standing_size = (30.0, 20.0);
    config.tuning.ground_probe.layers.clear();
    config.tuning.head_probe.max_range = 0.0;

    let fields: Vec<&str> = validate_config(&config).iter().map(|w| w.field).collect();

    assert!(fields.contains(&"crouch_speed_factor"));
    assert!(fields.contains(&"keep_jumping_duration"));
    assert!(fields.contains(&"standing_size"));
    assert!(fields.contains(&"ground_probe"));
    assert!(fields.contains(&"head_probe"));
    assert_eq!(fields.len(), 5);
}

#[test]
fn test_validation_flags_head_probe_height() {
    let mut config = MotionConfig::default();
    config.tuning.head_probe.origin_offset = (3.0, 48.0);

    let warnings = validate_config(&config);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].field, "head_probe");
    assert!(warnings[0].message.contains("origin_offset.y"));
}

#[test]
fn test_validation_flags_nan() {
    let mut config = MotionConfig::default();
    config.tuning.body_mass = f32::NAN;

    let warnings = validate_config(&config);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].field, "body_mass");
}
