//! Sanity checks for motion tuning values.

use super::data::MotionConfig;
use crate::movement::{ProbeTuning, layer_mask};

/// A suspicious tuning value. Loading still succeeds; these are logged.
#[derive(Debug)]
pub struct TuningWarning {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for TuningWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Helper macro for flagging a value that must be strictly positive
macro_rules! check_positive {
    ($warnings:expr, $field:expr, $value:expr) => {
        if !($value > 0.0) {
            $warnings.push(TuningWarning {
                field: $field,
                message: format!("expected a positive value, got {}", $value),
            });
        }
    };
}

fn check_probe(warnings: &mut Vec<TuningWarning>, field: &'static str, probe: &ProbeTuning) {
    if probe.max_range <= 0.0 {
        warnings.push(TuningWarning {
            field,
            message: format!("max_range {} never hits anything", probe.max_range),
        });
    }
    if layer_mask(&probe.layers).0 == 0 {
        warnings.push(TuningWarning {
            field,
            message: "layer filter is empty, probe never hits anything".to_string(),
        });
    }
}

/// Validate a loaded config.
/// Returns a list of warnings, empty if every value looks sane.
pub fn validate_config(config: &MotionConfig) -> Vec<TuningWarning> {
    let mut warnings = Vec::new();
    let tuning = &config.tuning;

    check_positive!(warnings, "gravity", config.gravity);
    check_positive!(warnings, "base_speed", tuning.base_speed);
    check_positive!(warnings, "jump_force", tuning.jump_force);
    check_positive!(warnings, "keep_jumping_duration", tuning.keep_jumping_duration);
    check_positive!(warnings, "body_mass", tuning.body_mass);

    if tuning.keep_jumping_force < 0.0 {
        warnings.push(TuningWarning {
            field: "keep_jumping_force",
            message: format!("negative hold force {} pushes down", tuning.keep_jumping_force),
        });
    }

    if !(0.0..=1.0).contains(&tuning.crouch_speed_factor) {
        warnings.push(TuningWarning {
            field: "crouch_speed_factor",
            message: format!("{} is outside 0..=1", tuning.crouch_speed_factor),
        });
    }

    let (width, height) = tuning.standing_size;
    if width <= 0.0 || height <= 0.0 {
        warnings.push(TuningWarning {
            field: "standing_size",
            message: format!("({}, {}) has no area", width, height),
        });
    } else if width > height {
        // Crouch height equals width, so a wide body would grow when crouching
        warnings.push(TuningWarning {
            field: "standing_size",
            message: format!("width {} exceeds height {}, crouching grows the body", width, height),
        });
    }

    check_probe(&mut warnings, "ground_probe", &tuning.ground_probe);
    check_probe(&mut warnings, "head_probe", &tuning.head_probe);
    if tuning.head_probe.origin_offset.1 != 0.0 {
        warnings.push(TuningWarning {
            field: "head_probe",
            message: format!(
                "origin_offset.y {} is ignored, the ray starts at the top of the active shape",
                tuning.head_probe.origin_offset.1
            ),
        });
    }

    warnings
}
