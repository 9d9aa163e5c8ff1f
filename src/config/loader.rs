//! Loader for the motion RON file at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::{MOTION_SCHEMA_VERSION, MotionConfig};

/// Error type for config loading failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ConfigLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse motion config text. `file` only labels errors.
pub fn parse_motion_config(contents: &str, file: &str) -> Result<MotionConfig, ConfigLoadError> {
    let config: MotionConfig = ron_options()
        .from_str(contents)
        .map_err(|e| ConfigLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    if config.schema_version != MOTION_SCHEMA_VERSION {
        return Err(ConfigLoadError {
            file: file.to_string(),
            message: format!(
                "Unsupported schema_version {} (expected {})",
                config.schema_version, MOTION_SCHEMA_VERSION
            ),
        });
    }

    Ok(config)
}

/// Load a motion config file from disk.
pub fn load_motion_config(path: &Path) -> Result<MotionConfig, ConfigLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_motion_config(&contents, &file_name)
}
