//! Config domain: motion tuning loaded from RON at startup.

mod data;
mod loader;
#[cfg(test)]
mod tests;
mod validation;

pub use data::{MOTION_SCHEMA_VERSION, MotionConfig};
pub use loader::{ConfigLoadError, load_motion_config, parse_motion_config};
pub use validation::{TuningWarning, validate_config};

use avian2d::prelude::*;
use bevy::prelude::*;
use std::path::Path;

pub const MOTION_CONFIG_PATH: &str = "assets/data/motion.ron";

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        let config = match load_motion_config(Path::new(MOTION_CONFIG_PATH)) {
            Ok(config) => {
                info!("Loaded motion config from {}", MOTION_CONFIG_PATH);
                config
            }
            Err(e) => {
                warn!("{}, using default motion tuning", e);
                MotionConfig::default()
            }
        };

        for warning in validate_config(&config) {
            warn!("Motion tuning: {}", warning);
        }

        app.insert_resource(Gravity(Vec2::NEG_Y * config.gravity))
            .insert_resource(config.tuning);
    }
}
