//! Data definitions for the motion RON file.
//!
//! Mirrors the structure in assets/data/motion.ron.

use serde::{Deserialize, Serialize};

use crate::movement::MotionTuning;

pub const MOTION_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MotionConfig {
    pub schema_version: u32,
    /// Downward acceleration applied by the physics world
    pub gravity: f32,
    pub tuning: MotionTuning,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            schema_version: MOTION_SCHEMA_VERSION,
            gravity: 1800.0,
            tuning: MotionTuning::default(),
        }
    }
}
