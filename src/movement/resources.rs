//! Movement domain: tuning and input resources.

use std::collections::VecDeque;

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::input::{ButtonEdge, EdgeDetector, InputSource};
use crate::movement::{GameLayer, layer_mask};

/// What happens to a pending hold expiry when a new jump starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum JumpHoldPolicy {
    /// Every jump keeps its own expiry, and whichever fires clears the hold,
    /// even if a newer jump is still inside its window.
    #[default]
    Overlapping,
    /// A new jump cancels the previous expiry; only the latest one counts.
    LatestOnly,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProbeTuning {
    /// Ray start relative to the body origin. For the head probe only x is
    /// used; y always tracks the top of the active shape and should be 0.
    pub origin_offset: (f32, f32),
    pub max_range: f32,
    pub layers: Vec<GameLayer>,
}

impl ProbeTuning {
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.origin_offset.0, self.origin_offset.1)
    }

    pub fn mask(&self) -> LayerMask {
        layer_mask(&self.layers)
    }
}

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
pub struct MotionTuning {
    pub base_speed: f32,
    /// Multiplier on `base_speed` while crouching (0-1 typical)
    pub crouch_speed_factor: f32,
    pub jump_force: f32,
    /// Upward force applied every physics step while the jump is held
    pub keep_jumping_force: f32,
    pub keep_jumping_duration: f32,
    pub body_mass: f32,
    /// Standing bounding box (width, height); crouch height equals width
    pub standing_size: (f32, f32),
    pub ground_probe: ProbeTuning,
    pub head_probe: ProbeTuning,
    pub hold_policy: JumpHoldPolicy,
    /// Horizontal input magnitude below which animation treats the body as idle
    pub walk_threshold: f32,
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            base_speed: 300.0,
            crouch_speed_factor: 0.5,
            jump_force: 520.0,
            keep_jumping_force: 1400.0,
            keep_jumping_duration: 0.2,
            body_mass: 1.0,
            standing_size: (24.0, 48.0),
            ground_probe: ProbeTuning {
                origin_offset: (0.0, 2.0),
                max_range: 6.0,
                layers: vec![GameLayer::Ground],
            },
            head_probe: ProbeTuning {
                origin_offset: (0.0, 0.0),
                max_range: 4.0,
                layers: vec![GameLayer::Ground],
            },
            hold_policy: JumpHoldPolicy::Overlapping,
            walk_threshold: 0.1,
        }
    }
}

impl MotionTuning {
    pub fn standing_size(&self) -> Vec2 {
        Vec2::new(self.standing_size.0, self.standing_size.1)
    }

    /// Apex height of a jump released immediately, under the given gravity.
    pub fn min_jump_height(&self, gravity: f32) -> f32 {
        if gravity <= 0.0 {
            return f32::INFINITY;
        }
        self.jump_force * self.jump_force / (2.0 * gravity)
    }
}

/// Keyboard-fed input state for the local player.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    jump: EdgeDetector,
    jump_edges: VecDeque<ButtonEdge>,
}

impl MovementInput {
    /// Record this frame's axis and jump level; queues an edge on transitions.
    pub fn sample(&mut self, axis: Vec2, jump_held: bool) {
        self.axis = axis;
        if let Some(edge) = self.jump.sample(jump_held) {
            self.jump_edges.push_back(edge);
        }
    }
}

impl InputSource for MovementInput {
    fn move_axis(&self) -> Vec2 {
        self.axis
    }

    fn poll_jump(&mut self) -> Option<ButtonEdge> {
        self.jump_edges.pop_front()
    }
}
