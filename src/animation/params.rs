//! Animation parameters published from the motion controller.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Receiver for the controller's display-facing state.
pub trait AnimationParameterBridge {
    fn set(&mut self, horizontal: f32, vertical: f32, grounded: bool, crouching: bool);
}

/// Named parameters an animator would read, stored on the player entity.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimationParams {
    /// Magnitude of horizontal input
    pub horizontal: f32,
    /// Vertical velocity
    pub vertical: f32,
    pub grounded: bool,
    pub crouching: bool,
}

impl AnimationParameterBridge for AnimationParams {
    fn set(&mut self, horizontal: f32, vertical: f32, grounded: bool, crouching: bool) {
        self.horizontal = horizontal;
        self.vertical = vertical;
        self.grounded = grounded;
        self.crouching = crouching;
    }
}

/// Animation states for the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Run,
    Jump,
    Fall,
    Crouch,
    CrouchWalk,
}

impl AnimationState {
    /// Pick a state from the published parameters.
    pub fn from_params(params: &AnimationParams, walk_threshold: f32) -> Self {
        let moving = params.horizontal > walk_threshold;
        match (params.grounded, params.crouching) {
            (true, true) if moving => AnimationState::CrouchWalk,
            (true, true) => AnimationState::Crouch,
            (true, false) if moving => AnimationState::Run,
            (true, false) => AnimationState::Idle,
            (false, _) if params.vertical > 0.0 => AnimationState::Jump,
            (false, _) => AnimationState::Fall,
        }
    }

    pub fn is_looping(&self) -> bool {
        matches!(
            self,
            AnimationState::Idle
                | AnimationState::Run
                | AnimationState::Crouch
                | AnimationState::CrouchWalk
        )
    }

    /// Animation clip name suffix (e.g., "idle", "crouch_walk").
    pub fn clip_name(&self) -> &'static str {
        match self {
            AnimationState::Idle => "idle",
            AnimationState::Run => "run",
            AnimationState::Jump => "jump",
            AnimationState::Fall => "fall",
            AnimationState::Crouch => "crouch",
            AnimationState::CrouchWalk => "crouch_walk",
        }
    }
}

/// Tracks the current state and how long it has been playing.
#[derive(Component, Debug, Default)]
pub struct AnimationController {
    pub state: AnimationState,
    /// Previous state (for detecting transitions).
    pub previous_state: AnimationState,
    /// Seconds spent in the current state.
    pub state_time: f32,
}

impl AnimationController {
    /// Set the animation state, resetting the clock if it changed.
    /// Returns true on a transition.
    pub fn set_state(&mut self, state: AnimationState) -> bool {
        if self.state == state {
            return false;
        }
        self.previous_state = self.state;
        self.state = state;
        self.state_time = 0.0;
        true
    }
}

/// Message fired when animation state changes.
#[derive(Debug)]
pub struct AnimationStateChanged {
    pub entity: Entity,
    pub from: AnimationState,
    pub to: AnimationState,
}

impl Message for AnimationStateChanged {}
