//! Movement domain: grounded-state motion controller and its Bevy wiring.

mod bootstrap;
mod components;
mod controller;
mod events;
mod input;
mod probe;
mod resources;
mod shape;
mod systems;
mod timers;

pub use components::{BodySprite, GameLayer, Ground, Player, layer_mask};
pub use controller::{GroundTransition, HoldEndReason, MotionController};
pub use events::{JumpHoldEndedEvent, JumpedEvent, LandedEvent};
pub use probe::EnvironmentProbe;
pub use resources::{JumpHoldPolicy, MotionTuning, MovementInput, ProbeTuning};
pub use shape::capsule_collider;

use bevy::prelude::*;

use crate::core::gameplay_active;
use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    apply_motion_physics, log_motion_messages, probe_surroundings, read_input, run_logical_pass,
    sync_body_sprite,
};

/// Logical (per-frame) and physics (fixed-step) passes of the controller.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MotionSet {
    Logical,
    Physics,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MotionTuning>()
            .init_resource::<MovementInput>()
            .add_message::<JumpedEvent>()
            .add_message::<JumpHoldEndedEvent>()
            .add_message::<LandedEvent>()
            .add_systems(Startup, spawn_player)
            .add_systems(
                FixedUpdate,
                (probe_surroundings, apply_motion_physics)
                    .chain()
                    .in_set(MotionSet::Physics)
                    .run_if(gameplay_active),
            )
            .add_systems(
                Update,
                (read_input, run_logical_pass, sync_body_sprite)
                    .chain()
                    .in_set(MotionSet::Logical)
                    .run_if(gameplay_active),
            )
            .add_systems(Update, log_motion_messages.after(MotionSet::Logical));
    }
}
