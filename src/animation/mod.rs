//! Animation domain: parameter bridge and derived animation state.

mod params;
#[cfg(test)]
mod tests;

pub use params::{
    AnimationController, AnimationParameterBridge, AnimationParams, AnimationState,
    AnimationStateChanged,
};

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::gameplay_active;
use crate::movement::{MotionController, MotionSet, MotionTuning};

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AnimationStateChanged>().add_systems(
            Update,
            (
                publish_animation_params,
                animation_state_machine,
                log_animation_transitions,
            )
                .chain()
                .after(MotionSet::Logical)
                .run_if(gameplay_active),
        );
    }
}

/// Copy the controller's final state into the animator parameters.
/// Vertical speed comes from the body, after the solver has run.
fn publish_animation_params(
    mut query: Query<(&MotionController, &LinearVelocity, &mut AnimationParams)>,
) {
    for (controller, velocity, mut params) in &mut query {
        params.set(
            controller.move_input.x.abs(),
            velocity.y,
            controller.is_grounded(),
            controller.is_crouching(),
        );
    }
}

fn animation_state_machine(
    time: Res<Time>,
    tuning: Res<MotionTuning>,
    mut changed_events: MessageWriter<AnimationStateChanged>,
    mut query: Query<(Entity, &AnimationParams, &mut AnimationController)>,
) {
    for (entity, params, mut animation) in &mut query {
        let next = AnimationState::from_params(params, tuning.walk_threshold);
        if animation.set_state(next) {
            changed_events.write(AnimationStateChanged {
                entity,
                from: animation.previous_state,
                to: next,
            });
        } else {
            animation.state_time += time.delta_secs();
        }
    }
}

fn log_animation_transitions(mut changed_events: MessageReader<AnimationStateChanged>) {
    for event in changed_events.read() {
        debug!(
            "Animation: entity={:?}, {:?} -> {:?} (clip={}, looping={})",
            event.entity,
            event.from,
            event.to,
            event.to.clip_name(),
            event.to.is_looping()
        );
    }
}
