//! Movement domain: fixed-timestep probing, velocity and hold timers.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{
    GroundTransition, JumpHoldEndedEvent, LandedEvent, MotionController, MotionTuning, Player,
};

/// Refresh both probes once per physics step.
pub(crate) fn probe_surroundings(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &mut MotionController), With<Player>>,
) {
    for (transform, mut controller) in &mut query {
        controller.probe_environment(&spatial_query, transform.translation.truncate());
    }
}

/// Physics pass: horizontal velocity, hold force and hold expiry.
pub(crate) fn apply_motion_physics(
    time: Res<Time>,
    tuning: Res<MotionTuning>,
    mut landed_events: MessageWriter<LandedEvent>,
    mut hold_events: MessageWriter<JumpHoldEndedEvent>,
    mut query: Query<(Entity, &mut MotionController, &mut LinearVelocity), With<Player>>,
) {
    for (entity, mut controller, mut velocity) in &mut query {
        // Gravity and contacts changed the body since last step
        controller.velocity = velocity.0;

        let report =
            controller.physics_pass(tuning.crouch_speed_factor, tuning.base_speed, time.delta());

        velocity.0 = controller.velocity;

        match report.ground_transition {
            Some(GroundTransition::Landed) => {
                landed_events.write(LandedEvent { entity });
            }
            Some(GroundTransition::LeftGround) => {
                debug!("Left ground: entity={:?}", entity);
            }
            None => {}
        }
        if let Some(reason) = report.hold_ended {
            hold_events.write(JumpHoldEndedEvent { entity, reason });
        }
    }
}
