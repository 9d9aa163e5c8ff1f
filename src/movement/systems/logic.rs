//! Movement domain: per-frame stance, jump input and sprite sync.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{
    BodySprite, JumpHoldEndedEvent, JumpedEvent, MotionController, MovementInput, Player,
};

/// Logical pass: crouch and collider shape from the cached probes, then jump edges.
pub(crate) fn run_logical_pass(
    mut input: ResMut<MovementInput>,
    mut jumped_events: MessageWriter<JumpedEvent>,
    mut hold_events: MessageWriter<JumpHoldEndedEvent>,
    mut query: Query<
        (Entity, &mut MotionController, &mut Collider, &mut LinearVelocity),
        With<Player>,
    >,
) {
    for (entity, mut controller, mut collider, mut velocity) in &mut query {
        controller.velocity = velocity.0;

        let report = controller.logical_pass(&mut *input, &mut collider);

        if report.jumped {
            velocity.0 = controller.velocity;
            jumped_events.write(JumpedEvent { entity });
        }
        if let Some(reason) = report.hold_ended {
            hold_events.write(JumpHoldEndedEvent { entity, reason });
        }
    }
}

/// Keep the child sprite matched to the active shape and facing.
pub(crate) fn sync_body_sprite(
    players: Query<(&MotionController, &Children), With<Player>>,
    mut sprites: Query<(&mut Sprite, &mut Transform), With<BodySprite>>,
) {
    for (controller, children) in &players {
        let shape = controller.active_shape();
        for child in children.iter() {
            let Ok((mut sprite, mut transform)) = sprites.get_mut(child) else {
                continue;
            };
            sprite.custom_size = Some(shape.size);
            sprite.flip_x = controller.facing_scale() < 0.0;
            transform.translation.y = shape.vertical_offset;
        }
    }
}
