//! Movement domain: logging for controller messages.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::{JumpHoldEndedEvent, JumpedEvent, LandedEvent, MotionController};

pub(crate) fn log_motion_messages(
    mut jumped_events: MessageReader<JumpedEvent>,
    mut hold_events: MessageReader<JumpHoldEndedEvent>,
    mut landed_events: MessageReader<LandedEvent>,
    controllers: Query<&MotionController>,
) {
    for event in jumped_events.read() {
        let hold = controllers
            .get(event.entity)
            .map(|c| c.jump_hold_remaining())
            .unwrap_or_default();
        debug!("Jumped: entity={:?}, hold_left={:.3}s", event.entity, hold);
    }

    for event in hold_events.read() {
        debug!("Jump hold ended: entity={:?}, reason={:?}", event.entity, event.reason);
    }

    for event in landed_events.read() {
        let Ok(controller) = controllers.get(event.entity) else {
            continue;
        };
        let gap = controller
            .ground_probe
            .last_hit()
            .map(|hit| hit.distance)
            .unwrap_or_default();
        debug!(
            "Landed: entity={:?}, velocity={:?}, ground_gap={:.2}",
            event.entity, controller.velocity, gap
        );
    }
}
