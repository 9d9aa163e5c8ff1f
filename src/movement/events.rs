//! Movement domain: messages emitted by the motion controller systems.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::HoldEndReason;

/// A jump started from the ground.
#[derive(Debug)]
pub struct JumpedEvent {
    pub entity: Entity,
}

impl Message for JumpedEvent {}

/// The upward hold force stopped, either by expiry or button release.
#[derive(Debug)]
pub struct JumpHoldEndedEvent {
    pub entity: Entity,
    pub reason: HoldEndReason,
}

impl Message for JumpHoldEndedEvent {}

/// The ground probe started hitting after a step without a hit.
#[derive(Debug)]
pub struct LandedEvent {
    pub entity: Entity,
}

impl Message for LandedEvent {}
