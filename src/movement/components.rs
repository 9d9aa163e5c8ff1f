//! Movement domain: markers and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum GameLayer {
    #[default]
    Default,
    /// Floors, platforms and ceilings
    Ground,
    /// Player character
    Player,
}

/// Build a layer mask from a list of layers.
pub fn layer_mask(layers: &[GameLayer]) -> LayerMask {
    LayerMask(layers.iter().fold(0, |bits, layer| bits | layer.to_bits()))
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Child entity carrying the player's visible sprite.
/// Kept separate so it can be resized with the stance without touching the body.
#[derive(Component, Debug)]
pub struct BodySprite;
