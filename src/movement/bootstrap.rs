//! Movement domain: player spawn from the loaded motion tuning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::animation::{AnimationController, AnimationParams};
use crate::movement::{
    BodySprite, GameLayer, MotionController, MotionTuning, Player, capsule_collider,
};

const SPAWN_POINT: Vec3 = Vec3::new(-300.0, -150.0, 1.0);

pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MotionTuning>,
    gravity: Res<Gravity>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let controller = MotionController::new(&tuning);
    let shape = controller.standing_shape();

    info!(
        "Spawning player: size={:?}, speed={}, crouch_factor={}, jump_force={} (min apex {:.1}), hold={}s ({:?})",
        shape.size,
        tuning.base_speed,
        tuning.crouch_speed_factor,
        tuning.jump_force,
        tuning.min_jump_height(-gravity.0.y),
        tuning.keep_jumping_duration,
        tuning.hold_policy
    );

    commands
        .spawn((
            // Identity & Movement
            (
                Player,
                controller,
                AnimationParams::default(),
                AnimationController::default(),
            ),
            Transform::from_translation(SPAWN_POINT),
            Visibility::default(),
            // Physics
            (
                RigidBody::Dynamic,
                capsule_collider(shape.size, shape.vertical_offset),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                Mass(tuning.body_mass),
                Friction::new(0.0),
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
            ),
        ))
        .with_children(|body| {
            body.spawn((
                BodySprite,
                Sprite {
                    color: Color::srgb(0.9, 0.9, 0.9),
                    custom_size: Some(shape.size),
                    ..default()
                },
                Transform::from_xyz(0.0, shape.vertical_offset, 0.0),
            ));
        });
}
