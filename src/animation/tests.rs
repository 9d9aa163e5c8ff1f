//! Animation domain: tests for parameter publishing and state selection.

use avian2d::prelude::*;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::{
    AnimationController, AnimationParameterBridge, AnimationParams, AnimationState,
    publish_animation_params,
};
use crate::movement::{MotionController, MotionTuning};

fn params(horizontal: f32, vertical: f32, grounded: bool, crouching: bool) -> AnimationParams {
    let mut params = AnimationParams::default();
    params.set(horizontal, vertical, grounded, crouching);
    params
}

#[test]
fn test_bridge_stores_parameters() {
    let p = params(0.5, -3.0, false, false);
    assert_eq!(p.horizontal, 0.5);
    assert_eq!(p.vertical, -3.0);
    assert!(!p.grounded);
    assert!(!p.crouching);
}

#[test]
fn test_state_selection() {
    let threshold = 0.1;
    let cases = [
        (params(0.0, 0.0, true, false), AnimationState::Idle),
        (params(1.0, 0.0, true, false), AnimationState::Run),
        (params(0.0, 0.0, true, true), AnimationState::Crouch),
        (params(1.0, 0.0, true, true), AnimationState::CrouchWalk),
        (params(1.0, 5.0, false, false), AnimationState::Jump),
        (params(0.0, -5.0, false, false), AnimationState::Fall),
        (params(0.05, 0.0, true, false), AnimationState::Idle),
    ];

    for (p, expected) in cases {
        assert_eq!(AnimationState::from_params(&p, threshold), expected, "{p:?}");
    }
}

#[test]
fn test_airborne_ignores_crouch_flag() {
    let p = params(0.0, 2.0, false, true);
    assert_eq!(AnimationState::from_params(&p, 0.1), AnimationState::Jump);
}

#[test]
fn test_controller_tracks_transitions() {
    let mut controller = AnimationController::default();
    controller.state_time = 1.0;

    assert!(!controller.set_state(AnimationState::Idle));
    assert_eq!(controller.state_time, 1.0);

    assert!(controller.set_state(AnimationState::Jump));
    assert_eq!(controller.previous_state, AnimationState::Idle);
    assert_eq!(controller.state, AnimationState::Jump);
    assert_eq!(controller.state_time, 0.0);
}

#[test]
fn test_looping_states() {
    assert!(AnimationState::Run.is_looping());
    assert!(AnimationState::Crouch.is_looping());
    assert!(!AnimationState::Jump.is_looping());
    assert_eq!(AnimationState::CrouchWalk.clip_name(), "crouch_walk");
}

#[test]
fn test_published_vertical_speed_comes_from_body() {
    let mut world = World::new();
    let mut controller = MotionController::new(&MotionTuning::default());
    controller.move_input = Vec2::new(-1.0, 0.0);
    controller.velocity = Vec2::new(0.0, 0.0);

    let entity = world
        .spawn((
            controller,
            LinearVelocity(Vec2::new(-300.0, -40.0)),
            AnimationParams::default(),
        ))
        .id();

    world
        .run_system_once(publish_animation_params)
        .expect("publish_animation_params runs");

    let params = world.get::<AnimationParams>(entity).expect("params present");
    assert_eq!(params.horizontal, 1.0);
    assert_eq!(params.vertical, -40.0);
    assert_eq!(
        AnimationState::from_params(params, 0.1),
        AnimationState::Fall
    );
}
