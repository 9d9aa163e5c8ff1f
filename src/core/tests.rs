//! Core domain: tests for pausing the simulation.

use avian2d::prelude::*;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::resources::PAUSE_MENU_SOURCE;
use super::systems::{sync_physics_pause, toggle_pause};
use super::GameplayPaused;

fn pause_world() -> World {
    let mut world = World::new();
    world.init_resource::<GameplayPaused>();
    world.insert_resource(Time::new_with(Physics::default()));
    world.insert_resource(ButtonInput::<KeyCode>::default());
    world
}

fn press_escape(world: &mut World) {
    let mut keyboard = world.resource_mut::<ButtonInput<KeyCode>>();
    keyboard.release(KeyCode::Escape);
    keyboard.clear();
    keyboard.press(KeyCode::Escape);
    world.run_system_once(toggle_pause).expect("toggle_pause runs");
    world.run_system_once(sync_physics_pause).expect("sync_physics_pause runs");
}

#[test]
fn test_escape_pauses_and_resumes_physics_clock() {
    let mut world = pause_world();

    press_escape(&mut world);
    assert!(world.resource::<GameplayPaused>().is_paused());
    assert!(world.resource::<Time<Physics>>().is_paused());

    press_escape(&mut world);
    assert!(!world.resource::<GameplayPaused>().is_paused());
    assert!(!world.resource::<Time<Physics>>().is_paused());
}

#[test]
fn test_physics_clock_stays_paused_while_any_source_is_active() {
    let mut world = pause_world();
    world.resource_mut::<GameplayPaused>().pause("debug");

    press_escape(&mut world);
    press_escape(&mut world);

    assert!(world.resource::<GameplayPaused>().sources.contains("debug"));
    assert!(world.resource::<Time<Physics>>().is_paused());

    world.resource_mut::<GameplayPaused>().unpause("debug");
    world.run_system_once(sync_physics_pause).expect("sync_physics_pause runs");
    assert!(!world.resource::<Time<Physics>>().is_paused());
}
