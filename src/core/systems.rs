//! Core domain: camera setup and pause input.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::resources::{GameplayPaused, PAUSE_MENU_SOURCE};

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub(crate) fn toggle_pause(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut paused: ResMut<GameplayPaused>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        let now_paused = paused.toggle(PAUSE_MENU_SOURCE);
        info!("Gameplay {}", if now_paused { "paused" } else { "resumed" });
    }
}

/// Freeze the physics clock with gameplay so bodies keep still while paused.
pub(crate) fn sync_physics_pause(
    paused: Res<GameplayPaused>,
    mut physics_time: ResMut<Time<Physics>>,
) {
    let should_pause = paused.is_paused();
    if physics_time.is_paused() == should_pause {
        return;
    }

    if should_pause {
        physics_time.pause();
    } else {
        physics_time.unpause();
    }
    debug!("Physics clock paused={}", should_pause);
}
