//! Core domain: camera, pause handling and shared run conditions.

mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub use resources::{GameplayPaused, gameplay_active};

use bevy::prelude::*;

use crate::core::systems::{setup_camera, sync_physics_pause, toggle_pause};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameplayPaused>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (
                    toggle_pause,
                    sync_physics_pause.run_if(resource_changed::<GameplayPaused>),
                )
                    .chain(),
            );
    }
}
