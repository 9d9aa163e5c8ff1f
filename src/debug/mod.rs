//! Debug overlay for probe tuning (dev-tools feature).
//!
//! Features:
//! - Draw ground and head probe rays, green on hit and red otherwise
//! - Mark hit points with their surface normal
//! - Outline the active collider shape
//! - Show the remaining jump hold as a shrinking bar

use bevy::prelude::*;

use crate::movement::{EnvironmentProbe, MotionController, Player};

const HOLD_BAR_SECS_TO_PX: f32 = 120.0;

/// Resource tracking debug overlay state
#[derive(Resource, Debug)]
pub struct DebugState {
    /// Whether probe gizmos are drawn
    pub show_probes: bool,
}

impl Default for DebugState {
    fn default() -> Self {
        Self { show_probes: true }
    }
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                toggle_probe_gizmos,
                draw_probe_gizmos.run_if(|state: Res<DebugState>| state.show_probes),
            )
                .chain(),
        );
    }
}

/// Toggle probe gizmos with F1 or backtick key
fn toggle_probe_gizmos(keyboard: Res<ButtonInput<KeyCode>>, mut debug_state: ResMut<DebugState>) {
    if keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote) {
        debug_state.show_probes = !debug_state.show_probes;
        info!("Probe gizmos: {}", debug_state.show_probes);
    }
}

fn draw_probe_gizmos(mut gizmos: Gizmos, query: Query<(&Transform, &MotionController), With<Player>>) {
    for (transform, controller) in &query {
        let position = transform.translation.truncate();

        draw_probe(&mut gizmos, &controller.ground_probe, position, Vec2::NEG_Y);
        draw_probe(&mut gizmos, &controller.head_probe, position, Vec2::Y);

        let shape = controller.active_shape();
        gizmos.rect_2d(
            Isometry2d::from_translation(position + Vec2::new(0.0, shape.vertical_offset)),
            shape.size,
            Color::srgb(0.3, 0.6, 1.0),
        );

        if controller.is_jumping() {
            let bar_start = position + Vec2::new(-shape.size.x / 2.0, shape.top() + 6.0);
            let bar_width = HOLD_BAR_SECS_TO_PX * controller.jump_hold_remaining();
            gizmos.line_2d(bar_start, bar_start + Vec2::X * bar_width, Color::srgb(1.0, 0.6, 0.1));
        }
    }
}

fn draw_probe(gizmos: &mut Gizmos, probe: &EnvironmentProbe, position: Vec2, direction: Vec2) {
    let (start, end) = probe.ray_segment(position, direction);
    let color = if probe.hit() {
        Color::srgb(0.2, 1.0, 0.2)
    } else {
        Color::srgb(1.0, 0.2, 0.2)
    };
    gizmos.line_2d(start, end, color);

    if let Some(hit) = probe.last_hit() {
        gizmos.line_2d(hit.point, hit.point + hit.normal * 8.0, Color::srgb(1.0, 1.0, 0.2));
    }
}
