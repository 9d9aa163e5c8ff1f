//! Test room: floor, walls, platforms and a low tunnel that forces a crouch.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground};

const FLOOR_TOP: f32 = -180.0;
/// Clearance under the tunnel roof; taller than a crouch, shorter than standing.
const TUNNEL_CLEARANCE: f32 = 27.0;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_test_room);
    }
}

#[derive(Debug, Clone, Copy)]
struct Block {
    center: Vec2,
    size: Vec2,
    color: Color,
}

fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let blocks = [
        // Floor
        Block {
            center: Vec2::new(0.0, FLOOR_TOP - 20.0),
            size: Vec2::new(800.0, 40.0),
            color: ground_color,
        },
        // Left wall
        Block {
            center: Vec2::new(-420.0, 50.0),
            size: Vec2::new(40.0, 500.0),
            color: wall_color,
        },
        // Right wall
        Block {
            center: Vec2::new(420.0, 50.0),
            size: Vec2::new(40.0, 500.0),
            color: wall_color,
        },
        // Platform 1 - left side
        Block {
            center: Vec2::new(-250.0, -50.0),
            size: Vec2::new(150.0, 20.0),
            color: platform_color,
        },
        // Platform 2 - center, higher
        Block {
            center: Vec2::new(-20.0, 40.0),
            size: Vec2::new(120.0, 20.0),
            color: platform_color,
        },
        // Tunnel roof
        Block {
            center: Vec2::new(200.0, FLOOR_TOP + TUNNEL_CLEARANCE + 30.0),
            size: Vec2::new(200.0, 60.0),
            color: wall_color,
        },
    ];

    // Walls share the ground layer so the head probe sees every solid surface
    let ground_layers =
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Default]);

    for block in blocks {
        commands.spawn((
            Ground,
            Sprite {
                color: block.color,
                custom_size: Some(block.size),
                ..default()
            },
            Transform::from_translation(block.center.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(block.size.x, block.size.y),
            ground_layers,
        ));
    }

    info!("Spawned test room with {} blocks", blocks.len());
}
