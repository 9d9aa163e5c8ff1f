//! Movement domain: stance-dependent collider shapes.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Something whose physical shape can be resized in place.
pub trait ColliderShapeTarget {
    fn set_shape(&mut self, size: Vec2, vertical_offset: f32);
}

impl ColliderShapeTarget for Collider {
    fn set_shape(&mut self, size: Vec2, vertical_offset: f32) {
        *self = capsule_collider(size, vertical_offset);
    }
}

// Derefs `Mut` only inside `set_shape`, keeping change detection quiet between stance flips.
impl ColliderShapeTarget for Mut<'_, Collider> {
    fn set_shape(&mut self, size: Vec2, vertical_offset: f32) {
        **self = capsule_collider(size, vertical_offset);
    }
}

/// Capsule of the given bounding size, shifted up so its bottom sits at the body origin.
pub fn capsule_collider(size: Vec2, vertical_offset: f32) -> Collider {
    let radius = size.x * 0.5;
    let length = (size.y - size.x).max(0.0);
    Collider::compound(vec![(
        Position::from_xy(0.0, vertical_offset),
        Rotation::default(),
        Collider::capsule(radius, length),
    )])
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColliderShapeState {
    pub size: Vec2,
    pub vertical_offset: f32,
}

impl ColliderShapeState {
    pub fn standing(size: Vec2) -> Self {
        Self {
            size,
            vertical_offset: size.y / 2.0,
        }
    }

    /// Crouch height equals the standing width.
    pub fn crouching(base: Vec2) -> Self {
        Self::standing(Vec2::new(base.x, base.x))
    }

    pub fn apply(&self, target: &mut impl ColliderShapeTarget) {
        target.set_shape(self.size, self.vertical_offset);
    }

    /// Local y of the shape's top edge.
    pub fn top(&self) -> f32 {
        self.vertical_offset + self.size.y / 2.0
    }
}
