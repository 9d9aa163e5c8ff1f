//! Movement domain: input source contract and button edge detection.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEdge {
    Pressed,
    Released,
}

/// Where the controller reads player intent from.
pub trait InputSource {
    fn move_axis(&self) -> Vec2;

    /// Next queued jump edge, oldest first.
    fn poll_jump(&mut self) -> Option<ButtonEdge>;
}

/// Turns a sampled button level into press/release edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeDetector {
    held: bool,
}

impl EdgeDetector {
    /// Yields an edge only when the level differs from the previous sample.
    pub fn sample(&mut self, held: bool) -> Option<ButtonEdge> {
        let edge = match (self.held, held) {
            (false, true) => Some(ButtonEdge::Pressed),
            (true, false) => Some(ButtonEdge::Released),
            _ => None,
        };
        self.held = held;
        edge
    }
}
