//! Core domain: shared resources for simulation flow.

use bevy::prelude::*;
use std::collections::HashSet;

/// Pause source used by the Escape key.
pub const PAUSE_MENU_SOURCE: &str = "pause_menu";

/// Resource tracking if gameplay should be paused.
/// Gameplay is paused if any source is active.
#[derive(Resource, Debug, Default)]
pub struct GameplayPaused {
    pub sources: HashSet<String>,
}

impl GameplayPaused {
    pub fn is_paused(&self) -> bool {
        !self.sources.is_empty()
    }

    pub fn pause(&mut self, source: impl Into<String>) {
        self.sources.insert(source.into());
    }

    pub fn unpause(&mut self, source: impl Into<String>) {
        self.sources.remove(&source.into());
    }

    /// Flip a single source. Returns whether that source is now active.
    pub fn toggle(&mut self, source: impl Into<String>) -> bool {
        let source = source.into();
        if self.sources.contains(&source) {
            self.unpause(source);
            false
        } else {
            self.pause(source);
            true
        }
    }
}

/// Run condition: returns true only when gameplay is not paused
pub fn gameplay_active(paused: Res<GameplayPaused>) -> bool {
    !paused.is_paused()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pause_sources_stack() {
        let mut paused = GameplayPaused::default();
        assert!(!paused.is_paused());

        paused.pause("a");
        paused.pause("b");
        paused.unpause("a");
        assert!(paused.is_paused());

        paused.unpause("b");
        assert!(!paused.is_paused());
    }

    #[test]
    fn test_toggle_only_touches_its_source() {
        let mut paused = GameplayPaused::default();
        paused.pause("debug");

        assert!(paused.toggle(PAUSE_MENU_SOURCE));
        assert!(!paused.toggle(PAUSE_MENU_SOURCE));
        assert!(paused.is_paused());
        assert!(paused.sources.contains("debug"));
    }
}
