//! Movement domain: one-shot delayed actions driven by step deltas.

use std::time::Duration;

use bevy::prelude::*;

/// Handle to a scheduled action, usable for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Pending<A> {
    id: TimerId,
    timer: Timer,
    action: A,
}

/// Single-threaded queue of actions that fire once after a delay.
///
/// Each entry owns its own countdown, ticked through [`DelayedActions::tick`],
/// so there is no shared clock to lose precision over a long session.
#[derive(Debug, Clone)]
pub struct DelayedActions<A> {
    next_id: u64,
    pending: Vec<Pending<A>>,
}

impl<A> Default for DelayedActions<A> {
    fn default() -> Self {
        Self {
            next_id: 0,
            pending: Vec::new(),
        }
    }
}

impl<A> DelayedActions<A> {
    pub fn schedule(&mut self, delay_secs: f32, action: A) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            timer: Timer::from_seconds(delay_secs.max(0.0), TimerMode::Once),
            action,
        });
        id
    }

    /// Returns false if the action already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != id);
        self.pending.len() != before
    }

    /// Tick every countdown and return the actions that finished,
    /// earliest deadline first (ties in scheduling order).
    pub fn tick(&mut self, delta: Duration) -> Vec<(TimerId, A)> {
        let mut due = Vec::new();
        let mut rest = Vec::with_capacity(self.pending.len());

        for mut pending in self.pending.drain(..) {
            let left_before = pending.timer.remaining();
            pending.timer.tick(delta);
            if pending.timer.remaining_secs() == 0.0 {
                due.push((left_before, pending));
            } else {
                rest.push(pending);
            }
        }
        self.pending = rest;

        due.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.id.0.cmp(&b.1.id.0)));
        due.into_iter().map(|(_, p)| (p.id, p.action)).collect()
    }

    /// Seconds until the given action fires, if it is still pending.
    pub fn remaining(&self, id: TimerId) -> Option<f32> {
        self.pending
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.timer.remaining_secs())
    }

    #[cfg(test)]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
