//! Movement domain: the grounded-state character motion controller.
//!
//! Everything here is plain state plus arithmetic. The Bevy systems in
//! `movement::systems` feed it probe results and input and copy its velocity
//! back onto the rigid body.

use std::time::Duration;

use bevy::prelude::*;

use crate::movement::input::{ButtonEdge, InputSource};
use crate::movement::probe::{EnvironmentProbe, RayCaster};
use crate::movement::shape::{ColliderShapeState, ColliderShapeTarget};
use crate::movement::timers::{DelayedActions, TimerId};
use crate::movement::{JumpHoldPolicy, MotionTuning};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stance {
    #[default]
    Standing,
    Crouching,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionTimer {
    EndJumpHold { generation: u64 },
}

/// Why a jump hold stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldEndReason {
    Expired,
    Released,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundTransition {
    Landed,
    LeftGround,
}

/// What a controller pass changed that other systems may want to hear about.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    pub jumped: bool,
    pub hold_ended: Option<HoldEndReason>,
    pub ground_transition: Option<GroundTransition>,
}

#[derive(Component, Debug, Clone)]
pub struct MotionController {
    pub velocity: Vec2,
    pub move_input: Vec2,
    is_jumping: bool,
    is_crouching: bool,
    grounded: bool,
    facing_scale: f32,

    jump_force: f32,
    keep_jumping_force: f32,
    keep_jumping_duration: f32,
    body_mass: f32,
    hold_policy: JumpHoldPolicy,

    pub ground_probe: EnvironmentProbe,
    pub head_probe: EnvironmentProbe,
    standing: ColliderShapeState,
    crouching: ColliderShapeState,
    applied_stance: Option<Stance>,

    timers: DelayedActions<MotionTimer>,
    jump_generation: u64,
    hold_timer: Option<TimerId>,
}

impl MotionController {
    pub fn new(tuning: &MotionTuning) -> Self {
        let standing = ColliderShapeState::standing(tuning.standing_size());
        let mut head_probe = EnvironmentProbe::new(
            tuning.head_probe.offset(),
            tuning.head_probe.max_range,
            tuning.head_probe.mask(),
        );
        head_probe.origin_offset.y = standing.top();

        Self {
            velocity: Vec2::ZERO,
            move_input: Vec2::ZERO,
            is_jumping: false,
            is_crouching: false,
            grounded: false,
            facing_scale: 1.0,
            jump_force: tuning.jump_force,
            keep_jumping_force: tuning.keep_jumping_force,
            keep_jumping_duration: tuning.keep_jumping_duration,
            body_mass: tuning.body_mass,
            hold_policy: tuning.hold_policy,
            ground_probe: EnvironmentProbe::new(
                tuning.ground_probe.offset(),
                tuning.ground_probe.max_range,
                tuning.ground_probe.mask(),
            ),
            head_probe,
            standing,
            crouching: ColliderShapeState::crouching(standing.size),
            applied_stance: None,
            timers: DelayedActions::default(),
            jump_generation: 0,
            hold_timer: None,
        }
    }

    pub fn is_jumping(&self) -> bool {
        self.is_jumping
    }

    pub fn is_crouching(&self) -> bool {
        self.is_crouching
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// +1 facing right, -1 facing left.
    pub fn facing_scale(&self) -> f32 {
        self.facing_scale
    }

    pub fn stance(&self) -> Stance {
        if self.is_crouching {
            Stance::Crouching
        } else {
            Stance::Standing
        }
    }

    pub fn active_shape(&self) -> ColliderShapeState {
        match self.stance() {
            Stance::Standing => self.standing,
            Stance::Crouching => self.crouching,
        }
    }

    pub fn standing_shape(&self) -> ColliderShapeState {
        self.standing
    }

    /// Seconds left before the current hold expires; zero when not jumping.
    pub fn jump_hold_remaining(&self) -> f32 {
        if !self.is_jumping {
            return 0.0;
        }
        self.hold_timer
            .and_then(|id| self.timers.remaining(id))
            .unwrap_or(0.0)
    }

    #[cfg(test)]
    pub fn pending_hold_expiries(&self) -> usize {
        self.timers.pending_count()
    }

    /// Cast both probes from the body origin. Results stay cached on the
    /// probes until the next call.
    pub fn probe_environment(&mut self, caster: &impl RayCaster, position: Vec2) {
        self.ground_probe.probe(caster, position, Vec2::NEG_Y);
        self.head_probe.probe(caster, position, Vec2::Y);
    }

    /// Logical pass: derive crouch from input and probes, then switch shape.
    /// Returns the new stance when it changed.
    pub fn update_logical(
        &mut self,
        move_input: Vec2,
        ground_probe_hit: bool,
        head_probe_hit: bool,
        target: &mut impl ColliderShapeTarget,
    ) -> Option<Stance> {
        self.move_input = move_input;
        self.is_crouching = ground_probe_hit && (move_input.y < 0.0 || head_probe_hit);

        let stance = self.stance();
        let active = self.active_shape();
        self.head_probe.origin_offset.y = active.top();

        // Shapes are only pushed to the collider when the stance flips
        match self.applied_stance.replace(stance) {
            Some(prev) if prev == stance => None,
            Some(prev) => {
                active.apply(target);
                debug!("Stance changed: {:?} -> {:?}", prev, stance);
                Some(stance)
            }
            None => {
                active.apply(target);
                None
            }
        }
    }

    /// Physics pass: horizontal velocity, facing and jump-hold force.
    pub fn update_physics(
        &mut self,
        ground_probe_hit: bool,
        crouch_speed_factor: f32,
        base_speed: f32,
        dt: f32,
    ) -> Option<GroundTransition> {
        let transition = match (self.grounded, ground_probe_hit) {
            (false, true) => Some(GroundTransition::Landed),
            (true, false) => Some(GroundTransition::LeftGround),
            _ => None,
        };
        self.grounded = ground_probe_hit;

        let speed_factor = if self.is_crouching {
            crouch_speed_factor
        } else {
            1.0
        };
        self.velocity.x = base_speed * speed_factor * self.move_input.x;

        if self.move_input.x > 0.0 {
            self.facing_scale = 1.0;
        } else if self.move_input.x < 0.0 {
            self.facing_scale = -1.0;
        }

        if self.is_jumping {
            self.velocity.y += self.keep_jumping_force / self.body_mass * dt;
        }

        transition
    }

    /// Start a jump if grounded and standing. Returns whether it started.
    pub fn try_jump(&mut self, ground_probe_hit: bool) -> bool {
        if !ground_probe_hit || self.is_crouching {
            return false;
        }

        self.velocity.y = self.jump_force;
        self.is_jumping = true;
        self.jump_generation += 1;

        if self.hold_policy == JumpHoldPolicy::LatestOnly
            && let Some(previous) = self.hold_timer.take()
        {
            self.timers.cancel(previous);
        }
        self.hold_timer = Some(self.timers.schedule(
            self.keep_jumping_duration,
            MotionTimer::EndJumpHold {
                generation: self.jump_generation,
            },
        ));

        debug!(
            "Jump: generation={}, velocity_y={}, hold={}s",
            self.jump_generation, self.velocity.y, self.keep_jumping_duration
        );
        true
    }

    /// End the hold early. Returns whether a hold was active.
    pub fn cancel_jump(&mut self) -> bool {
        let was_jumping = self.is_jumping;
        self.is_jumping = false;
        was_jumping
    }

    /// Route a jump button edge. Returns what happened to the hold, if anything.
    pub fn handle_jump_edge(
        &mut self,
        edge: ButtonEdge,
        ground_probe_hit: bool,
    ) -> (bool, Option<HoldEndReason>) {
        match edge {
            ButtonEdge::Pressed => (self.try_jump(ground_probe_hit), None),
            ButtonEdge::Released => {
                let ended = self.cancel_jump().then_some(HoldEndReason::Released);
                if ended.is_some() {
                    debug!("Jump hold released: generation={}", self.jump_generation);
                }
                (false, ended)
            }
        }
    }

    /// Tick the hold timers. Returns true when an expiry ended an active hold.
    pub fn advance_timers(&mut self, delta: Duration) -> bool {
        let mut ended = false;

        for (id, action) in self.timers.tick(delta) {
            let MotionTimer::EndJumpHold { generation } = action;
            if self.hold_timer == Some(id) {
                self.hold_timer = None;
            }
            if self.hold_policy == JumpHoldPolicy::LatestOnly && generation != self.jump_generation
            {
                continue;
            }
            if self.is_jumping {
                debug!(
                    "Jump hold expired: generation={}, latest={}",
                    generation, self.jump_generation
                );
                ended = true;
            }
            self.is_jumping = false;
        }

        ended
    }

    /// Per-frame half of a step: stance from the cached probes, then every
    /// queued jump edge.
    pub fn logical_pass(
        &mut self,
        input: &mut impl InputSource,
        target: &mut impl ColliderShapeTarget,
    ) -> StepReport {
        let grounded = self.ground_probe.hit();
        let head_blocked = self.head_probe.hit();
        let mut report = StepReport::default();

        self.update_logical(input.move_axis(), grounded, head_blocked, target);

        while let Some(edge) = input.poll_jump() {
            let (jumped, ended) = self.handle_jump_edge(edge, grounded);
            report.jumped |= jumped;
            if ended.is_some() {
                report.hold_ended = ended;
            }
        }

        report
    }

    /// Fixed-step half of a step: velocity from the cached ground probe, then hold timers.
    pub fn physics_pass(
        &mut self,
        crouch_speed_factor: f32,
        base_speed: f32,
        delta: Duration,
    ) -> StepReport {
        let grounded = self.ground_probe.hit();
        let mut report = StepReport::default();

        report.ground_transition =
            self.update_physics(grounded, crouch_speed_factor, base_speed, delta.as_secs_f32());

        if self.advance_timers(delta) {
            report.hold_ended = Some(HoldEndReason::Expired);
        }

        report
    }

    /// One full step through the same passes the schedules run separately.
    #[cfg(test)]
    #[allow(clippy::too_many_arguments)]
    pub fn step(
        &mut self,
        input: &mut impl InputSource,
        caster: &impl RayCaster,
        position: Vec2,
        target: &mut impl ColliderShapeTarget,
        base_speed: f32,
        crouch_speed_factor: f32,
        delta: Duration,
    ) -> StepReport {
        self.probe_environment(caster, position);

        let logical = self.logical_pass(input, target);
        let physics = self.physics_pass(crouch_speed_factor, base_speed, delta);

        StepReport {
            jumped: logical.jumped,
            hold_ended: physics.hold_ended.or(logical.hold_ended),
            ground_transition: physics.ground_transition,
        }
    }
}
