//! Movement domain: system modules for locomotion updates.

pub(crate) mod input;
pub(crate) mod logic;
pub(crate) mod messages;
pub(crate) mod physics;

pub(crate) use input::read_input;
pub(crate) use logic::{run_logical_pass, sync_body_sprite};
pub(crate) use messages::log_motion_messages;
pub(crate) use physics::{apply_motion_physics, probe_surroundings};
