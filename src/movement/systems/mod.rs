//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use input::read_input;
pub(crate) use movement::{
    advance_locomotion, forward_locomotion_events, integrate_locomotion,
    refresh_derived_constants,
};
