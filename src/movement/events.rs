//! Movement domain: outbound locomotion messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::{AttackVariant, MovementState};

/// Fired on every state transition
#[derive(Debug)]
pub struct MovementStateChanged {
    pub entity: Entity,
    pub from: MovementState,
    pub to: MovementState,
}

impl Message for MovementStateChanged {}

/// Fired when the player flips facing; the camera follow target turns with it
#[derive(Debug)]
pub struct PlayerTurned {
    pub entity: Entity,
    pub facing_right: bool,
}

impl Message for PlayerTurned {}

/// Fired when a melee swing begins
#[derive(Debug)]
pub struct MeleeAttackStarted {
    pub entity: Entity,
    pub variant: AttackVariant,
    pub duration: f32,
}

impl Message for MeleeAttackStarted {}
