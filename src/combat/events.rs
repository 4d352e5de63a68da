//! Combat domain: combat-related messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Something hurt the player. `direction` points from the player toward the
/// damage source.
#[derive(Debug)]
pub struct PlayerHit {
    pub target: Entity,
    pub source: Entity,
    pub amount: f32,
    pub direction: Vec2,
}

impl Message for PlayerHit {}

/// A hit landed and the player was knocked back
#[derive(Debug)]
pub struct PlayerDamaged {
    pub entity: Entity,
    pub amount: f32,
    pub remaining: f32,
}

impl Message for PlayerDamaged {}

#[derive(Debug)]
pub struct PlayerDefeated {
    pub entity: Entity,
}

impl Message for PlayerDefeated {}

/// A player swing connected with an enemy
#[derive(Debug)]
pub struct EnemyHit {
    pub enemy: Entity,
    pub source: Entity,
    pub amount: f32,
}

impl Message for EnemyHit {}

/// Recoil pushed back onto the struck enemy
#[derive(Debug)]
pub struct EnemyKnockback {
    pub enemy: Entity,
    pub impulse: Vec2,
}

impl Message for EnemyKnockback {}

#[derive(Debug)]
pub struct EnemyDefeated {
    pub entity: Entity,
}

impl Message for EnemyDefeated {}
