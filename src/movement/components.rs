//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
    /// Enemy characters
    Enemy,
    /// Player melee swing sensors
    PlayerHitbox,
    /// Static damage sources (spikes, lava)
    Hazard,
}

#[derive(Component, Debug)]
pub struct Player;

/// Where the player reappears after being defeated.
#[derive(Component, Debug, Clone, Copy)]
pub struct SpawnPoint(pub Vec2);

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;
