//! Movement domain: player bootstrap from the loaded tuning file.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::{DamageFlash, Health, PlayerDefeated};
use crate::content::PlayerConfig;
use crate::movement::{
    GameLayer, Locomotion, MovementState, MovementStateChanged, MovementTuning, Player,
    SpawnPoint,
};

/// Player collider size in world units.
const PLAYER_SIZE: Vec2 = Vec2::new(0.75, 1.5);
const PLAYER_SPAWN: Vec2 = Vec2::new(0.0, -2.0);

/// Spawn the player from `PlayerConfig`. Runs after the config is loaded.
pub(crate) fn spawn_player(
    mut commands: Commands,
    config: Res<PlayerConfig>,
    tuning: Res<MovementTuning>,
) {
    let profile = &config.profile;

    info!(
        "Spawning player: health={}, run_max_speed={}, jump_force={:.2}, dash_power={}",
        profile.max_health, profile.run_max_speed, tuning.derived.jump_force, profile.dash_power
    );

    commands.spawn((
        // Identity & Movement
        (
            Player,
            SpawnPoint(PLAYER_SPAWN),
            Locomotion::new(&tuning),
            config.probes.clone(),
        ),
        // Combat
        (
            Health::new(profile.max_health as f32),
            DamageFlash::new(state_color(MovementState::Idle)),
        ),
        // Rendering
        Sprite {
            color: state_color(MovementState::Idle),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_translation(PLAYER_SPAWN.extend(0.0)),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // Locomotion integrates its own dynamic gravity
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Player,
                [
                    GameLayer::Ground,
                    GameLayer::Wall,
                    GameLayer::Enemy,
                    GameLayer::Hazard,
                ],
            ),
        ),
    ));
}

/// Put a defeated player back at its spawn point with full health.
pub(crate) fn respawn_defeated_player(
    mut defeats: MessageReader<PlayerDefeated>,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (
            &SpawnPoint,
            &mut Transform,
            &mut Locomotion,
            &mut Health,
            &mut DamageFlash,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    for defeat in defeats.read() {
        let Ok((spawn, mut transform, mut locomotion, mut health, mut flash, mut velocity)) =
            query.get_mut(defeat.entity)
        else {
            continue;
        };

        transform.translation = spawn.0.extend(transform.translation.z);
        *locomotion = Locomotion::new(&tuning);
        health.current = health.max;
        flash.base_color = state_color(MovementState::Idle);
        velocity.0 = Vec2::ZERO;
        info!("Player respawned at {:?}", spawn.0);
    }
}

/// Tint the placeholder sprite by locomotion state. The flash component owns
/// the final sprite color so a hit flash blends over the state tint.
pub(crate) fn tint_player_by_state(
    mut changes: MessageReader<MovementStateChanged>,
    mut flashes: Query<&mut DamageFlash, With<Player>>,
) {
    for change in changes.read() {
        if let Ok(mut flash) = flashes.get_mut(change.entity) {
            flash.base_color = state_color(change.to);
        }
    }
}

pub(crate) fn state_color(state: MovementState) -> Color {
    match state {
        MovementState::Idle => Color::srgb(0.9, 0.9, 0.9),
        MovementState::Run => Color::srgb(0.85, 0.95, 0.85),
        MovementState::Jump | MovementState::WallJump => Color::srgb(0.85, 0.85, 0.95),
        MovementState::Fall => Color::srgb(0.75, 0.75, 0.85),
        MovementState::WallSlide => Color::srgb(0.95, 0.93, 0.8),
        MovementState::Dash => Color::srgb(0.6, 0.9, 1.0),
        MovementState::MeleeAttack => Color::srgb(0.95, 0.85, 0.85),
    }
}
