//! Combat domain: player damage and knockback, melee swings and recoil.

mod components;
mod events;
pub mod knockback;
mod systems;


pub use components::{
    ContactDamage, DamageCooldown, DamageFlash, Enemy, Hazard, Health, HitboxLifetime,
    MeleeHitbox, hitbox_offset, hitbox_size,
};
pub use events::{
    EnemyDefeated, EnemyHit, EnemyKnockback, PlayerDamaged, PlayerDefeated, PlayerHit,
};
pub use knockback::{DamageOutcome, Recoil, apply_knockback, apply_recoil, take_damage};

use bevy::prelude::*;

use crate::combat::systems::{
    apply_enemy_hits, apply_enemy_knockback, apply_player_hits, cleanup_expired_hitboxes,
    despawn_defeated_enemies, detect_contact_damage, detect_melee_hits, flash_damaged_player,
    follow_melee_hitboxes, spawn_melee_hitboxes, tick_damage_cooldowns, update_damage_flash,
};

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PlayerHit>()
            .add_message::<PlayerDamaged>()
            .add_message::<PlayerDefeated>()
            .add_message::<EnemyHit>()
            .add_message::<EnemyKnockback>()
            .add_message::<EnemyDefeated>()
            .add_systems(
                Update,
                (detect_contact_damage, apply_player_hits, flash_damaged_player).chain(),
            )
            .add_systems(
                Update,
                (
                    spawn_melee_hitboxes,
                    follow_melee_hitboxes,
                    detect_melee_hits,
                    apply_enemy_hits,
                    apply_enemy_knockback,
                    despawn_defeated_enemies,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    tick_damage_cooldowns,
                    cleanup_expired_hitboxes,
                    update_damage_flash,
                ),
            );
    }
}
