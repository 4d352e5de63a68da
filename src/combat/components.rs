//! Combat domain: components for health, hit feedback and melee swings.

use bevy::prelude::*;

use crate::movement::AttackVariant;

/// Seconds a hit flash takes to fade back to the base color.
pub const DAMAGE_FLASH_DURATION: f32 = 0.15;
/// Minimum spacing between two hits landing on the same enemy.
pub const ENEMY_DAMAGE_COOLDOWN: f32 = 0.25;

/// Health component for damageable entities
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let actual = amount.max(0.0).min(self.current);
        self.current -= actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    pub fn percent(&self) -> f32 {
        if self.max > 0.0 {
            self.current / self.max
        } else {
            0.0
        }
    }
}

/// White flash blended over `base_color` after a hit. The flash owns the
/// sprite color; other systems tint by changing `base_color`.
#[derive(Component, Debug, Clone)]
pub struct DamageFlash {
    pub base_color: Color,
    pub remaining: f32,
    pub duration: f32,
}

impl DamageFlash {
    pub fn new(base_color: Color) -> Self {
        Self {
            base_color,
            remaining: 0.0,
            duration: DAMAGE_FLASH_DURATION,
        }
    }

    /// Restart the flash from full strength.
    pub fn trigger(&mut self) {
        self.remaining = self.duration;
    }

    pub fn tick(&mut self, dt: f32) {
        self.remaining = (self.remaining - dt).max(0.0);
    }

    /// 1 right after a hit, fading linearly to 0.
    pub fn amount(&self) -> f32 {
        if self.duration > 0.0 {
            (self.remaining / self.duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// Marks an enemy that player swings can damage and push around.
#[derive(Component, Debug)]
pub struct Enemy;

/// Enemies ignore hits that land inside this window.
#[derive(Component, Debug, Default)]
pub struct DamageCooldown {
    pub remaining: f32,
}

impl DamageCooldown {
    pub fn is_ready(&self) -> bool {
        self.remaining <= 0.0
    }
}

/// Static damage source such as spikes.
#[derive(Component, Debug)]
pub struct Hazard;

/// Damage dealt to the player on overlap.
#[derive(Component, Debug, Clone, Copy)]
pub struct ContactDamage {
    pub amount: f32,
}

/// Sensor spawned for the length of one melee swing.
#[derive(Component, Debug)]
pub struct MeleeHitbox {
    pub owner: Entity,
    pub variant: AttackVariant,
    pub damage: f32,
    pub hit_entities: Vec<Entity>,
}

#[derive(Component, Debug)]
pub struct HitboxLifetime(pub f32);

const FORWARD_REACH: f32 = 0.8;
const VERTICAL_REACH: f32 = 1.0;

/// Hitbox center relative to the swinging entity.
pub fn hitbox_offset(variant: AttackVariant, facing_sign: f32) -> Vec2 {
    match variant {
        AttackVariant::Forward => Vec2::new(FORWARD_REACH * facing_sign, 0.0),
        AttackVariant::Up => Vec2::new(0.0, VERTICAL_REACH),
        AttackVariant::Down => Vec2::new(0.0, -VERTICAL_REACH),
    }
}

pub fn hitbox_size(variant: AttackVariant) -> Vec2 {
    match variant {
        AttackVariant::Forward => Vec2::new(1.0, 0.8),
        AttackVariant::Up | AttackVariant::Down => Vec2::new(0.8, 1.0),
    }
}
