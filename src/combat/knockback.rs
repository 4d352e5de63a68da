//! Combat domain: knockback and recoil applied to the locomotion controller.
//!
//! Both share one gate: while `timers.knockback` is positive the controller
//! skips its locomotion forces and further knockback or recoil is ignored.

use bevy::prelude::*;

use crate::combat::components::Health;
use crate::movement::body::sign;
use crate::movement::{AttackVariant, Locomotion, MovementTuning};

/// Downward swings bounce harder so the player can pogo off targets.
pub const DOWNWARD_RECOIL_MULT: f32 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DamageOutcome {
    /// Knockback lock was active.
    Ignored,
    Damaged { remaining: f32 },
    Defeated,
}

/// Impulses produced by a connecting swing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recoil {
    pub player_impulse: Vec2,
    pub enemy_impulse: Vec2,
}

/// Launch the player away from a hit. `hit_direction` points from the player
/// toward the damage source. Returns the impulse, or `None` while locked.
pub fn apply_knockback(
    locomotion: &mut Locomotion,
    tuning: &MovementTuning,
    hit_direction: Vec2,
) -> Option<Vec2> {
    if locomotion.is_knockback_locked() {
        return None;
    }

    let away_x = if hit_direction.x != 0.0 {
        -sign(hit_direction.x)
    } else {
        -locomotion.motion.facing_sign()
    };

    let direction = if locomotion.timers.is_grounded() {
        Vec2::new(away_x, 1.0).normalize()
    } else {
        Vec2::Y
    };

    let impulse = direction * tuning.profile.knockback_force;
    locomotion.timers.knockback = tuning.profile.knockback_duration;
    locomotion.body.velocity = Vec2::ZERO;
    locomotion.body.add_impulse(impulse);

    debug!(
        "Knockback: hit_direction={:?}, impulse=({:.2}, {:.2}), lock={:.2}s",
        hit_direction, impulse.x, impulse.y, tuning.profile.knockback_duration
    );
    Some(impulse)
}

/// Reduce health and knock the player back. Hits landing inside the
/// knockback window are ignored entirely.
pub fn take_damage(
    locomotion: &mut Locomotion,
    health: &mut Health,
    tuning: &MovementTuning,
    amount: f32,
    hit_direction: Vec2,
) -> DamageOutcome {
    if locomotion.is_knockback_locked() {
        return DamageOutcome::Ignored;
    }

    health.take_damage(amount);
    apply_knockback(locomotion, tuning, hit_direction);

    if health.is_dead() {
        DamageOutcome::Defeated
    } else {
        DamageOutcome::Damaged {
            remaining: health.current,
        }
    }
}

/// Bounce the player off whatever a swing connected with. Returns the
/// impulses for both sides, or `None` while locked.
pub fn apply_recoil(
    locomotion: &mut Locomotion,
    tuning: &MovementTuning,
    variant: AttackVariant,
) -> Option<Recoil> {
    if locomotion.is_knockback_locked() {
        return None;
    }

    let force = tuning.profile.recoil_force;
    let (direction, player_force) = match variant {
        AttackVariant::Down => (Vec2::Y, force * DOWNWARD_RECOIL_MULT),
        AttackVariant::Forward | AttackVariant::Up => {
            (Vec2::X * -locomotion.motion.facing_sign(), force)
        }
    };

    locomotion.timers.knockback = tuning.profile.knockback_duration;
    locomotion.body.velocity = Vec2::ZERO;
    let player_impulse = direction * player_force;
    locomotion.body.add_impulse(player_impulse);

    debug!(
        "Recoil: variant={:?}, player_impulse=({:.2}, {:.2})",
        variant, player_impulse.x, player_impulse.y
    );
    Some(Recoil {
        player_impulse,
        enemy_impulse: -direction * force,
    })
}
