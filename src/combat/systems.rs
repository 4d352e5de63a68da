//! Combat domain: contact damage, melee swings, enemy hits and hit flashes.

use avian2d::prelude::*;
use bevy::color::Mix;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::components::{
    ContactDamage, DamageCooldown, DamageFlash, ENEMY_DAMAGE_COOLDOWN, Enemy, Hazard, Health,
    HitboxLifetime, MeleeHitbox, hitbox_offset, hitbox_size,
};
use crate::combat::events::{
    EnemyDefeated, EnemyHit, EnemyKnockback, PlayerDamaged, PlayerDefeated, PlayerHit,
};
use crate::combat::knockback::{self, DamageOutcome};
use crate::movement::{GameLayer, Locomotion, MeleeAttackStarted, MovementTuning, Player};

/// Report every hazard or enemy overlapping a player collider.
pub(crate) fn detect_contact_damage(
    spatial_query: SpatialQuery,
    players: Query<(Entity, &Transform, &Collider), With<Player>>,
    sources: Query<(&ContactDamage, &Transform)>,
    mut hits: MessageWriter<PlayerHit>,
) {
    let filter = SpatialQueryFilter::from_mask([GameLayer::Hazard, GameLayer::Enemy]);

    for (player, transform, collider) in &players {
        let origin = transform.translation.truncate();
        for source in spatial_query.shape_intersections(collider, origin, 0.0, &filter) {
            let Ok((damage, source_transform)) = sources.get(source) else {
                continue;
            };
            hits.write(PlayerHit {
                target: player,
                source,
                amount: damage.amount,
                direction: source_transform.translation.truncate() - origin,
            });
        }
    }
}

pub(crate) fn apply_player_hits(
    mut hits: MessageReader<PlayerHit>,
    tuning: Res<MovementTuning>,
    mut players: Query<(&mut Locomotion, &mut Health, &mut LinearVelocity), With<Player>>,
    mut damaged: MessageWriter<PlayerDamaged>,
    mut defeated: MessageWriter<PlayerDefeated>,
) {
    for hit in hits.read() {
        let Ok((mut locomotion, mut health, mut velocity)) = players.get_mut(hit.target) else {
            continue;
        };

        locomotion.body.velocity = velocity.0;
        let outcome = knockback::take_damage(
            &mut locomotion,
            &mut health,
            &tuning,
            hit.amount,
            hit.direction,
        );
        velocity.0 = locomotion.body.velocity;

        match outcome {
            DamageOutcome::Ignored => {}
            DamageOutcome::Damaged { remaining } => {
                info!(
                    "Player hit by {:?}: amount={}, remaining={}",
                    hit.source, hit.amount, remaining
                );
                damaged.write(PlayerDamaged {
                    entity: hit.target,
                    amount: hit.amount,
                    remaining,
                });
            }
            DamageOutcome::Defeated => {
                info!("Player defeated by {:?}", hit.source);
                damaged.write(PlayerDamaged {
                    entity: hit.target,
                    amount: hit.amount,
                    remaining: 0.0,
                });
                defeated.write(PlayerDefeated { entity: hit.target });
            }
        }
    }
}

pub(crate) fn flash_damaged_player(
    mut damaged: MessageReader<PlayerDamaged>,
    mut flashes: Query<&mut DamageFlash, With<Player>>,
) {
    for event in damaged.read() {
        if let Ok(mut flash) = flashes.get_mut(event.entity) {
            flash.trigger();
        }
    }
}

/// Spawn a sensor in front of, above or below the swinging player.
pub(crate) fn spawn_melee_hitboxes(
    mut commands: Commands,
    mut attacks: MessageReader<MeleeAttackStarted>,
    tuning: Res<MovementTuning>,
    owners: Query<(&Transform, &Locomotion)>,
) {
    for attack in attacks.read() {
        let Ok((transform, locomotion)) = owners.get(attack.entity) else {
            continue;
        };

        let size = hitbox_size(attack.variant);
        let center = transform.translation.truncate()
            + hitbox_offset(attack.variant, locomotion.motion.facing_sign());

        commands.spawn((
            MeleeHitbox {
                owner: attack.entity,
                variant: attack.variant,
                damage: tuning.profile.attack_damage,
                hit_entities: Vec::new(),
            },
            HitboxLifetime(attack.duration),
            Sprite {
                color: Color::srgba(1.0, 1.0, 0.0, 0.4),
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(center.x, center.y, 1.0),
            Collider::rectangle(size.x, size.y),
            Sensor,
            CollisionLayers::new(GameLayer::PlayerHitbox, [GameLayer::Enemy, GameLayer::Hazard]),
        ));
    }
}

/// Keep each swing attached to its owner while the player moves.
pub(crate) fn follow_melee_hitboxes(
    mut hitboxes: Query<(&MeleeHitbox, &mut Transform), Without<Locomotion>>,
    owners: Query<(&Transform, &Locomotion)>,
) {
    for (hitbox, mut transform) in &mut hitboxes {
        let Ok((owner_transform, locomotion)) = owners.get(hitbox.owner) else {
            continue;
        };
        let center = owner_transform.translation.truncate()
            + hitbox_offset(hitbox.variant, locomotion.motion.facing_sign());
        transform.translation = center.extend(transform.translation.z);
    }
}

pub(crate) fn cleanup_expired_hitboxes(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut HitboxLifetime)>,
) {
    let dt = time.delta_secs();
    for (entity, mut lifetime) in &mut query {
        lifetime.0 -= dt;
        if lifetime.0 <= 0.0 {
            commands.entity(entity).despawn();
        }
    }
}

/// Each swing strikes an enemy or hazard at most once. The first contact
/// recoils the owner; enemies also take damage and get pushed.
pub(crate) fn detect_melee_hits(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut hitboxes: Query<(&mut MeleeHitbox, &Transform, &Collider)>,
    targets: Query<(Has<Enemy>, Has<Hazard>)>,
    mut owners: Query<(&mut Locomotion, &mut LinearVelocity), Without<Enemy>>,
    mut enemy_hits: MessageWriter<EnemyHit>,
    mut knockbacks: MessageWriter<EnemyKnockback>,
) {
    let filter = SpatialQueryFilter::from_mask([GameLayer::Enemy, GameLayer::Hazard]);

    for (mut hitbox, transform, collider) in &mut hitboxes {
        let center = transform.translation.truncate();
        for target in spatial_query.shape_intersections(collider, center, 0.0, &filter) {
            if hitbox.hit_entities.contains(&target) {
                continue;
            }
            let Ok((is_enemy, is_hazard)) = targets.get(target) else {
                continue;
            };
            if !is_enemy && !is_hazard {
                continue;
            }
            hitbox.hit_entities.push(target);

            if is_enemy {
                enemy_hits.write(EnemyHit {
                    enemy: target,
                    source: hitbox.owner,
                    amount: hitbox.damage,
                });
            }

            let Ok((mut locomotion, mut velocity)) = owners.get_mut(hitbox.owner) else {
                continue;
            };
            locomotion.body.velocity = velocity.0;
            let recoil = knockback::apply_recoil(&mut locomotion, &tuning, hitbox.variant);
            velocity.0 = locomotion.body.velocity;

            if let (Some(recoil), true) = (recoil, is_enemy) {
                knockbacks.write(EnemyKnockback {
                    enemy: target,
                    impulse: recoil.enemy_impulse,
                });
            }
        }
    }
}

/// Returns true when the hit landed, false while the enemy is still in its
/// damage cooldown or already dead.
pub(crate) fn strike_enemy(
    health: &mut Health,
    cooldown: &mut DamageCooldown,
    amount: f32,
) -> bool {
    if !cooldown.is_ready() || health.is_dead() {
        return false;
    }
    cooldown.remaining = ENEMY_DAMAGE_COOLDOWN;
    health.take_damage(amount);
    true
}

pub(crate) fn apply_enemy_hits(
    mut hits: MessageReader<EnemyHit>,
    mut enemies: Query<(&mut Health, &mut DamageCooldown, &mut DamageFlash), With<Enemy>>,
    mut defeated: MessageWriter<EnemyDefeated>,
) {
    for hit in hits.read() {
        let Ok((mut health, mut cooldown, mut flash)) = enemies.get_mut(hit.enemy) else {
            continue;
        };
        if !strike_enemy(&mut health, &mut cooldown, hit.amount) {
            continue;
        }

        flash.trigger();
        debug!(
            "Enemy {:?} hit for {}: {}/{}",
            hit.enemy, hit.amount, health.current, health.max
        );
        if health.is_dead() {
            info!("Enemy {:?} defeated", hit.enemy);
            defeated.write(EnemyDefeated { entity: hit.enemy });
        }
    }
}

/// The impulse replaces the enemy's velocity as if it had unit mass.
pub(crate) fn apply_enemy_knockback(
    mut knockbacks: MessageReader<EnemyKnockback>,
    mut query: Query<&mut LinearVelocity, With<Enemy>>,
) {
    for event in knockbacks.read() {
        if let Ok(mut velocity) = query.get_mut(event.enemy) {
            velocity.0 = event.impulse;
        }
    }
}

pub(crate) fn despawn_defeated_enemies(
    mut commands: Commands,
    mut defeated: MessageReader<EnemyDefeated>,
    enemies: Query<(), With<Enemy>>,
) {
    for event in defeated.read() {
        if enemies.contains(event.entity) {
            commands.entity(event.entity).despawn();
        }
    }
}

pub(crate) fn tick_damage_cooldowns(time: Res<Time>, mut query: Query<&mut DamageCooldown>) {
    let dt = time.delta_secs();
    for mut cooldown in &mut query {
        if cooldown.remaining > 0.0 {
            cooldown.remaining -= dt;
        }
    }
}

pub(crate) fn update_damage_flash(
    time: Res<Time>,
    mut query: Query<(&mut DamageFlash, &mut Sprite)>,
) {
    let dt = time.delta_secs();
    for (mut flash, mut sprite) in &mut query {
        flash.tick(dt);
        let base = flash.base_color.to_linear();
        sprite.color = base.mix(&LinearRgba::WHITE, flash.amount()).into();
    }
}
