//! Movement domain: systems driving the locomotion controller.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::systems::collisions::SolidOverlap;
use crate::movement::{
    Locomotion, LocomotionEvent, MeleeAttackStarted, MovementInput, MovementStateChanged,
    MovementTuning, Player, PlayerTurned, ProbeLayout,
};

/// Keep the derived cache in step with the profile and the physics gravity.
pub(crate) fn refresh_derived_constants(
    gravity: Res<Gravity>,
    mut tuning: ResMut<MovementTuning>,
) {
    if !gravity.is_changed() && !tuning.is_changed() {
        return;
    }

    // Recomputing must not look like a fresh profile edit next frame.
    let tuning = tuning.bypass_change_detection();
    tuning.world_gravity_y = gravity.0.y;
    tuning.recompute();

    info!(
        "Derived locomotion constants: gravity_strength={:.2}, gravity_scale={:.2}, \
         run_accel={:.2}, run_decel={:.2}, jump_force={:.2}",
        tuning.derived.gravity_strength,
        tuning.derived.gravity_scale,
        tuning.derived.run_accel_amount,
        tuning.derived.run_decel_amount,
        tuning.derived.jump_force
    );
}

/// Frame tick: timers, probes, input and state transitions.
pub(crate) fn advance_locomotion(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    spatial_query: SpatialQuery,
    mut query: Query<
        (&Transform, &ProbeLayout, &mut Locomotion, &mut LinearVelocity),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    let solids = SolidOverlap::new(&spatial_query);

    for (transform, probes, mut locomotion, mut velocity) in &mut query {
        locomotion.body.velocity = velocity.0;

        let contacts = probes.sample(transform.translation.truncate(), &solids);
        locomotion.frame_tick(&tuning, dt, contacts, *input);

        velocity.0 = locomotion.body.velocity;
    }
}

/// Fixed tick: run, slide and state physics, then gravity.
pub(crate) fn integrate_locomotion(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut Locomotion, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut locomotion, mut velocity) in &mut query {
        // Collisions may have changed velocity since the last tick.
        locomotion.body.velocity = velocity.0;
        locomotion.fixed_tick(&tuning, dt);
        velocity.0 = locomotion.body.velocity;
    }
}

/// Hand queued controller hooks to the rest of the game as messages.
pub(crate) fn forward_locomotion_events(
    mut query: Query<(Entity, &mut Locomotion)>,
    mut state_changes: MessageWriter<MovementStateChanged>,
    mut turns: MessageWriter<PlayerTurned>,
    mut attacks: MessageWriter<MeleeAttackStarted>,
) {
    for (entity, mut locomotion) in &mut query {
        for event in locomotion.drain_events() {
            match event {
                LocomotionEvent::StateChanged { from, to } => {
                    state_changes.write(MovementStateChanged { entity, from, to });
                }
                LocomotionEvent::Turned { facing_right } => {
                    turns.write(PlayerTurned {
                        entity,
                        facing_right,
                    });
                }
                LocomotionEvent::MeleeAttackStarted { variant, duration } => {
                    attacks.write(MeleeAttackStarted {
                        entity,
                        variant,
                        duration,
                    });
                }
            }
        }
    }
}
