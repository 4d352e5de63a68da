//! Movement domain: tests for derived constants, timers, the transition table
//! and the locomotion controller.

use approx::assert_relative_eq;
use bevy::prelude::*;

use super::integrator::{self, gravity_branch};
use super::{
    AttackVariant, Body2d, ContactSample, DEFAULT_WORLD_GRAVITY_Y, DerivedConstants,
    GravityBranch, Locomotion, LocomotionEvent, MotionState, MovementInput, MovementState,
    MovementTuning, ProbeLayout, TimerBank, TransitionInputs, TunableProfile, WallSide,
    next_state,
};

const FRAME: f32 = 0.02;

fn tuning() -> MovementTuning {
    MovementTuning::new(TunableProfile::default(), DEFAULT_WORLD_GRAVITY_Y)
}

fn tuning_with(edit: impl FnOnce(&mut TunableProfile)) -> MovementTuning {
    let mut profile = TunableProfile::default();
    edit(&mut profile);
    MovementTuning::new(profile, DEFAULT_WORLD_GRAVITY_Y)
}

const AIRBORNE: ContactSample = ContactSample {
    grounded: false,
    touching_left: false,
    touching_right: false,
};

const GROUNDED: ContactSample = ContactSample {
    grounded: true,
    touching_left: false,
    touching_right: false,
};

fn press_jump() -> MovementInput {
    MovementInput {
        jump_just_pressed: true,
        ..default()
    }
}

fn release_jump() -> MovementInput {
    MovementInput {
        jump_just_released: true,
        ..default()
    }
}

// -----------------------------------------------------------------------------
// Derived constants tests
// -----------------------------------------------------------------------------

#[test]
fn test_run_accel_amount_formula() {
    let mut profile = TunableProfile {
        run_max_speed: 10.0,
        run_acceleration: 5.0,
        run_deceleration: 8.0,
        ..default()
    };

    let derived = DerivedConstants::recompute(&mut profile, DEFAULT_WORLD_GRAVITY_Y);

    assert_relative_eq!(derived.run_accel_amount, 5.0);
    assert_relative_eq!(derived.run_decel_amount, 8.0);
}

#[test]
fn test_gravity_and_jump_force_from_height_and_apex() {
    let mut profile = TunableProfile {
        jump_height: 4.0,
        jump_time_to_apex: 0.5,
        ..default()
    };

    let derived = DerivedConstants::recompute(&mut profile, -10.0);

    assert_relative_eq!(derived.gravity_strength, -32.0);
    assert_relative_eq!(derived.gravity_scale, 3.2);
    assert_relative_eq!(derived.jump_force, 16.0);
}

#[test]
fn test_non_positive_max_speed_zeroes_run_coefficients() {
    let mut profile = TunableProfile {
        run_max_speed: 0.0,
        ..default()
    };

    let derived = DerivedConstants::recompute(&mut profile, DEFAULT_WORLD_GRAVITY_Y);

    assert_eq!(derived.run_accel_amount, 0.0);
    assert_eq!(derived.run_decel_amount, 0.0);
    assert_eq!(profile.run_acceleration, 0.0);
    assert_eq!(profile.run_deceleration, 0.0);
    assert!(derived.jump_force > 0.0);
}

#[test]
fn test_set_world_gravity_rescales_gravity_only() {
    let mut tuning = tuning();
    let jump_force = tuning.derived.jump_force;
    let scale = tuning.derived.gravity_scale;

    tuning.set_world_gravity(DEFAULT_WORLD_GRAVITY_Y * 2.0);

    assert_relative_eq!(tuning.derived.gravity_scale, scale / 2.0, epsilon = 1e-5);
    assert_relative_eq!(tuning.derived.jump_force, jump_force);
}

// -----------------------------------------------------------------------------
// Timer tests
// -----------------------------------------------------------------------------

#[test]
fn test_dash_cooldown_rearms_past_negative_cooldown() {
    let profile = TunableProfile {
        dash_cooldown: 1.0,
        ..default()
    };
    let mut timers = TimerBank::default();

    timers.start_dash_cooldown();
    assert_eq!(timers.dash, 0.0);
    assert!(!timers.can_dash);

    timers.tick(0.5, &profile);
    timers.tick(0.49, &profile);
    assert!(!timers.can_dash);

    timers.tick(0.02, &profile);
    assert!(timers.can_dash);
}

#[test]
fn test_attack_cooldown_rearms_past_negative_cooldown() {
    let profile = TunableProfile::default();
    let mut timers = TimerBank::default();

    timers.start_attack_cooldown();
    timers.tick(profile.attack_cooldown - 0.01, &profile);
    assert!(!timers.can_attack);

    timers.tick(0.02, &profile);
    assert!(timers.can_attack);
}

#[test]
fn test_tick_zero_is_idempotent() {
    let profile = TunableProfile::default();
    let mut timers = TimerBank {
        ground: 0.05,
        wall_right: 0.02,
        jump_buffer: 0.1,
        dash: -0.2,
        can_dash: false,
        ..default()
    };
    let before = timers.clone();

    timers.tick(0.0, &profile);
    assert_eq!(timers, before);

    timers.tick(-0.5, &profile);
    assert_eq!(timers, before);
}

#[test]
fn test_coyote_time_outlives_contact() {
    let profile = TunableProfile::default();
    let mut timers = TimerBank::default();

    timers.refresh_ground(true, profile.coyote_time);
    timers.tick(profile.coyote_time / 2.0, &profile);
    assert!(timers.is_grounded());

    timers.tick(profile.coyote_time, &profile);
    assert!(!timers.is_grounded());
}

#[test]
fn test_wall_contact_ignored_while_wall_jumping() {
    let mut timers = TimerBank::default();

    timers.refresh_wall(WallSide::Left, true, 0.1, true);
    assert_eq!(timers.wall, 0.0);

    timers.refresh_wall(WallSide::Left, true, 0.1, false);
    assert_eq!(timers.wall_left, 0.1);
    assert_eq!(timers.wall, 0.1);
}

// -----------------------------------------------------------------------------
// Transition table tests
// -----------------------------------------------------------------------------

#[test]
fn test_transition_table_stays_inside_declared_edges() {
    for state in MovementState::ALL {
        for grounded in [false, true] {
            for buffered in [false, true] {
                for can_slide in [false, true] {
                    for can_wall_jump in [false, true] {
                        for move_x in [0.0, 0.05, -1.0] {
                            for vertical_velocity in [-5.0, 0.0, 5.0] {
                                for wall_jump_timer in [-1.0, 0.05, 0.15] {
                                    for state_elapsed in [0.0, 1.0] {
                                        let inputs = TransitionInputs {
                                            move_x,
                                            vertical_velocity,
                                            ground_timer: if grounded { 0.1 } else { -0.1 },
                                            jump_buffer: if buffered { 0.1 } else { -0.1 },
                                            wall_jump_timer,
                                            can_slide,
                                            can_wall_jump,
                                            state_elapsed,
                                            dash_time: 0.2,
                                            attack_duration: 0.2,
                                        };
                                        if let Some(next) = next_state(state, &inputs) {
                                            assert!(
                                                state.successors().contains(&next),
                                                "{state:?} -> {next:?} with {inputs:?}"
                                            );
                                            assert_ne!(next, state);
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_idle_and_run_follow_input_threshold() {
    let grounded = TransitionInputs {
        ground_timer: 0.1,
        ..default()
    };

    let moving = TransitionInputs {
        move_x: 0.5,
        ..grounded
    };
    assert_eq!(next_state(MovementState::Idle, &moving), Some(MovementState::Run));
    assert_eq!(next_state(MovementState::Run, &moving), None);
    assert_eq!(next_state(MovementState::Run, &grounded), Some(MovementState::Idle));
}

#[test]
fn test_jump_falls_after_wall_jump_grace() {
    let inputs = TransitionInputs {
        vertical_velocity: -1.0,
        wall_jump_timer: 0.12,
        ..default()
    };
    assert_eq!(next_state(MovementState::WallJump, &inputs), None);

    let inputs = TransitionInputs {
        wall_jump_timer: 0.05,
        ..inputs
    };
    assert_eq!(next_state(MovementState::WallJump, &inputs), Some(MovementState::Fall));
    assert_eq!(next_state(MovementState::Jump, &inputs), Some(MovementState::Fall));
}

#[test]
fn test_melee_attack_jump_takes_priority_over_timeout() {
    let inputs = TransitionInputs {
        ground_timer: 0.1,
        jump_buffer: 0.1,
        state_elapsed: 1.0,
        attack_duration: 0.2,
        ..default()
    };
    assert_eq!(
        next_state(MovementState::MeleeAttack, &inputs),
        Some(MovementState::Jump)
    );

    let inputs = TransitionInputs {
        jump_buffer: 0.0,
        move_x: 0.5,
        ..inputs
    };
    assert_eq!(
        next_state(MovementState::MeleeAttack, &inputs),
        Some(MovementState::Run)
    );
}

#[test]
fn test_attack_variant_selection() {
    assert_eq!(AttackVariant::select(1.0, 0.1), AttackVariant::Up);
    assert_eq!(AttackVariant::select(-1.0, -0.1), AttackVariant::Down);
    assert_eq!(AttackVariant::select(-1.0, 0.1), AttackVariant::Forward);
    assert_eq!(AttackVariant::select(0.0, -0.1), AttackVariant::Forward);
}

// -----------------------------------------------------------------------------
// Integrator tests
// -----------------------------------------------------------------------------

#[test]
fn test_gravity_branch_priority() {
    let tuning = tuning();
    let mut timers = TimerBank {
        wall_jump: -1.0,
        ..default()
    };
    let mut motion = MotionState {
        is_sliding: true,
        is_jumping: true,
        is_jump_cut: true,
        ..default()
    };
    let body = Body2d {
        velocity: Vec2::new(0.0, 0.5),
        ..default()
    };

    let branch = |motion: &MotionState, timers: &TimerBank, body: &Body2d, move_y| {
        gravity_branch(body, motion, timers, &tuning, move_y)
    };

    assert_eq!(branch(&motion, &timers, &body, -1.0), GravityBranch::Sliding);

    motion.is_sliding = false;
    assert_eq!(branch(&motion, &timers, &body, -1.0), GravityBranch::JumpCut);

    // Right after a wall jump the cut is gated off.
    timers.wall_jump = 0.0;
    assert_eq!(branch(&motion, &timers, &body, -1.0), GravityBranch::JumpHang);

    motion.is_jump_cut = false;
    motion.is_jumping = false;
    let falling = Body2d {
        velocity: Vec2::new(0.0, -5.0),
        ..default()
    };
    assert_eq!(branch(&motion, &timers, &falling, -1.0), GravityBranch::FastFall);
    assert_eq!(branch(&motion, &timers, &falling, 0.0), GravityBranch::Falling);
    assert_eq!(branch(&motion, &timers, &body, 0.0), GravityBranch::Base);
}

#[test]
fn test_jump_cut_gate_disabled_applies_immediately() {
    let tuning = tuning_with(|p| p.jump_cut_wall_jump_gate = None);
    let motion = MotionState {
        is_wall_jumping: true,
        is_jump_cut: true,
        ..default()
    };
    let timers = TimerBank {
        wall_jump: 0.1,
        ..default()
    };

    let branch = gravity_branch(&Body2d::default(), &motion, &timers, &tuning, 0.0);
    assert_eq!(branch, GravityBranch::JumpCut);
}

#[test]
fn test_dynamic_gravity_clamps_fall_speed() {
    let tuning = tuning();
    let profile = &tuning.profile;
    let motion = MotionState::default();
    let timers = TimerBank::default();
    let mut body = Body2d {
        velocity: Vec2::new(0.0, -100.0),
        ..default()
    };

    integrator::apply_dynamic_gravity(&mut body, &motion, &timers, &tuning, 0.0);
    assert_relative_eq!(body.velocity.y, -profile.max_fall_speed);
    assert_relative_eq!(
        body.gravity_scale,
        tuning.derived.gravity_scale * profile.fall_gravity_mult
    );

    body.velocity.y = -100.0;
    integrator::apply_dynamic_gravity(&mut body, &motion, &timers, &tuning, -1.0);
    assert_relative_eq!(body.velocity.y, -profile.max_fast_fall_speed);
}

#[test]
fn test_momentum_conserved_only_when_airborne() {
    let tuning = tuning();
    let motion = MotionState::default();
    let body = Body2d {
        velocity: Vec2::new(12.0, 0.0),
        ..default()
    };

    let airborne = TimerBank {
        ground: -1.0,
        ..default()
    };
    assert_eq!(
        integrator::run_force(&body, &motion, &airborne, &tuning, 1.0, 1.0),
        0.0
    );

    let grounded = TimerBank {
        ground: 0.1,
        ..default()
    };
    let force = integrator::run_force(&body, &motion, &grounded, &tuning, 1.0, 1.0);
    assert_relative_eq!(force, (9.0 - 12.0) * tuning.derived.run_accel_amount);

    let no_conserve = tuning_with(|p| p.conserve_momentum = false);
    assert!(integrator::run_force(&body, &motion, &airborne, &no_conserve, 1.0, 1.0) < 0.0);
}

#[test]
fn test_run_approaches_max_speed() {
    let tuning = tuning();
    let motion = MotionState::default();
    let timers = TimerBank {
        ground: 0.1,
        ..default()
    };
    let mut body = Body2d::default();

    for _ in 0..200 {
        integrator::run(&mut body, &motion, &timers, &tuning, 1.0, 1.0, FRAME);
    }

    assert_relative_eq!(body.velocity.x, tuning.profile.run_max_speed, epsilon = 1e-3);
}

#[test]
fn test_air_acceleration_is_scaled() {
    let tuning = tuning();
    let motion = MotionState::default();
    let body = Body2d::default();
    let airborne = TimerBank {
        ground: -1.0,
        ..default()
    };

    let force = integrator::run_force(&body, &motion, &airborne, &tuning, 1.0, 1.0);

    assert_relative_eq!(
        force,
        9.0 * tuning.derived.run_accel_amount * tuning.profile.air_acceleration,
        epsilon = 1e-4
    );
}

#[test]
fn test_slide_settles_without_overshoot() {
    let tuning = tuning();
    let mut body = Body2d::default();

    for _ in 0..100 {
        integrator::slide(&mut body, &tuning, FRAME);
        assert!(body.velocity.y >= -tuning.profile.slide_speed - 1e-4);
    }

    assert_relative_eq!(body.velocity.y, -tuning.profile.slide_speed, epsilon = 1e-3);
}

// -----------------------------------------------------------------------------
// Probe tests
// -----------------------------------------------------------------------------

#[test]
fn test_probe_sampling_against_rects() {
    let layout = ProbeLayout::default();
    let solids = [
        Rect::new(-10.0, -1.0, 10.0, 0.0),
        Rect::new(-1.0, -1.0, -0.42, 5.0),
    ];

    let sample = layout.sample(Vec2::new(0.0, 0.75), &solids[..]);
    assert_eq!(
        sample,
        ContactSample {
            grounded: true,
            touching_left: true,
            touching_right: false,
        }
    );

    let sample = layout.sample(Vec2::new(3.0, 4.0), &solids[..]);
    assert_eq!(sample, ContactSample::default());
}

// -----------------------------------------------------------------------------
// Controller scenarios
// -----------------------------------------------------------------------------

#[test]
fn test_grounded_idle_with_buffered_jump_enters_jump() {
    let tuning = tuning();
    let mut locomotion = Locomotion::new(&tuning);

    locomotion.frame_tick(&tuning, FRAME, GROUNDED, press_jump());

    assert_eq!(locomotion.state, MovementState::Jump);
    assert_relative_eq!(locomotion.body.velocity.y, tuning.derived.jump_force);
    assert!(locomotion.motion.is_jumping);
    assert_eq!(locomotion.timers.jump_buffer, 0.0);
    assert_eq!(locomotion.timers.ground, 0.0);

    let events: Vec<_> = locomotion.drain_events().collect();
    assert_eq!(
        events,
        vec![LocomotionEvent::StateChanged {
            from: MovementState::Idle,
            to: MovementState::Jump,
        }]
    );
}

#[test]
fn test_jump_from_downward_velocity_cancels_fall() {
    let tuning = tuning();
    let mut locomotion = Locomotion::new(&tuning);
    locomotion.body.velocity.y = -3.0;

    locomotion.frame_tick(&tuning, FRAME, GROUNDED, press_jump());

    assert_relative_eq!(locomotion.body.velocity.y, tuning.derived.jump_force);
}

#[test]
fn test_wall_jump_kicks_away_from_wall() {
    let tuning = tuning();
    let mut locomotion = Locomotion::new(&tuning);
    locomotion.change_state(MovementState::Fall, &tuning);
    locomotion.body.velocity = Vec2::new(0.0, -3.0);
    locomotion.drain_events().for_each(drop);

    let contacts = ContactSample {
        touching_right: true,
        ..AIRBORNE
    };
    locomotion.frame_tick(&tuning, FRAME, contacts, press_jump());

    assert_eq!(locomotion.state, MovementState::WallJump);
    assert!(locomotion.motion.is_wall_jumping);
    assert_eq!(locomotion.motion.last_wall_jump_direction, -1);
    assert!(!locomotion.motion.is_facing_right);
    assert_relative_eq!(locomotion.body.velocity.x, -tuning.profile.wall_jump_force.x);
    assert_relative_eq!(locomotion.body.velocity.y, tuning.profile.wall_jump_force.y);
    assert_eq!(locomotion.timers.wall, 0.0);
    assert_eq!(locomotion.timers.wall_left, 0.0);
    assert_eq!(locomotion.timers.wall_right, 0.0);
    assert_eq!(locomotion.timers.wall_jump, 0.0);

    let events: Vec<_> = locomotion.drain_events().collect();
    assert!(events.contains(&LocomotionEvent::Turned {
        facing_right: false
    }));
}

#[test]
fn test_wall_slide_when_airborne_against_wall() {
    let tuning = tuning();
    let mut locomotion = Locomotion::new(&tuning);
    locomotion.change_state(MovementState::Fall, &tuning);

    let contacts = ContactSample {
        touching_left: true,
        ..AIRBORNE
    };
    locomotion.frame_tick(&tuning, FRAME, contacts, MovementInput::default());

    assert_eq!(locomotion.state, MovementState::WallSlide);
    assert!(locomotion.motion.is_sliding);

    // Leaving the wall falls once the coyote window runs out.
    for _ in 0..10 {
        locomotion.frame_tick(&tuning, FRAME, AIRBORNE, MovementInput::default());
    }
    assert_eq!(locomotion.state, MovementState::Fall);
    assert!(!locomotion.motion.is_sliding);
}

#[test]
fn test_jump_release_while_rising_cuts_jump() {
    let tuning = tuning();
    let mut locomotion = Locomotion::new(&tuning);
    locomotion.frame_tick(&tuning, FRAME, GROUNDED, press_jump());

    locomotion.frame_tick(&tuning, FRAME, AIRBORNE, release_jump());

    assert!(locomotion.motion.is_jump_cut);
    assert_relative_eq!(
        locomotion.body.gravity_scale,
        tuning.derived.gravity_scale * tuning.profile.jump_cut_gravity_mult
    );
}

/// Falling next to a right-hand wall with a jump buffered.
fn wall_jump_off_right_wall(tuning: &MovementTuning) -> Locomotion {
    let mut locomotion = Locomotion::new(tuning);
    locomotion.change_state(MovementState::Fall, tuning);
    locomotion.body.velocity = Vec2::new(0.0, -3.0);
    let contacts = ContactSample {
        touching_right: true,
        ..AIRBORNE
    };
    locomotion.frame_tick(tuning, FRAME, contacts, press_jump());
    assert_eq!(locomotion.state, MovementState::WallJump);
    locomotion
}

#[test]
fn test_wall_jump_cut_waits_for_gate() {
    let tuning = tuning_with(|p| p.jump_cut_wall_jump_gate = Some(0.25));
    let base = tuning.derived.gravity_scale;
    let mut locomotion = wall_jump_off_right_wall(&tuning);

    locomotion.frame_tick(&tuning, 0.125, AIRBORNE, release_jump());
    assert!(locomotion.motion.is_jump_cut);
    assert_eq!(locomotion.timers.wall_jump, -0.125);
    assert_relative_eq!(locomotion.body.gravity_scale, base);

    locomotion.frame_tick(&tuning, 0.125, AIRBORNE, MovementInput::default());
    assert_eq!(locomotion.state, MovementState::WallJump);
    assert_eq!(locomotion.timers.wall_jump, -0.25);
    assert_relative_eq!(
        locomotion.body.gravity_scale,
        base * tuning.profile.jump_cut_gravity_mult
    );
}

#[test]
fn test_wall_jump_cut_does_not_outlive_the_wall_jump() {
    let tuning = tuning();
    let mut locomotion = wall_jump_off_right_wall(&tuning);

    locomotion.frame_tick(&tuning, FRAME, AIRBORNE, release_jump());
    assert!(locomotion.motion.is_jump_cut);

    locomotion.body.velocity.y = -1.0;
    locomotion.frame_tick(&tuning, FRAME, AIRBORNE, MovementInput::default());
    assert_eq!(locomotion.state, MovementState::Fall);

    locomotion.frame_tick(&tuning, FRAME, GROUNDED, MovementInput::default());
    assert_eq!(locomotion.state, MovementState::Idle);

    // Walk off the ledge and hold down.
    for _ in 0..10 {
        locomotion.frame_tick(&tuning, FRAME, AIRBORNE, MovementInput::default());
    }
    assert_eq!(locomotion.state, MovementState::Fall);
    assert!(!locomotion.motion.is_jump_cut);

    locomotion.body.velocity.y = -5.0;
    assert_eq!(
        gravity_branch(
            &locomotion.body,
            &locomotion.motion,
            &locomotion.timers,
            &tuning,
            -1.0
        ),
        GravityBranch::FastFall
    );
}

#[test]
fn test_dash_holds_velocity_then_bleeds_on_exit() {
    let tuning = tuning_with(|p| {
        p.dash_power = 10.0;
        p.dash_time = 0.2;
    });
    let mut locomotion = Locomotion::new(&tuning);
    let dash = MovementInput {
        dash_just_pressed: true,
        ..default()
    };

    locomotion.frame_tick(&tuning, FRAME, AIRBORNE, dash);
    assert_eq!(locomotion.state, MovementState::Dash);
    assert_eq!(locomotion.body.velocity, Vec2::new(10.0, 0.0));
    assert!(!locomotion.timers.can_dash);

    // Input pulls left and gravity pulls down; the dash wins every step.
    let pull_left = MovementInput::axis(-1.0, -1.0);
    let mut frames = 0;
    while locomotion.state == MovementState::Dash {
        locomotion.fixed_tick(&tuning, FRAME);
        assert_eq!(locomotion.body.velocity, Vec2::new(10.0, 0.0));
        locomotion.frame_tick(&tuning, FRAME, AIRBORNE, pull_left);
        frames += 1;
        assert!(frames <= 12, "dash never ended");
    }

    assert_eq!(locomotion.state, MovementState::Fall);
    assert_relative_eq!(locomotion.body.velocity.x, 2.5);
    assert_relative_eq!(locomotion.body.velocity.y, 0.0);
    assert_relative_eq!(locomotion.body.gravity_scale, tuning.derived.gravity_scale);
}

#[test]
fn test_dash_request_ignored_during_cooldown() {
    let tuning = tuning();
    let mut locomotion = Locomotion::new(&tuning);
    locomotion.timers.start_dash_cooldown();
    let dash = MovementInput {
        dash_just_pressed: true,
        ..default()
    };

    locomotion.frame_tick(&tuning, FRAME, GROUNDED, dash);

    assert_ne!(locomotion.state, MovementState::Dash);
}

#[test]
fn test_melee_attack_slows_and_announces_swing() {
    let tuning = tuning();
    let mut locomotion = Locomotion::new(&tuning);
    locomotion.body.velocity.x = 8.0;
    let attack = MovementInput {
        attack_just_pressed: true,
        ..default()
    };

    locomotion.frame_tick(&tuning, FRAME, GROUNDED, attack);

    assert_eq!(locomotion.state, MovementState::MeleeAttack);
    assert!(!locomotion.timers.can_attack);
    let events: Vec<_> = locomotion.drain_events().collect();
    assert!(events.contains(&LocomotionEvent::MeleeAttackStarted {
        variant: AttackVariant::Forward,
        duration: tuning.profile.attack_duration,
    }));

    // Held inside the attack window, then back to Idle on the ground.
    for _ in 0..20 {
        locomotion.frame_tick(&tuning, FRAME, GROUNDED, MovementInput::default());
    }
    assert_eq!(locomotion.state, MovementState::Idle);
}

#[test]
fn test_melee_attack_velocity_scaled_on_enter() {
    let tuning = tuning();
    let mut locomotion = Locomotion::new(&tuning);
    locomotion.body.velocity.x = 8.0;

    locomotion.change_state(MovementState::MeleeAttack, &tuning);

    assert_relative_eq!(locomotion.body.velocity.x, 2.0);
}

#[test]
fn test_airborne_down_attack_uses_down_variant() {
    let tuning = tuning();
    let mut locomotion = Locomotion::new(&tuning);
    let attack = MovementInput {
        axis: Vec2::new(0.0, -1.0),
        attack_just_pressed: true,
        ..default()
    };

    locomotion.frame_tick(&tuning, FRAME, AIRBORNE, attack);

    let events: Vec<_> = locomotion.drain_events().collect();
    assert!(events.contains(&LocomotionEvent::MeleeAttackStarted {
        variant: AttackVariant::Down,
        duration: tuning.profile.attack_duration,
    }));
}

#[test]
fn test_change_to_active_state_is_noop() {
    let tuning = tuning();
    let mut locomotion = Locomotion::new(&tuning);

    locomotion.change_state(MovementState::Idle, &tuning);

    assert_eq!(locomotion.drain_events().count(), 0);
}

#[test]
fn test_turning_emits_once_per_flip() {
    let tuning = tuning();
    let mut locomotion = Locomotion::new(&tuning);

    locomotion.frame_tick(&tuning, FRAME, GROUNDED, MovementInput::axis(-1.0, 0.0));
    locomotion.frame_tick(&tuning, FRAME, GROUNDED, MovementInput::axis(-1.0, 0.0));

    let turns = locomotion
        .drain_events()
        .filter(|event| matches!(event, LocomotionEvent::Turned { .. }))
        .count();
    assert_eq!(turns, 1);
    assert!(!locomotion.motion.is_facing_right);
}
