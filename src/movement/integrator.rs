//! Movement domain: horizontal run force, wall-slide damping and dynamic
//! gravity selection.

use crate::movement::body::{Body2d, sign};
use crate::movement::{MotionState, MovementTuning, TimerBank};
use bevy::math::FloatExt;
use bevy::prelude::*;

/// Below this a target speed counts as "no input".
const TARGET_SPEED_EPSILON: f32 = 0.01;

/// Horizontal force that moves `vx` toward the input target.
///
/// Tie-break order matters: grounded/air rate first, then the apex hang
/// bonus, then the momentum-conservation override.
pub fn run_force(
    body: &Body2d,
    motion: &MotionState,
    timers: &TimerBank,
    tuning: &MovementTuning,
    move_x: f32,
    lerp_amount: f32,
) -> f32 {
    let profile = &tuning.profile;
    let derived = &tuning.derived;
    let vx = body.velocity.x;
    let vy = body.velocity.y;

    let mut target_speed = vx.lerp(move_x * profile.run_max_speed, lerp_amount);
    let accelerating = target_speed.abs() > TARGET_SPEED_EPSILON;

    let mut acceleration_rate = if timers.ground > 0.0 {
        if accelerating {
            derived.run_accel_amount
        } else {
            derived.run_decel_amount
        }
    } else if accelerating {
        derived.run_accel_amount * profile.air_acceleration
    } else {
        derived.run_decel_amount * profile.air_deceleration
    };

    if motion.in_jump_arc() && vy.abs() < profile.jump_hang_time_threshold {
        acceleration_rate *= profile.jump_hang_acceleration_mult;
        target_speed *= profile.jump_hang_max_speed_mult;
    }

    if profile.conserve_momentum
        && vx.abs() > target_speed.abs()
        && sign(vx) == sign(target_speed)
        && target_speed.abs() > TARGET_SPEED_EPSILON
        && timers.ground < 0.0
    {
        acceleration_rate = 0.0;
    }

    (target_speed - vx) * acceleration_rate
}

pub fn run(
    body: &mut Body2d,
    motion: &MotionState,
    timers: &TimerBank,
    tuning: &MovementTuning,
    move_x: f32,
    lerp_amount: f32,
    dt: f32,
) {
    let force = run_force(body, motion, timers, tuning, move_x, lerp_amount);
    body.add_force(Vec2::X * force, dt);
}

/// Ease vertical speed toward the downward slide speed without overshooting
/// it within a single step.
pub fn slide(body: &mut Body2d, tuning: &MovementTuning, dt: f32) {
    if dt <= 0.0 {
        return;
    }
    let profile = &tuning.profile;
    let speed_diff = -profile.slide_speed - body.velocity.y;
    let limit = speed_diff.abs() / dt;
    let force = (speed_diff * profile.slide_acceleration).clamp(-limit, limit);
    body.add_force(Vec2::Y * force, dt);
}

/// Which gravity rule won this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GravityBranch {
    Sliding,
    JumpCut,
    JumpHang,
    FastFall,
    Falling,
    Base,
}

pub fn gravity_branch(
    body: &Body2d,
    motion: &MotionState,
    timers: &TimerBank,
    tuning: &MovementTuning,
    move_y: f32,
) -> GravityBranch {
    let profile = &tuning.profile;
    let vy = body.velocity.y;
    let cut_gate_open = match profile.jump_cut_wall_jump_gate {
        Some(gate) => timers.wall_jump <= -gate,
        None => true,
    };

    if motion.is_sliding {
        GravityBranch::Sliding
    } else if motion.is_jump_cut && cut_gate_open {
        GravityBranch::JumpCut
    } else if motion.in_jump_arc() && vy.abs() < profile.jump_hang_time_threshold {
        GravityBranch::JumpHang
    } else if vy < 0.0 && move_y < 0.0 {
        GravityBranch::FastFall
    } else if vy < 0.0 {
        GravityBranch::Falling
    } else {
        GravityBranch::Base
    }
}

/// Pick this tick's gravity scale and clamp fall speed for the branch taken.
pub fn apply_dynamic_gravity(
    body: &mut Body2d,
    motion: &MotionState,
    timers: &TimerBank,
    tuning: &MovementTuning,
    move_y: f32,
) -> GravityBranch {
    let profile = &tuning.profile;
    let base = tuning.derived.gravity_scale;
    let branch = gravity_branch(body, motion, timers, tuning, move_y);

    body.gravity_scale = match branch {
        GravityBranch::Sliding => 0.0,
        GravityBranch::JumpCut => {
            body.clamp_fall(profile.max_fall_speed);
            base * profile.jump_cut_gravity_mult
        }
        GravityBranch::JumpHang => base * profile.jump_hang_gravity_mult,
        GravityBranch::FastFall => {
            body.clamp_fall(profile.max_fast_fall_speed);
            base * profile.fast_fall_gravity_mult
        }
        GravityBranch::Falling => {
            body.clamp_fall(profile.max_fall_speed);
            base * profile.fall_gravity_mult
        }
        GravityBranch::Base => base,
    };
    branch
}
