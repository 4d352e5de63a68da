//! Movement domain: designer-facing locomotion tunables.
//!
//! A `TunableProfile` is plain data loaded from `assets/data/player_profile.ron`.
//! Everything the integrator actually uses at runtime is derived from it once,
//! see [`DerivedConstants`](super::DerivedConstants).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Tunables for run, jump, wall, dash, gravity, assists and combat feel.
///
/// Distances are world units (meters), times are seconds.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct TunableProfile {
    // Run
    pub run_max_speed: f32,
    pub run_acceleration: f32,
    pub run_deceleration: f32,
    /// Multiplier on acceleration while airborne, in [0, 1].
    pub air_acceleration: f32,
    /// Multiplier on deceleration while airborne, in [0, 1].
    pub air_deceleration: f32,
    pub conserve_momentum: bool,

    // Jump
    pub jump_height: f32,
    pub jump_time_to_apex: f32,
    pub jump_cut_gravity_mult: f32,
    /// Gravity multiplier near the apex, in [0, 1].
    pub jump_hang_gravity_mult: f32,
    /// |vy| below which the player counts as hanging at the apex.
    pub jump_hang_time_threshold: f32,
    pub jump_hang_acceleration_mult: f32,
    pub jump_hang_max_speed_mult: f32,
    /// Seconds after a wall jump before jump-cut gravity may apply. `None`
    /// lets jump-cut gravity apply immediately.
    pub jump_cut_wall_jump_gate: Option<f32>,

    // Wall jump
    pub wall_jump_force: Vec2,
    /// Run lerp used while wall jumping, in [0, 1].
    pub wall_jump_run_lerp: f32,
    pub turn_on_wall_jump: bool,

    // Slide
    /// Downward speed the wall slide settles at.
    pub slide_speed: f32,
    pub slide_acceleration: f32,

    // Dash
    pub dash_power: f32,
    pub dash_time: f32,
    pub dash_cooldown: f32,

    // Gravity
    pub fall_gravity_mult: f32,
    pub fast_fall_gravity_mult: f32,
    pub max_fall_speed: f32,
    pub max_fast_fall_speed: f32,

    // Assists
    pub coyote_time: f32,
    pub jump_input_buffer_time: f32,

    // Health and melee
    pub max_health: u32,
    pub attack_damage: f32,
    pub attack_duration: f32,
    pub attack_cooldown: f32,

    // Recoil and knockback
    pub recoil_force: f32,
    pub knockback_force: f32,
    pub knockback_duration: f32,
}

impl Default for TunableProfile {
    fn default() -> Self {
        Self {
            run_max_speed: 9.0,
            run_acceleration: 13.0,
            run_deceleration: 16.0,
            air_acceleration: 0.65,
            air_deceleration: 0.65,
            conserve_momentum: true,

            jump_height: 3.5,
            jump_time_to_apex: 0.35,
            jump_cut_gravity_mult: 2.0,
            jump_hang_gravity_mult: 0.5,
            jump_hang_time_threshold: 1.0,
            jump_hang_acceleration_mult: 1.1,
            jump_hang_max_speed_mult: 1.3,
            jump_cut_wall_jump_gate: Some(0.15),

            wall_jump_force: Vec2::new(12.0, 18.0),
            wall_jump_run_lerp: 0.5,
            turn_on_wall_jump: true,

            slide_speed: 4.0,
            slide_acceleration: 40.0,

            dash_power: 22.0,
            dash_time: 0.18,
            dash_cooldown: 0.35,

            fall_gravity_mult: 1.5,
            fast_fall_gravity_mult: 2.0,
            max_fall_speed: 22.0,
            max_fast_fall_speed: 28.0,

            coyote_time: 0.1,
            jump_input_buffer_time: 0.1,

            max_health: 5,
            attack_damage: 25.0,
            attack_duration: 0.2,
            attack_cooldown: 0.35,

            recoil_force: 8.0,
            knockback_force: 12.0,
            knockback_duration: 0.25,
        }
    }
}
