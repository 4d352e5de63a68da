//! Movement domain: tuning and input resources.

use bevy::prelude::*;

use crate::movement::TunableProfile;

/// Standard gravity used until the physics world reports its own.
pub const DEFAULT_WORLD_GRAVITY_Y: f32 = -9.81;

/// Runtime constants computed from a [`TunableProfile`].
///
/// All zero until [`DerivedConstants::recompute`] runs, which leaves every
/// locomotion force at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect)]
pub struct DerivedConstants {
    pub gravity_strength: f32,
    pub gravity_scale: f32,
    pub run_accel_amount: f32,
    pub run_decel_amount: f32,
    pub jump_force: f32,
}

impl DerivedConstants {
    /// Compute gravity, run coefficients and jump force for `profile`.
    ///
    /// A non-positive `run_max_speed` forces the profile's run acceleration and
    /// deceleration to zero so the run force degrades to nothing.
    pub fn recompute(profile: &mut TunableProfile, world_gravity_y: f32) -> Self {
        let apex = profile.jump_time_to_apex;
        let gravity_strength = -(2.0 * profile.jump_height) / (apex * apex);
        let gravity_scale = gravity_strength / world_gravity_y;

        let (run_accel_amount, run_decel_amount) = if profile.run_max_speed > 0.0 {
            (
                (10.0 * profile.run_acceleration) / profile.run_max_speed,
                (10.0 * profile.run_deceleration) / profile.run_max_speed,
            )
        } else {
            warn!(
                "run_max_speed={} is not positive; run acceleration and deceleration forced to 0",
                profile.run_max_speed
            );
            profile.run_acceleration = 0.0;
            profile.run_deceleration = 0.0;
            (0.0, 0.0)
        };

        Self {
            gravity_strength,
            gravity_scale,
            run_accel_amount,
            run_decel_amount,
            jump_force: gravity_strength.abs() * apex,
        }
    }
}

/// Profile plus its derived cache, shared by every locomotion system.
#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub profile: TunableProfile,
    pub derived: DerivedConstants,
    pub world_gravity_y: f32,
}

impl Default for MovementTuning {
    /// Default profile with an uncomputed cache.
    fn default() -> Self {
        Self {
            profile: TunableProfile::default(),
            derived: DerivedConstants::default(),
            world_gravity_y: DEFAULT_WORLD_GRAVITY_Y,
        }
    }
}

impl MovementTuning {
    pub fn new(profile: TunableProfile, world_gravity_y: f32) -> Self {
        let mut tuning = Self {
            profile,
            derived: DerivedConstants::default(),
            world_gravity_y,
        };
        tuning.recompute();
        tuning
    }

    pub fn recompute(&mut self) {
        self.derived = DerivedConstants::recompute(&mut self.profile, self.world_gravity_y);
    }

    pub fn set_profile(&mut self, profile: TunableProfile) {
        self.profile = profile;
        self.recompute();
    }

    pub fn set_world_gravity(&mut self, world_gravity_y: f32) {
        self.world_gravity_y = world_gravity_y;
        self.recompute();
    }
}

/// Normalized input sampled once per frame. Button fields are edges.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct MovementInput {
    /// Movement axis in [-1, 1] x [-1, 1].
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub jump_just_released: bool,
    pub dash_just_pressed: bool,
    pub attack_just_pressed: bool,
}

impl MovementInput {
    /// Held axis only, no button edges.
    pub fn axis(x: f32, y: f32) -> Self {
        Self {
            axis: Vec2::new(x, y),
            ..default()
        }
    }
}
