//! Movement domain: the velocity state locomotion forces act on.

use bevy::prelude::*;

/// Rigid-body-like velocity state.
///
/// Mirrors avian's `LinearVelocity` every tick; gravity is integrated here
/// with a per-tick scale instead of by the physics engine.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct Body2d {
    pub velocity: Vec2,
    pub gravity_scale: f32,
    pub mass: f32,
}

impl Default for Body2d {
    fn default() -> Self {
        Self {
            velocity: Vec2::ZERO,
            gravity_scale: 1.0,
            mass: 1.0,
        }
    }
}

impl Body2d {
    /// Continuous force applied over one step.
    pub fn add_force(&mut self, force: Vec2, dt: f32) {
        self.velocity += force / self.mass * dt;
    }

    pub fn add_impulse(&mut self, impulse: Vec2) {
        self.velocity += impulse / self.mass;
    }

    pub fn integrate_gravity(&mut self, world_gravity_y: f32, dt: f32) {
        self.velocity.y += world_gravity_y * self.gravity_scale * dt;
    }

    /// Keep vertical speed at or above `-max_speed`.
    pub fn clamp_fall(&mut self, max_speed: f32) {
        self.velocity.y = self.velocity.y.max(-max_speed);
    }
}

/// Sign with zero counted as positive.
pub(crate) fn sign(value: f32) -> f32 {
    if value >= 0.0 { 1.0 } else { -1.0 }
}
