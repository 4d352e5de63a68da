//! Camera domain: tweens and the follow rig state.

use bevy::math::curve::{Curve, EaseFunction, EasingCurve};
use bevy::prelude::*;

/// Seconds the look-ahead takes to swing across when the player turns.
pub const FLIP_TIME: f32 = 0.5;
/// Vertical damping while falling fast; lower follows tighter.
pub const FALL_Y_DAMPING: f32 = 0.25;
pub const FALL_PAN_TIME: f32 = 0.35;
/// Falling faster than this (negative, world units per second) tightens the
/// vertical follow.
pub const FALL_SPEED_THRESHOLD: f32 = -15.0;

/// Sine in-out interpolation from `start` to `end`, advanced once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    start: f32,
    end: f32,
    duration: f32,
    elapsed: f32,
}

impl Tween {
    pub fn new(start: f32, end: f32, duration: f32) -> Self {
        Self {
            start,
            end,
            duration,
            elapsed: 0.0,
        }
    }

    /// Already at `value`.
    pub fn settled(value: f32) -> Self {
        Self::new(value, value, 0.0)
    }

    pub fn value(&self) -> f32 {
        if self.is_finished() {
            return self.end;
        }
        EasingCurve::new(self.start, self.end, EaseFunction::SineInOut)
            .sample_clamped(self.elapsed / self.duration)
    }

    pub fn advance(&mut self, dt: f32) -> f32 {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration.max(0.0));
        self.value()
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn end(&self) -> f32 {
        self.end
    }
}

/// Follow state: horizontal look-ahead that flips with facing, and vertical
/// damping that tightens during long falls.
#[derive(Resource, Debug, Clone)]
pub struct CameraRig {
    pub look_ahead_distance: f32,
    pub x_damping: f32,
    pub normal_y_damping: f32,
    pub y_damping: f32,
    pub lerped_from_player_falling: bool,
    look_ahead: Tween,
    damping_tween: Option<Tween>,
}

impl Default for CameraRig {
    fn default() -> Self {
        let look_ahead_distance = 2.0;
        Self {
            look_ahead_distance,
            x_damping: 0.3,
            normal_y_damping: 1.0,
            y_damping: 1.0,
            lerped_from_player_falling: false,
            look_ahead: Tween::settled(look_ahead_distance),
            damping_tween: None,
        }
    }
}

impl CameraRig {
    pub fn look_ahead(&self) -> f32 {
        self.look_ahead.value()
    }

    /// Swing the look-ahead to the side the player now faces.
    pub fn turn(&mut self, facing_right: bool) {
        let end = if facing_right {
            self.look_ahead_distance
        } else {
            -self.look_ahead_distance
        };
        if self.look_ahead.end() != end {
            self.look_ahead = Tween::new(self.look_ahead.value(), end, FLIP_TIME);
        }
    }

    pub fn is_lerping_y_damping(&self) -> bool {
        self.damping_tween.is_some()
    }

    /// Start tightening once the player falls past the threshold, and relax
    /// again once they stop falling. Never interrupts a running tween.
    pub fn update_damping(&mut self, vertical_velocity: f32) {
        if self.is_lerping_y_damping() {
            return;
        }

        if vertical_velocity < FALL_SPEED_THRESHOLD && !self.lerped_from_player_falling {
            self.lerp_y_damping(true);
        } else if vertical_velocity >= 0.0 && self.lerped_from_player_falling {
            self.lerped_from_player_falling = false;
            self.lerp_y_damping(false);
        }
    }

    fn lerp_y_damping(&mut self, falling: bool) {
        let end = if falling {
            self.lerped_from_player_falling = true;
            FALL_Y_DAMPING
        } else {
            self.normal_y_damping
        };
        self.damping_tween = Some(Tween::new(self.y_damping, end, FALL_PAN_TIME));
    }

    pub fn tick(&mut self, dt: f32) {
        self.look_ahead.advance(dt);

        let mut finished = false;
        if let Some(tween) = self.damping_tween.as_mut() {
            self.y_damping = tween.advance(dt);
            finished = tween.is_finished();
        }
        if finished {
            self.damping_tween = None;
        }
    }
}

/// Exponential approach toward `target`; `damping` is roughly the seconds to
/// close most of the gap. Zero damping snaps.
pub fn smooth_follow(current: f32, target: f32, damping: f32, dt: f32) -> f32 {
    if damping <= 0.0 {
        return target;
    }
    current + (target - current) * (1.0 - (-dt / damping).exp())
}
