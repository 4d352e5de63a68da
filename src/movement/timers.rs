//! Movement domain: countdown timers for grace windows and cooldowns.
//!
//! Timers only ever count down. A positive value means "true within the grace
//! window"; negative values keep counting and are read as "how long ago".

use bevy::prelude::*;

use crate::movement::TunableProfile;

/// Side of the body a wall probe sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum WallSide {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Reflect)]
pub struct TimerBank {
    pub ground: f32,
    pub wall: f32,
    pub wall_left: f32,
    pub wall_right: f32,
    pub jump_buffer: f32,
    pub dash: f32,
    pub attack: f32,
    pub wall_jump: f32,
    pub knockback: f32,
    pub can_dash: bool,
    pub can_attack: bool,
}

impl Default for TimerBank {
    fn default() -> Self {
        Self {
            ground: 0.0,
            wall: 0.0,
            wall_left: 0.0,
            wall_right: 0.0,
            jump_buffer: 0.0,
            dash: 0.0,
            attack: 0.0,
            // Never wall-jumped, so the jump-cut gate starts open.
            wall_jump: f32::NEG_INFINITY,
            knockback: 0.0,
            can_dash: true,
            can_attack: true,
        }
    }
}

impl TimerBank {
    /// Decay every timer by `dt`. Cooldown flags come back once their timer
    /// reaches the negative cooldown, not zero.
    pub fn tick(&mut self, dt: f32, profile: &TunableProfile) {
        if dt <= 0.0 {
            return;
        }

        self.ground -= dt;
        self.wall -= dt;
        self.wall_left -= dt;
        self.wall_right -= dt;
        self.jump_buffer -= dt;
        self.dash -= dt;
        self.attack -= dt;
        self.wall_jump -= dt;
        self.knockback -= dt;

        if !self.can_dash && self.dash <= -profile.dash_cooldown {
            self.can_dash = true;
        }
        if !self.can_attack && self.attack <= -profile.attack_cooldown {
            self.can_attack = true;
        }
    }

    pub fn refresh_ground(&mut self, in_contact: bool, coyote_time: f32) {
        if in_contact {
            self.ground = coyote_time;
        }
    }

    /// Wall contact is ignored while a wall jump is in flight.
    pub fn refresh_wall(
        &mut self,
        side: WallSide,
        in_contact: bool,
        coyote_time: f32,
        is_wall_jumping: bool,
    ) {
        if in_contact && !is_wall_jumping {
            match side {
                WallSide::Left => self.wall_left = coyote_time,
                WallSide::Right => self.wall_right = coyote_time,
            }
        }
        self.wall = self.wall_left.max(self.wall_right);
    }

    pub fn buffer_jump(&mut self, buffer_time: f32) {
        self.jump_buffer = buffer_time;
    }

    pub fn start_dash_cooldown(&mut self) {
        self.dash = 0.0;
        self.can_dash = false;
    }

    pub fn start_attack_cooldown(&mut self) {
        self.attack = 0.0;
        self.can_attack = false;
    }

    pub fn clear_walls(&mut self) {
        self.wall = 0.0;
        self.wall_left = 0.0;
        self.wall_right = 0.0;
    }

    pub fn is_grounded(&self) -> bool {
        self.ground > 0.0
    }

    pub fn is_knockback_locked(&self) -> bool {
        self.knockback > 0.0
    }
}
