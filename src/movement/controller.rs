//! Movement domain: the locomotion controller.
//!
//! `Locomotion` owns the active state, motion flags, timers and body velocity.
//! The Bevy systems feed it a frame tick and a fixed tick; everything it wants
//! collaborators to know about is queued as a [`LocomotionEvent`].

use bevy::prelude::*;

use crate::movement::body::{Body2d, sign};
use crate::movement::integrator;
use crate::movement::probe::ContactSample;
use crate::movement::state::{MovementState, TransitionInputs, next_state};
use crate::movement::timers::WallSide;
use crate::movement::{MovementInput, MovementTuning, TimerBank};

/// Per-player motion flags, mutated only by the controller and integrator.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct MotionState {
    pub is_facing_right: bool,
    pub is_jumping: bool,
    pub is_wall_jumping: bool,
    pub is_sliding: bool,
    pub is_jump_cut: bool,
    pub is_jump_falling: bool,
    /// Direction of the most recent wall jump, -1 or +1.
    pub last_wall_jump_direction: i8,
}

impl Default for MotionState {
    fn default() -> Self {
        Self {
            is_facing_right: true,
            is_jumping: false,
            is_wall_jumping: false,
            is_sliding: false,
            is_jump_cut: false,
            is_jump_falling: false,
            last_wall_jump_direction: 1,
        }
    }
}

impl MotionState {
    /// Rising from a jump or wall jump, or falling right after one.
    pub fn in_jump_arc(&self) -> bool {
        self.is_jumping || self.is_wall_jumping || self.is_jump_falling
    }

    pub fn facing_sign(&self) -> f32 {
        if self.is_facing_right { 1.0 } else { -1.0 }
    }
}

/// Which hitbox a melee swing uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum AttackVariant {
    Forward,
    Up,
    Down,
}

impl AttackVariant {
    /// Up when aiming up, Down when aiming down while airborne. A negative
    /// ground timer is the airborne test.
    pub fn select(move_y: f32, ground_timer: f32) -> Self {
        if move_y > 0.0 {
            AttackVariant::Up
        } else if move_y < 0.0 && ground_timer < 0.0 {
            AttackVariant::Down
        } else {
            AttackVariant::Forward
        }
    }
}

/// Outbound hooks for camera, visual and combat collaborators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocomotionEvent {
    StateChanged {
        from: MovementState,
        to: MovementState,
    },
    Turned {
        facing_right: bool,
    },
    MeleeAttackStarted {
        variant: AttackVariant,
        duration: f32,
    },
}

#[derive(Component, Debug, Clone)]
pub struct Locomotion {
    pub state: MovementState,
    pub motion: MotionState,
    pub timers: TimerBank,
    pub body: Body2d,
    pub input: MovementInput,
    state_elapsed: f32,
    dash_direction: f32,
    events: Vec<LocomotionEvent>,
}

impl Default for Locomotion {
    fn default() -> Self {
        Self {
            state: MovementState::Idle,
            motion: MotionState::default(),
            timers: TimerBank::default(),
            body: Body2d::default(),
            input: MovementInput::default(),
            state_elapsed: 0.0,
            dash_direction: 1.0,
            events: Vec::new(),
        }
    }
}

impl Locomotion {
    /// Idle, facing right, gravity at the profile's base scale.
    pub fn new(tuning: &MovementTuning) -> Self {
        let mut locomotion = Self::default();
        locomotion.body.gravity_scale = tuning.derived.gravity_scale;
        locomotion
    }

    pub fn state_elapsed(&self) -> f32 {
        self.state_elapsed
    }

    pub fn is_knockback_locked(&self) -> bool {
        self.timers.is_knockback_locked()
    }

    fn push_event(&mut self, event: LocomotionEvent) {
        self.events.push(event);
    }

    pub fn drain_events(&mut self) -> impl Iterator<Item = LocomotionEvent> + '_ {
        self.events.drain(..)
    }

    /// Variable-timestep tick: timers, contacts, input, gravity selection and
    /// state transitions, in that order.
    pub fn frame_tick(
        &mut self,
        tuning: &MovementTuning,
        dt: f32,
        contacts: ContactSample,
        input: MovementInput,
    ) {
        self.timers.tick(dt, &tuning.profile);
        self.state_elapsed += dt.max(0.0);
        self.refresh_contacts(contacts, tuning);
        self.apply_input(input, tuning);

        if self.state != MovementState::Dash {
            integrator::apply_dynamic_gravity(
                &mut self.body,
                &self.motion,
                &self.timers,
                tuning,
                self.input.axis.y,
            );
        }

        self.update_state(tuning);
    }

    /// Fixed-timestep tick: locomotion forces, state physics, then gravity.
    pub fn fixed_tick(&mut self, tuning: &MovementTuning, fixed_dt: f32) {
        if !self.is_knockback_locked() {
            if self.state != MovementState::Dash {
                let lerp = if self.motion.is_wall_jumping {
                    tuning.profile.wall_jump_run_lerp
                } else {
                    1.0
                };
                integrator::run(
                    &mut self.body,
                    &self.motion,
                    &self.timers,
                    tuning,
                    self.input.axis.x,
                    lerp,
                    fixed_dt,
                );
            }
            if self.motion.is_sliding {
                integrator::slide(&mut self.body, tuning, fixed_dt);
            }
            self.state_fixed_update(tuning);
        }

        self.body.integrate_gravity(tuning.world_gravity_y, fixed_dt);
    }

    fn refresh_contacts(&mut self, contacts: ContactSample, tuning: &MovementTuning) {
        let coyote = tuning.profile.coyote_time;
        let wall_jumping = self.motion.is_wall_jumping;
        self.timers.refresh_ground(contacts.grounded, coyote);
        self.timers
            .refresh_wall(WallSide::Right, contacts.touching_right, coyote, wall_jumping);
        self.timers
            .refresh_wall(WallSide::Left, contacts.touching_left, coyote, wall_jumping);
    }

    fn apply_input(&mut self, input: MovementInput, tuning: &MovementTuning) {
        self.input = input;

        if input.axis.x != 0.0 {
            self.face(input.axis.x > 0.0);
        }

        if input.jump_just_pressed {
            self.timers.buffer_jump(tuning.profile.jump_input_buffer_time);
        }

        if input.jump_just_released && self.can_jump_cut() {
            self.motion.is_jump_cut = true;
        }

        if input.dash_just_pressed && self.timers.can_dash {
            self.change_state(MovementState::Dash, tuning);
        }

        if input.attack_just_pressed && self.timers.can_attack {
            self.change_state(MovementState::MeleeAttack, tuning);
        }
    }

    fn face(&mut self, right: bool) {
        if right != self.motion.is_facing_right {
            self.motion.is_facing_right = right;
            self.push_event(LocomotionEvent::Turned {
                facing_right: right,
            });
        }
    }

    fn can_jump_cut(&self) -> bool {
        (self.motion.is_jumping || self.motion.is_wall_jumping) && self.body.velocity.y > 0.0
    }

    /// Jump buffered, wall in reach, airborne, and not kicking back into the
    /// wall just left.
    pub fn can_wall_jump(&self) -> bool {
        let t = &self.timers;
        let m = &self.motion;
        t.jump_buffer > 0.0
            && t.wall > 0.0
            && t.ground <= 0.0
            && (!m.is_wall_jumping
                || (t.wall_right > 0.0 && m.last_wall_jump_direction == 1)
                || (t.wall_left > 0.0 && m.last_wall_jump_direction == -1))
    }

    pub fn can_slide(&self) -> bool {
        self.timers.wall > 0.0
            && !self.motion.is_jumping
            && !self.motion.is_wall_jumping
            && self.timers.ground <= 0.0
    }

    pub fn transition_inputs(&self, tuning: &MovementTuning) -> TransitionInputs {
        TransitionInputs {
            move_x: self.input.axis.x,
            vertical_velocity: self.body.velocity.y,
            ground_timer: self.timers.ground,
            jump_buffer: self.timers.jump_buffer,
            wall_jump_timer: self.timers.wall_jump,
            can_slide: self.can_slide(),
            can_wall_jump: self.can_wall_jump(),
            state_elapsed: self.state_elapsed,
            dash_time: tuning.profile.dash_time,
            attack_duration: tuning.profile.attack_duration,
        }
    }

    fn update_state(&mut self, tuning: &MovementTuning) {
        let inputs = self.transition_inputs(tuning);
        if let Some(next) = next_state(self.state, &inputs) {
            self.change_state(next, tuning);
        }
    }

    /// Exit the active state and enter `next`. Re-entering the active state
    /// does nothing.
    pub fn change_state(&mut self, next: MovementState, tuning: &MovementTuning) {
        let previous = self.state;
        if previous == next {
            return;
        }

        self.exit_state(previous, tuning);
        self.state = next;
        self.state_elapsed = 0.0;
        self.enter_state(previous, tuning);

        debug!(
            "Locomotion: {:?} -> {:?}, velocity=({:.2}, {:.2})",
            previous, next, self.body.velocity.x, self.body.velocity.y
        );
        self.push_event(LocomotionEvent::StateChanged {
            from: previous,
            to: next,
        });
    }

    fn enter_state(&mut self, previous: MovementState, tuning: &MovementTuning) {
        let profile = &tuning.profile;

        self.motion.is_jump_falling = self.state == MovementState::Fall
            && matches!(previous, MovementState::Jump | MovementState::WallJump);

        match self.state {
            MovementState::Idle | MovementState::Run | MovementState::Fall => {}
            MovementState::Jump => {
                self.motion.is_jumping = true;
                self.motion.is_jump_cut = false;
                self.timers.jump_buffer = 0.0;
                self.timers.ground = 0.0;

                let mut force = tuning.derived.jump_force;
                if self.body.velocity.y < 0.0 {
                    force -= self.body.velocity.y;
                }
                self.body.add_impulse(Vec2::Y * force);
            }
            MovementState::WallJump => {
                self.motion.is_wall_jumping = true;
                self.timers.wall_jump = 0.0;

                let direction: i8 = if self.timers.wall_right > 0.0 { -1 } else { 1 };
                self.motion.last_wall_jump_direction = direction;

                self.timers.jump_buffer = 0.0;
                self.timers.ground = 0.0;
                self.timers.clear_walls();

                let mut force = profile.wall_jump_force;
                force.x *= f32::from(direction);
                if sign(self.body.velocity.x) != sign(force.x) {
                    force.x -= self.body.velocity.x;
                }
                if self.body.velocity.y < 0.0 {
                    force.y -= self.body.velocity.y;
                }
                self.body.add_impulse(force);

                if profile.turn_on_wall_jump {
                    self.face(direction > 0);
                }
            }
            MovementState::WallSlide => {
                self.motion.is_sliding = true;
            }
            MovementState::Dash => {
                self.timers.start_dash_cooldown();
                self.body.velocity = Vec2::ZERO;
                self.body.gravity_scale = 0.0;
                self.dash_direction = self.motion.facing_sign();
                self.body.velocity = Vec2::X * self.dash_direction * profile.dash_power;
            }
            MovementState::MeleeAttack => {
                self.timers.start_attack_cooldown();
                self.body.velocity.x *= 0.25;
                let variant = AttackVariant::select(self.input.axis.y, self.timers.ground);
                self.push_event(LocomotionEvent::MeleeAttackStarted {
                    variant,
                    duration: profile.attack_duration,
                });
            }
        }
    }

    fn exit_state(&mut self, state: MovementState, tuning: &MovementTuning) {
        match state {
            MovementState::Jump => {
                self.motion.is_jumping = false;
                self.motion.is_jump_cut = false;
            }
            MovementState::WallJump => {
                self.motion.is_wall_jumping = false;
                self.motion.is_jump_cut = false;
            }
            MovementState::WallSlide => {
                self.motion.is_sliding = false;
            }
            MovementState::Dash => {
                self.body.gravity_scale = tuning.derived.gravity_scale;
                self.body.velocity *= 0.25;
            }
            MovementState::Idle
            | MovementState::Run
            | MovementState::Fall
            | MovementState::MeleeAttack => {}
        }
    }

    fn state_fixed_update(&mut self, tuning: &MovementTuning) {
        if self.state == MovementState::Dash {
            self.body.velocity = Vec2::X * self.dash_direction * tuning.profile.dash_power;
        }
    }
}
