//! Movement domain: locomotion states and the transition table.
//!
//! `next_state` is a pure function of a [`TransitionInputs`] snapshot. Each
//! arm lists its predicates in priority order and the first match wins.

use bevy::prelude::*;

/// Minimum |x| input that counts as running.
pub const RUN_INPUT_THRESHOLD: f32 = 0.1;
/// Minimum |x| input that picks Run over Idle when a dash or attack ends.
pub const RESUME_RUN_THRESHOLD: f32 = 0.01;
/// Jump and WallJump fall once the wall-jump timer drops below this.
pub const WALL_JUMP_FALL_GRACE: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub enum MovementState {
    #[default]
    Idle,
    Run,
    Jump,
    Fall,
    WallJump,
    WallSlide,
    Dash,
    MeleeAttack,
}

impl MovementState {
    pub const ALL: [MovementState; 8] = [
        MovementState::Idle,
        MovementState::Run,
        MovementState::Jump,
        MovementState::Fall,
        MovementState::WallJump,
        MovementState::WallSlide,
        MovementState::Dash,
        MovementState::MeleeAttack,
    ];

    /// States `next_state` may move to from `self`. Dash and MeleeAttack are
    /// also reachable from anywhere through input requests.
    pub fn successors(self) -> &'static [MovementState] {
        use MovementState::*;
        match self {
            Idle => &[Run, Jump, Fall, WallSlide],
            Run => &[Idle, Jump, Fall, WallSlide],
            Jump => &[Fall, WallJump],
            Fall => &[Idle, WallJump, WallSlide],
            WallJump => &[Fall],
            WallSlide => &[Fall, WallJump],
            Dash => &[Run, Idle, WallSlide, Fall],
            MeleeAttack => &[Jump, Run, Idle, Fall],
        }
    }
}

/// Everything the transition table reads, captured once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TransitionInputs {
    pub move_x: f32,
    pub vertical_velocity: f32,
    pub ground_timer: f32,
    pub jump_buffer: f32,
    pub wall_jump_timer: f32,
    pub can_slide: bool,
    pub can_wall_jump: bool,
    /// Seconds spent in the current state.
    pub state_elapsed: f32,
    pub dash_time: f32,
    pub attack_duration: f32,
}

impl TransitionInputs {
    fn grounded(&self) -> bool {
        self.ground_timer > 0.0
    }

    fn jump_ready(&self) -> bool {
        self.jump_buffer > 0.0 && self.grounded()
    }

    fn falling_after_wall_jump_grace(&self) -> bool {
        self.wall_jump_timer < WALL_JUMP_FALL_GRACE && self.vertical_velocity < 0.0
    }

    fn grounded_resume(&self) -> MovementState {
        if self.move_x.abs() > RESUME_RUN_THRESHOLD {
            MovementState::Run
        } else {
            MovementState::Idle
        }
    }
}

pub fn next_state(state: MovementState, inputs: &TransitionInputs) -> Option<MovementState> {
    use MovementState::*;

    match state {
        Idle | Run => {
            if state == Idle && inputs.move_x.abs() > RUN_INPUT_THRESHOLD {
                Some(Run)
            } else if state == Run && inputs.move_x.abs() < RUN_INPUT_THRESHOLD {
                Some(Idle)
            } else if inputs.jump_ready() {
                Some(Jump)
            } else if !inputs.grounded() {
                Some(Fall)
            } else if inputs.can_slide {
                Some(WallSlide)
            } else {
                None
            }
        }
        Jump => {
            if inputs.falling_after_wall_jump_grace() {
                Some(Fall)
            } else if inputs.can_wall_jump {
                Some(WallJump)
            } else {
                None
            }
        }
        Fall => {
            if inputs.grounded() {
                Some(Idle)
            } else if inputs.can_wall_jump {
                Some(WallJump)
            } else if inputs.can_slide {
                Some(WallSlide)
            } else {
                None
            }
        }
        WallJump => inputs.falling_after_wall_jump_grace().then_some(Fall),
        WallSlide => {
            if !inputs.can_slide {
                Some(Fall)
            } else if inputs.can_wall_jump {
                Some(WallJump)
            } else {
                None
            }
        }
        Dash => {
            if inputs.state_elapsed < inputs.dash_time {
                None
            } else if inputs.grounded() {
                Some(inputs.grounded_resume())
            } else if inputs.can_slide {
                Some(WallSlide)
            } else {
                Some(Fall)
            }
        }
        MeleeAttack => {
            if inputs.jump_ready() {
                Some(Jump)
            } else if inputs.state_elapsed > inputs.attack_duration {
                if inputs.grounded() {
                    Some(inputs.grounded_resume())
                } else {
                    Some(Fall)
                }
            } else {
                None
            }
        }
    }
}
