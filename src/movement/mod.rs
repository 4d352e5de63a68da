//! Movement domain: player locomotion state machine, tuning and plugin wiring.

pub(crate) mod body;
mod bootstrap;
mod components;
mod controller;
mod events;
pub mod integrator;
mod probe;
mod profile;
mod resources;
mod room;
mod state;
mod systems;
mod timers;

#[cfg(test)]
mod tests;

pub use body::Body2d;
pub use components::{GameLayer, Ground, Player, SpawnPoint, Wall};
pub use controller::{AttackVariant, Locomotion, LocomotionEvent, MotionState};
pub use events::{MeleeAttackStarted, MovementStateChanged, PlayerTurned};
pub use integrator::GravityBranch;
pub use probe::{ContactSample, OverlapQuery, ProbeLayout};
pub use profile::TunableProfile;
pub use resources::{DEFAULT_WORLD_GRAVITY_Y, DerivedConstants, MovementInput, MovementTuning};
pub use state::{MovementState, TransitionInputs, next_state};
pub use timers::{TimerBank, WallSide};

use bevy::prelude::*;

use crate::content::load_player_config;
use crate::movement::bootstrap::{respawn_defeated_player, spawn_player, tint_player_by_state};
use crate::movement::room::spawn_training_room;
use crate::movement::systems::{
    advance_locomotion, forward_locomotion_events, integrate_locomotion, read_input,
    refresh_derived_constants,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .register_type::<TunableProfile>()
            .register_type::<ProbeLayout>()
            .add_message::<MovementStateChanged>()
            .add_message::<PlayerTurned>()
            .add_message::<MeleeAttackStarted>()
            .add_systems(Startup, spawn_training_room)
            .add_systems(Startup, spawn_player.after(load_player_config))
            .add_systems(
                Update,
                (
                    read_input,
                    refresh_derived_constants,
                    advance_locomotion,
                    forward_locomotion_events,
                )
                    .chain(),
            )
            .add_systems(Update, (tint_player_by_state, respawn_defeated_player))
            .add_systems(FixedUpdate, integrate_locomotion);
    }
}
