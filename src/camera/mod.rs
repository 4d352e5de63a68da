//! Camera domain: player follow with facing look-ahead and fall damping.

mod rig;
mod systems;


pub use rig::{CameraRig, Tween, smooth_follow};
pub use systems::FollowCamera;

use bevy::prelude::*;

use crate::camera::systems::{
    advance_camera_rig, follow_player, setup_camera, turn_look_ahead, update_fall_damping,
};

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraRig>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (
                    turn_look_ahead,
                    update_fall_damping,
                    advance_camera_rig,
                    follow_player,
                )
                    .chain(),
            );
    }
}
