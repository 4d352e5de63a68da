//! Camera domain: spawning and following the player.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::camera::rig::{CameraRig, smooth_follow};
use crate::movement::{Player, PlayerTurned};

/// World units are meters; one meter spans this many pixels at 1x zoom.
const PIXELS_PER_METER: f32 = 40.0;

#[derive(Component, Debug)]
pub struct FollowCamera;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        FollowCamera,
        Projection::Orthographic(OrthographicProjection {
            scale: 1.0 / PIXELS_PER_METER,
            ..OrthographicProjection::default_2d()
        }),
    ));
}

pub(crate) fn turn_look_ahead(mut turns: MessageReader<PlayerTurned>, mut rig: ResMut<CameraRig>) {
    for turn in turns.read() {
        rig.turn(turn.facing_right);
    }
}

pub(crate) fn update_fall_damping(
    mut rig: ResMut<CameraRig>,
    players: Query<&LinearVelocity, With<Player>>,
) {
    if let Some(velocity) = players.iter().next() {
        rig.update_damping(velocity.y);
    }
}

pub(crate) fn advance_camera_rig(time: Res<Time>, mut rig: ResMut<CameraRig>) {
    rig.tick(time.delta_secs());
}

pub(crate) fn follow_player(
    time: Res<Time>,
    rig: Res<CameraRig>,
    players: Query<&Transform, With<Player>>,
    mut cameras: Query<&mut Transform, (With<FollowCamera>, Without<Player>)>,
) {
    let Some(player) = players.iter().next() else {
        return;
    };
    let dt = time.delta_secs();
    let target = player.translation.truncate() + Vec2::X * rig.look_ahead();

    for mut transform in &mut cameras {
        transform.translation.x = smooth_follow(transform.translation.x, target.x, rig.x_damping, dt);
        transform.translation.y = smooth_follow(transform.translation.y, target.y, rig.y_damping, dt);
    }
}
