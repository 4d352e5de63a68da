mod camera;
mod combat;
mod content;
mod movement;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Locomotion Lab".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .insert_resource(Gravity(Vec2::NEG_Y * 9.81))
        .insert_resource(Time::<Fixed>::from_hz(50.0))
        .add_plugins((
            content::ContentPlugin,
            movement::MovementPlugin,
            combat::CombatPlugin,
            camera::CameraPlugin,
        ))
        .run();
}
