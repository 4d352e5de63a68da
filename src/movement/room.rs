//! Movement domain: training room with floors, wall-jump walls, spikes and a
//! sparring dummy. Units are meters.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{ContactDamage, DamageCooldown, DamageFlash, Enemy, Hazard, Health};
use crate::movement::{GameLayer, Ground, Wall};

const DUMMY_SIZE: Vec2 = Vec2::new(0.8, 1.4);
const DUMMY_COLOR: Color = Color::srgb(0.8, 0.3, 0.3);

pub(crate) fn spawn_training_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers =
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Enemy]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player, GameLayer::Enemy]);

    // Floor
    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(40.0, 1.0)),
            ..default()
        },
        Transform::from_xyz(0.0, -5.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(40.0, 1.0),
        ground_layers,
    ));

    // Outer walls, tall enough to chain wall jumps
    for x in [-20.5, 20.5] {
        commands.spawn((
            Wall,
            Sprite {
                color: wall_color,
                custom_size: Some(Vec2::new(1.0, 16.0)),
                ..default()
            },
            Transform::from_xyz(x, 2.5, 0.0),
            RigidBody::Static,
            Collider::rectangle(1.0, 16.0),
            wall_layers,
        ));
    }

    // Stepped platforms
    for (x, y, width) in [(-12.0, -1.5, 5.0), (-4.0, 1.5, 4.0), (5.0, 4.0, 4.0)] {
        commands.spawn((
            Ground,
            Sprite {
                color: platform_color,
                custom_size: Some(Vec2::new(width, 0.5)),
                ..default()
            },
            Transform::from_xyz(x, y, 0.0),
            RigidBody::Static,
            Collider::rectangle(width, 0.5),
            ground_layers,
        ));
    }

    // Narrow shaft for back-and-forth wall jumps
    for x in [10.0, 13.0] {
        commands.spawn((
            Wall,
            Sprite {
                color: wall_color,
                custom_size: Some(Vec2::new(0.75, 7.0)),
                ..default()
            },
            Transform::from_xyz(x, -1.0, 0.0),
            RigidBody::Static,
            Collider::rectangle(0.75, 7.0),
            wall_layers,
        ));
    }

    // Spikes: pogo off them with a downward swing
    commands.spawn((
        Hazard,
        ContactDamage { amount: 1.0 },
        Sprite {
            color: Color::srgb(0.9, 0.2, 0.6),
            custom_size: Some(Vec2::new(3.0, 0.4)),
            ..default()
        },
        Transform::from_xyz(-7.0, -4.3, 0.0),
        RigidBody::Static,
        Collider::rectangle(3.0, 0.4),
        CollisionLayers::new(GameLayer::Hazard, [GameLayer::Player, GameLayer::Enemy]),
    ));

    spawn_dummy(&mut commands, Vec2::new(4.0, -3.8));
}

fn spawn_dummy(commands: &mut Commands, position: Vec2) {
    commands.spawn((
        (
            Enemy,
            Health::new(100.0),
            DamageCooldown::default(),
            DamageFlash::new(DUMMY_COLOR),
            ContactDamage { amount: 1.0 },
        ),
        Sprite {
            color: DUMMY_COLOR,
            custom_size: Some(DUMMY_SIZE),
            ..default()
        },
        Transform::from_translation(position.extend(0.0)),
        (
            RigidBody::Dynamic,
            Collider::rectangle(DUMMY_SIZE.x, DUMMY_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            CollisionLayers::new(
                GameLayer::Enemy,
                [
                    GameLayer::Ground,
                    GameLayer::Wall,
                    GameLayer::Player,
                    GameLayer::Hazard,
                ],
            ),
        ),
    ));
}
