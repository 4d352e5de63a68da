//! Content domain: loading and validating the player tuning file.

mod data;
mod loader;
mod validation;

pub use data::{PLAYER_CONFIG_SCHEMA_VERSION, PlayerConfig};
pub use loader::{
    ConfigError, PLAYER_CONFIG_PATH, load_or_default, load_player_config_file,
    parse_player_config,
};
pub use validation::{ConfigIssue, validate_player_config};

use bevy::prelude::*;
use std::path::Path;

use crate::movement::MovementTuning;
#[cfg(feature = "dev-tools")]
use crate::movement::{Player, ProbeLayout};

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<PlayerConfig>()
            .add_systems(Startup, load_player_config);

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, reload_player_config);
    }
}

/// Read the tuning file into `PlayerConfig` and `MovementTuning`.
/// A malformed or out-of-range file aborts startup.
pub(crate) fn load_player_config(
    mut commands: Commands,
    mut tuning: ResMut<MovementTuning>,
) -> Result {
    let config = load_or_default(Path::new(PLAYER_CONFIG_PATH))?;
    tuning.set_profile(config.profile.clone());
    commands.insert_resource(config);
    Ok(())
}

/// F5 re-reads the tuning file; a bad edit keeps the current config.
#[cfg(feature = "dev-tools")]
fn reload_player_config(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut config: ResMut<PlayerConfig>,
    mut tuning: ResMut<MovementTuning>,
    mut probes: Query<&mut ProbeLayout, With<Player>>,
) {
    if !keyboard.just_pressed(KeyCode::F5) {
        return;
    }

    match load_player_config_file(Path::new(PLAYER_CONFIG_PATH)) {
        Ok(reloaded) => {
            tuning.set_profile(reloaded.profile.clone());
            for mut layout in &mut probes {
                *layout = reloaded.probes.clone();
            }
            *config = reloaded;
            info!(
                "Reloaded player config: jump_force={:.2}, gravity_scale={:.2}",
                tuning.derived.jump_force, tuning.derived.gravity_scale
            );
        }
        Err(err) => error!("Keeping current player config: {err}"),
    }
}
