//! Data definitions for the player tuning file.
//!
//! Mirrors `assets/data/player_profile.ron`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::{ProbeLayout, TunableProfile};

/// Schema version this build understands.
pub const PLAYER_CONFIG_SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Player config (player_profile.ron) - Single struct, not a list
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect, Resource)]
pub struct PlayerConfig {
    pub schema_version: u32,
    pub profile: TunableProfile,
    #[serde(default)]
    pub probes: ProbeLayout,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            schema_version: PLAYER_CONFIG_SCHEMA_VERSION,
            profile: TunableProfile::default(),
            probes: ProbeLayout::default(),
        }
    }
}
