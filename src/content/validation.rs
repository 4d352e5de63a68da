//! Validation for the player tuning file.

use std::fmt;

use super::data::{PLAYER_CONFIG_SCHEMA_VERSION, PlayerConfig};

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub section: &'static str,
    pub field: &'static str,
    pub value: String,
    pub expected: &'static str,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{} = {} (expected {})",
            self.section, self.field, self.value, self.expected
        )
    }
}

/// Push an issue when `$value` fails `$ok`.
macro_rules! check_field {
    ($issues:expr, $section:expr, $owner:expr, $field:ident, $ok:expr, $expected:expr) => {
        let value = $owner.$field;
        if !($ok)(value) {
            $issues.push(ConfigIssue {
                section: $section,
                field: stringify!($field),
                value: format!("{:?}", value),
                expected: $expected,
            });
        }
    };
}

fn non_negative(value: f32) -> bool {
    value >= 0.0
}

fn unit_ratio(value: f32) -> bool {
    (0.0..=1.0).contains(&value)
}

fn assist_window(value: f32) -> bool {
    (0.01..=0.5).contains(&value)
}

fn positive_extent(value: bevy::math::Vec2) -> bool {
    value.x > 0.0 && value.y > 0.0
}

/// Validate ranges in the profile and probe layout.
/// Returns a list of issues, empty if the config is usable.
pub fn validate_player_config(config: &PlayerConfig) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();

    if config.schema_version != PLAYER_CONFIG_SCHEMA_VERSION {
        issues.push(ConfigIssue {
            section: "config",
            field: "schema_version",
            value: config.schema_version.to_string(),
            expected: "a supported schema version (1)",
        });
    }

    let p = &config.profile;
    let section = "profile";

    // Speeds, forces and times
    check_field!(issues, section, p, run_max_speed, non_negative, ">= 0");
    check_field!(issues, section, p, run_acceleration, non_negative, ">= 0");
    check_field!(issues, section, p, run_deceleration, non_negative, ">= 0");
    check_field!(issues, section, p, jump_height, non_negative, ">= 0");
    check_field!(issues, section, p, jump_cut_gravity_mult, non_negative, ">= 0");
    check_field!(issues, section, p, jump_hang_time_threshold, non_negative, ">= 0");
    check_field!(issues, section, p, jump_hang_acceleration_mult, non_negative, ">= 0");
    check_field!(issues, section, p, jump_hang_max_speed_mult, non_negative, ">= 0");
    check_field!(issues, section, p, slide_speed, non_negative, ">= 0");
    check_field!(issues, section, p, slide_acceleration, non_negative, ">= 0");
    check_field!(issues, section, p, dash_power, non_negative, ">= 0");
    check_field!(issues, section, p, dash_time, non_negative, ">= 0");
    check_field!(issues, section, p, dash_cooldown, non_negative, ">= 0");
    check_field!(issues, section, p, fall_gravity_mult, non_negative, ">= 0");
    check_field!(issues, section, p, fast_fall_gravity_mult, non_negative, ">= 0");
    check_field!(issues, section, p, max_fall_speed, non_negative, ">= 0");
    check_field!(issues, section, p, max_fast_fall_speed, non_negative, ">= 0");
    check_field!(issues, section, p, attack_damage, non_negative, ">= 0");
    check_field!(issues, section, p, attack_duration, non_negative, ">= 0");
    check_field!(issues, section, p, attack_cooldown, non_negative, ">= 0");
    check_field!(issues, section, p, recoil_force, non_negative, ">= 0");
    check_field!(issues, section, p, knockback_force, non_negative, ">= 0");
    check_field!(issues, section, p, knockback_duration, non_negative, ">= 0");

    // Time to apex divides the gravity formula
    check_field!(issues, section, p, jump_time_to_apex, |v: f32| v > 0.0, "> 0");

    // Ratios
    check_field!(issues, section, p, air_acceleration, unit_ratio, "in [0, 1]");
    check_field!(issues, section, p, air_deceleration, unit_ratio, "in [0, 1]");
    check_field!(issues, section, p, jump_hang_gravity_mult, unit_ratio, "in [0, 1]");
    check_field!(issues, section, p, wall_jump_run_lerp, unit_ratio, "in [0, 1]");

    // Assists
    check_field!(issues, section, p, coyote_time, assist_window, "in [0.01, 0.5]");
    check_field!(issues, section, p, jump_input_buffer_time, assist_window, "in [0.01, 0.5]");

    check_field!(
        issues,
        section,
        p,
        jump_cut_wall_jump_gate,
        |gate: Option<f32>| gate.is_none_or(non_negative),
        "None or >= 0"
    );
    check_field!(issues, section, p, max_health, |v: u32| v > 0, "> 0");

    let probes = &config.probes;
    check_field!(issues, "probes", probes, ground_size, positive_extent, "positive width and height");
    check_field!(issues, "probes", probes, wall_size, positive_extent, "positive width and height");

    issues
}
