//! Loader for the player tuning RON file.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::data::PlayerConfig;
use super::validation::{ConfigIssue, validate_player_config};

/// Default location of the player tuning file.
pub const PLAYER_CONFIG_PATH: &str = "assets/data/player_profile.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("{} is invalid:\n{}", .path.display(), format_issues(.issues))]
    Invalid {
        path: PathBuf,
        issues: Vec<ConfigIssue>,
    },
}

impl ConfigError {
    pub fn is_missing_file(&self) -> bool {
        matches!(self, ConfigError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

fn format_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("  - {issue}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse and validate config text. `path` is only used for error context.
pub fn parse_player_config(contents: &str, path: &Path) -> Result<PlayerConfig, ConfigError> {
    let config: PlayerConfig =
        ron_options()
            .from_str(contents)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

    let issues = validate_player_config(&config);
    if issues.is_empty() {
        Ok(config)
    } else {
        Err(ConfigError::Invalid {
            path: path.to_path_buf(),
            issues,
        })
    }
}

pub fn load_player_config_file(path: &Path) -> Result<PlayerConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_player_config(&contents, path)
}

/// Load the config, falling back to defaults only when the file is absent.
pub fn load_or_default(path: &Path) -> Result<PlayerConfig, ConfigError> {
    match load_player_config_file(path) {
        Ok(config) => {
            info!("Loaded player config from {}", path.display());
            Ok(config)
        }
        Err(err) if err.is_missing_file() => {
            warn!("{} not found, using default player config", path.display());
            Ok(PlayerConfig::default())
        }
        Err(err) => Err(err),
    }
}
