//! Relay configuration loading from disk.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::config::{ConfigError, ShuttleConfig, parse_config_content};

/// Load and parse `govshuttle.toml`.
///
/// Relative artifact and state paths are resolved against the config file's directory.
pub fn load_config(path: &Path) -> Result<ShuttleConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            ConfigError::Missing(path.to_path_buf())
        } else {
            ConfigError::Read { path: path.to_path_buf(), source: err }
        }
    })?;
    let mut config = parse_config_content(&content)?;

    if let Some(base) = path.parent() {
        if let Some(artifact) = config.contract.artifact.as_mut() {
            if artifact.is_relative() {
                *artifact = base.join(&*artifact);
            }
        }
        if let Some(state) = config.state.path.as_mut() {
            if state.is_relative() {
                *state = base.join(&*state);
            }
        }
    }
    Ok(config)
}
