//! Pure parse/validate for relay configuration (`govshuttle.toml`).

use crate::domain::config::{ConfigError, ShuttleConfig};

/// Parse and validate relay configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<ShuttleConfig, ConfigError> {
    let config: ShuttleConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
