//! Relay configuration domain models.

use std::path::PathBuf;

use alloy_primitives::Address;
use serde::Deserialize;

use crate::domain::config::ConfigError;
use crate::domain::module_account::{DEFAULT_MODULE_NAME, module_address};

/// Configuration loaded from `govshuttle.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShuttleConfig {
    /// Relay account and call settings.
    #[serde(default)]
    pub relay: RelaySettings,
    /// Proposal store contract artifact.
    #[serde(default)]
    pub contract: ContractSettings,
    /// Where the deployment state is persisted.
    #[serde(default)]
    pub state: StateSettings,
}

/// Relay account and call settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelaySettings {
    /// Module name the relay account is derived from.
    #[serde(default = "default_module_name")]
    pub module_name: String,
    /// Explicit relay account; overrides `module_name`.
    #[serde(default)]
    pub address: Option<Address>,
    /// Recover the store address from the relay sequence when no deployment is recorded.
    #[serde(default = "default_true")]
    pub sequence_fallback: bool,
    /// Proposal store method receiving appended proposals.
    #[serde(default = "default_append_method")]
    pub append_method: String,
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self {
            module_name: default_module_name(),
            address: None,
            sequence_fallback: default_true(),
            append_method: default_append_method(),
        }
    }
}

impl RelaySettings {
    pub fn relay_account(&self) -> Address {
        self.address.unwrap_or_else(|| module_address(&self.module_name))
    }
}

/// Proposal store contract artifact location.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContractSettings {
    /// Compiled contract JSON (`abi` + `bin`).
    #[serde(default)]
    pub artifact: Option<PathBuf>,
}

/// Deployment state persistence.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StateSettings {
    /// JSON file holding the deployment state; kept in memory when absent.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_module_name() -> String {
    DEFAULT_MODULE_NAME.to_string()
}

fn default_append_method() -> String {
    "AddProposal".to_string()
}

fn default_true() -> bool {
    true
}

impl ShuttleConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.relay.module_name.trim().is_empty() {
            return Err(ConfigError::Invalid("relay.module_name must not be empty".into()));
        }
        if self.relay.append_method.trim().is_empty() {
            return Err(ConfigError::Invalid("relay.append_method must not be empty".into()));
        }
        Ok(())
    }
}
