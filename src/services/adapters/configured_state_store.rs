use crate::domain::config::StateSettings;
use crate::domain::{ContractDeploymentState, PortError};
use crate::ports::DeploymentStateStore;

use super::deployment_state_filesystem::FilesystemDeploymentStateStore;
use super::memory_deployment_state_store::MemoryDeploymentStateStore;

/// State store selected by the `[state]` config section.
#[derive(Debug, Clone)]
pub enum ConfiguredStateStore {
    Memory(MemoryDeploymentStateStore),
    Filesystem(FilesystemDeploymentStateStore),
}

impl ConfiguredStateStore {
    pub fn from_settings(settings: &StateSettings) -> Self {
        match &settings.path {
            Some(path) => Self::Filesystem(FilesystemDeploymentStateStore::new(path.clone())),
            None => Self::Memory(MemoryDeploymentStateStore::new()),
        }
    }
}

impl DeploymentStateStore for ConfiguredStateStore {
    fn load(&self) -> Result<ContractDeploymentState, PortError> {
        match self {
            Self::Memory(store) => store.load(),
            Self::Filesystem(store) => store.load(),
        }
    }

    fn save(&self, state: ContractDeploymentState) -> Result<(), PortError> {
        match self {
            Self::Memory(store) => store.save(state),
            Self::Filesystem(store) => store.save(state),
        }
    }
}
