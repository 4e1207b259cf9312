use std::sync::{Arc, Mutex};

use crate::domain::{ContractDeploymentState, PortError};
use crate::ports::DeploymentStateStore;

/// In-memory deployment state store; clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct MemoryDeploymentStateStore {
    state: Arc<Mutex<ContractDeploymentState>>,
}

impl MemoryDeploymentStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: ContractDeploymentState) -> Self {
        Self { state: Arc::new(Mutex::new(state)) }
    }
}

impl DeploymentStateStore for MemoryDeploymentStateStore {
    fn load(&self) -> Result<ContractDeploymentState, PortError> {
        self.state
            .lock()
            .map(|state| *state)
            .map_err(|_| PortError::new("deployment state lock poisoned"))
    }

    fn save(&self, state: ContractDeploymentState) -> Result<(), PortError> {
        let mut guard =
            self.state.lock().map_err(|_| PortError::new("deployment state lock poisoned"))?;
        *guard = state;
        Ok(())
    }
}
