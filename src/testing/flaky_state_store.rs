use std::sync::{Arc, Mutex};

use crate::domain::{ContractDeploymentState, PortError};
use crate::ports::DeploymentStateStore;
use crate::services::MemoryDeploymentStateStore;

/// In-memory state store whose saves can be switched to fail.
#[derive(Debug, Clone, Default)]
pub struct FlakyStateStore {
    inner: MemoryDeploymentStateStore,
    save_failure: Arc<Mutex<Option<String>>>,
    save_attempts: Arc<Mutex<usize>>,
}

impl FlakyStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_saves(&self, message: &str) {
        *self.save_failure.lock().unwrap() = Some(message.to_string());
    }

    pub fn recover(&self) {
        *self.save_failure.lock().unwrap() = None;
    }

    pub fn save_attempts(&self) -> usize {
        *self.save_attempts.lock().unwrap()
    }
}

impl DeploymentStateStore for FlakyStateStore {
    fn load(&self) -> Result<ContractDeploymentState, PortError> {
        self.inner.load()
    }

    fn save(&self, state: ContractDeploymentState) -> Result<(), PortError> {
        *self.save_attempts.lock().unwrap() += 1;
        if let Some(message) = self.save_failure.lock().unwrap().clone() {
            return Err(PortError::new(message));
        }
        self.inner.save(state)
    }
}
