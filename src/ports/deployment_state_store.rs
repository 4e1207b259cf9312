use crate::domain::{ContractDeploymentState, PortError};

/// Port persisting the proposal store deployment state alongside chain state.
pub trait DeploymentStateStore {
    /// Recorded state; `NotDeployed` when nothing was ever saved.
    fn load(&self) -> Result<ContractDeploymentState, PortError>;

    fn save(&self, state: ContractDeploymentState) -> Result<(), PortError>;
}

impl<T: DeploymentStateStore + ?Sized> DeploymentStateStore for &T {
    fn load(&self) -> Result<ContractDeploymentState, PortError> {
        (**self).load()
    }

    fn save(&self, state: ContractDeploymentState) -> Result<(), PortError> {
        (**self).save(state)
    }
}
