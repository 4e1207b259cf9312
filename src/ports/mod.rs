mod account_keeper;
mod deployment_state_store;
mod evm_executor;
mod proposal_id_source;

pub use account_keeper::AccountKeeper;
pub use deployment_state_store::DeploymentStateStore;
pub use evm_executor::{CallResult, EvmExecutor};
pub use proposal_id_source::ProposalIdSource;
