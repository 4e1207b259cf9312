pub mod artifact;
pub mod codec;
pub mod config;
mod context;
pub mod deployment;
pub mod error;
pub mod module_account;
mod proposal;

pub use artifact::ContractArtifact;
pub use codec::{ProposalArgs, to_address_list, to_big_int_list, to_bytes_list};
pub use config::{ConfigError, ShuttleConfig};
pub use context::ExecutionContext;
pub use deployment::{
    ContractDeploymentState, DeploymentPlan, build_deployment_payload, compute_address,
    is_first_use,
};
pub use error::{CallFailure, ErrorKind, PortError, ShuttleError};
pub use module_account::module_address;
pub use proposal::{LendingMarketProposal, ProposalMetadata};
