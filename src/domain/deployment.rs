//! Deployment planning for the proposal store contract.

use alloy_primitives::{Address, Bytes};
use serde::{Deserialize, Serialize};

use crate::domain::ShuttleError;

/// Whether the relay account has never sent a transaction.
pub fn is_first_use(sequence: u64) -> bool {
    sequence == 0
}

/// Address of a contract created by `deployer` at `nonce`.
///
/// `keccak256(rlp([deployer, nonce]))[12..]`, the EVM `CREATE` rule.
pub fn compute_address(deployer: Address, nonce: u64) -> Address {
    deployer.create(nonce)
}

/// Concatenate contract init code with its encoded constructor arguments.
pub fn build_deployment_payload(
    contract_binary: &[u8],
    encoded_ctor_args: Result<Vec<u8>, ShuttleError>,
) -> Result<Bytes, ShuttleError> {
    let args = encoded_ctor_args?;
    let mut data = Vec::with_capacity(contract_binary.len() + args.len());
    data.extend_from_slice(contract_binary);
    data.extend_from_slice(&args);
    Ok(Bytes::from(data))
}

/// Recorded deployment status of the proposal store contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "address", rename_all = "snake_case")]
pub enum ContractDeploymentState {
    #[default]
    NotDeployed,
    Deployed(Address),
}

impl ContractDeploymentState {
    pub fn address(&self) -> Option<Address> {
        match self {
            ContractDeploymentState::NotDeployed => None,
            ContractDeploymentState::Deployed(address) => Some(*address),
        }
    }
}

/// What the relay must do for a proposal given the recorded state and the relay sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentPlan {
    /// Create the store contract; it will land at `address`.
    Deploy { address: Address },
    /// Call the append method on an existing store.
    Append { address: Address },
    /// Append to a store deployed before state was recorded; record `address` first.
    Recover { address: Address },
    /// The sequence says a store exists but nothing is recorded and recovery is off.
    Missing,
}

/// Decide deploy-vs-append.
///
/// A recorded deployment always wins. Without one, the relay sequence decides: zero deploys,
/// anything else means an earlier relay already deployed at nonce zero.
pub fn plan(
    state: ContractDeploymentState,
    relay_account: Address,
    sequence: u64,
    sequence_fallback: bool,
) -> DeploymentPlan {
    match state {
        ContractDeploymentState::Deployed(address) => DeploymentPlan::Append { address },
        ContractDeploymentState::NotDeployed if is_first_use(sequence) => {
            DeploymentPlan::Deploy { address: compute_address(relay_account, sequence) }
        }
        ContractDeploymentState::NotDeployed if sequence_fallback => {
            DeploymentPlan::Recover { address: compute_address(relay_account, 0) }
        }
        ContractDeploymentState::NotDeployed => DeploymentPlan::Missing,
    }
}
