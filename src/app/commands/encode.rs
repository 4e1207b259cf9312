//! Offline encoding of relay payloads.

use alloy_primitives::Bytes;

use crate::domain::{
    ContractArtifact, LendingMarketProposal, ProposalArgs, ShuttleError, build_deployment_payload,
};

/// Which payload to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeTarget {
    /// Contract creation data: bytecode followed by constructor arguments.
    Deployment,
    /// Calldata for the append method.
    Append { method: String },
}

pub fn execute(
    artifact: &ContractArtifact,
    proposal: &LendingMarketProposal,
    target: &EncodeTarget,
) -> Result<Bytes, ShuttleError> {
    let values = ProposalArgs::from_proposal(proposal)?.to_abi_values();
    match target {
        EncodeTarget::Deployment => {
            build_deployment_payload(artifact.bytecode(), artifact.encode_constructor(&values))
        }
        EncodeTarget::Append { method } => artifact.encode_call(method, &values).map(Bytes::from),
    }
}
