//! Lending-market proposal as handed over by the governance subsystem.

use serde::{Deserialize, Serialize};

/// Governance proposal variant relayed into the proposal store contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LendingMarketProposal {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub metadata: ProposalMetadata,
}

/// Call metadata carried by a lending-market proposal.
///
/// `account`, `values`, `signatures` and `calldatas` are correlated by position: entry `i` of
/// each list describes the `i`-th call the proposal will make.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalMetadata {
    /// Proposal id; zero means not yet assigned.
    #[serde(default)]
    pub prop_id: u64,
    /// Hex-encoded target addresses.
    #[serde(default)]
    pub account: Vec<String>,
    #[serde(default)]
    pub values: Vec<u64>,
    /// Function signatures, e.g. `_setCollateralFactor(address,uint256)`.
    #[serde(default)]
    pub signatures: Vec<String>,
    /// Hex-encoded calldata blobs.
    #[serde(default)]
    pub calldatas: Vec<String>,
}

impl LendingMarketProposal {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), metadata: Default::default() }
    }

    pub fn with_metadata(mut self, metadata: ProposalMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn prop_id(&self) -> u64 {
        self.metadata.prop_id
    }

    pub fn is_assigned(&self) -> bool {
        self.metadata.prop_id != 0
    }
}

impl ProposalMetadata {
    /// Returns `true` when the four positional lists have the same length.
    pub fn lists_aligned(&self) -> bool {
        let len = self.account.len();
        self.values.len() == len && self.signatures.len() == len && self.calldatas.len() == len
    }
}
