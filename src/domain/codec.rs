//! Conversions from proposal metadata to typed ABI arguments.

use alloy_dyn_abi::DynSolValue;
use alloy_primitives::{Address, Bytes, U256, hex};

use crate::domain::{LendingMarketProposal, ShuttleError};

/// Parse hex address strings. Empty input yields an empty list.
pub fn to_address_list<S: AsRef<str>>(identifiers: &[S]) -> Result<Vec<Address>, ShuttleError> {
    identifiers
        .iter()
        .map(|id| {
            let id = id.as_ref();
            id.parse::<Address>().map_err(|err| ShuttleError::InvalidAddress {
                value: id.to_string(),
                reason: err.to_string(),
            })
        })
        .collect()
}

/// Widen u64 amounts to 256-bit integers.
pub fn to_big_int_list(values: &[u64]) -> Vec<U256> {
    values.iter().map(|v| U256::from(*v)).collect()
}

/// Hex-decode calldata blobs. A `0x` prefix is optional and an empty string decodes to no bytes.
pub fn to_bytes_list<S: AsRef<str>>(hex_strings: &[S]) -> Result<Vec<Bytes>, ShuttleError> {
    hex_strings
        .iter()
        .map(|s| {
            let s = s.as_ref();
            hex::decode(s).map(Bytes::from).map_err(|err| ShuttleError::InvalidEncoding {
                value: s.to_string(),
                reason: err.to_string(),
            })
        })
        .collect()
}

/// Argument tuple shared by the proposal store constructor and its append method:
/// `(propId, title, description, targets, values, signatures, calldatas)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalArgs {
    pub prop_id: U256,
    pub title: String,
    pub description: String,
    pub targets: Vec<Address>,
    pub values: Vec<U256>,
    pub signatures: Vec<String>,
    pub calldatas: Vec<Bytes>,
}

impl ProposalArgs {
    /// Convert a proposal's metadata, failing on the first malformed address or calldata.
    pub fn from_proposal(proposal: &LendingMarketProposal) -> Result<Self, ShuttleError> {
        let metadata = &proposal.metadata;
        Ok(Self {
            prop_id: U256::from(metadata.prop_id),
            title: proposal.title.clone(),
            description: proposal.description.clone(),
            targets: to_address_list(&metadata.account)?,
            values: to_big_int_list(&metadata.values),
            signatures: metadata.signatures.clone(),
            calldatas: to_bytes_list(&metadata.calldatas)?,
        })
    }

    /// Render as ABI values in declaration order.
    pub fn to_abi_values(&self) -> Vec<DynSolValue> {
        vec![
            DynSolValue::Uint(self.prop_id, 256),
            DynSolValue::String(self.title.clone()),
            DynSolValue::String(self.description.clone()),
            DynSolValue::Array(self.targets.iter().map(|a| DynSolValue::Address(*a)).collect()),
            DynSolValue::Array(self.values.iter().map(|v| DynSolValue::Uint(*v, 256)).collect()),
            DynSolValue::Array(
                self.signatures.iter().map(|s| DynSolValue::String(s.clone())).collect(),
            ),
            DynSolValue::Array(
                self.calldatas.iter().map(|b| DynSolValue::Bytes(b.to_vec())).collect(),
            ),
        ]
    }
}
