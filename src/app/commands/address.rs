use alloy_primitives::Address;

use crate::domain::compute_address;

/// Relay account and the store address it creates at `nonce`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressReport {
    pub relay_account: Address,
    pub nonce: u64,
    pub store_address: Address,
}

pub fn execute(relay_account: Address, nonce: u64) -> AddressReport {
    AddressReport { relay_account, nonce, store_address: compute_address(relay_account, nonce) }
}
