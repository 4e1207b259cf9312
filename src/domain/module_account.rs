//! Module account addressing.

use alloy_primitives::Address;
use sha2::{Digest, Sha256};

/// Module name the relay account is derived from unless configured otherwise.
pub const DEFAULT_MODULE_NAME: &str = "govshuttle";

/// Address of a chain module account: the first 20 bytes of `sha256(name)`.
pub fn module_address(name: &str) -> Address {
    let digest = Sha256::digest(name.as_bytes());
    Address::from_slice(&digest[..20])
}
