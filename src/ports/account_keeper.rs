use alloy_primitives::Address;

use crate::domain::{ExecutionContext, PortError};

/// Port for account bookkeeping.
pub trait AccountKeeper {
    /// Current sequence (nonce) of `account`. Unknown accounts report zero.
    fn sequence(&self, ctx: &ExecutionContext, account: Address) -> Result<u64, PortError>;
}

impl<T: AccountKeeper + ?Sized> AccountKeeper for &T {
    fn sequence(&self, ctx: &ExecutionContext, account: Address) -> Result<u64, PortError> {
        (**self).sequence(ctx, account)
    }
}
