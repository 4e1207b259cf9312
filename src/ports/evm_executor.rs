//! EVM execution port definition.

use alloy_dyn_abi::DynSolValue;
use alloy_json_abi::JsonAbi;
use alloy_primitives::{Address, Bytes};

use crate::domain::{ExecutionContext, PortError};

/// Outcome of an EVM call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallResult {
    /// Return data, or the created contract's runtime code for deployments.
    pub ret: Bytes,
    pub gas_used: u64,
}

/// Port for the embedded EVM.
pub trait EvmExecutor {
    /// Call `method` on `recipient`, packing `args` against `abi`.
    #[allow(clippy::too_many_arguments)]
    fn call_with_abi(
        &self,
        ctx: &ExecutionContext,
        abi: &JsonAbi,
        sender: Address,
        recipient: Address,
        commit: bool,
        method: &str,
        args: &[DynSolValue],
    ) -> Result<CallResult, PortError>;

    /// Send raw calldata. A `None` recipient creates a contract from `data`.
    fn call_with_raw_data(
        &self,
        ctx: &ExecutionContext,
        sender: Address,
        recipient: Option<Address>,
        data: &[u8],
        commit: bool,
    ) -> Result<CallResult, PortError>;
}

impl<T: EvmExecutor + ?Sized> EvmExecutor for &T {
    fn call_with_abi(
        &self,
        ctx: &ExecutionContext,
        abi: &JsonAbi,
        sender: Address,
        recipient: Address,
        commit: bool,
        method: &str,
        args: &[DynSolValue],
    ) -> Result<CallResult, PortError> {
        (**self).call_with_abi(ctx, abi, sender, recipient, commit, method, args)
    }

    fn call_with_raw_data(
        &self,
        ctx: &ExecutionContext,
        sender: Address,
        recipient: Option<Address>,
        data: &[u8],
        commit: bool,
    ) -> Result<CallResult, PortError> {
        (**self).call_with_raw_data(ctx, sender, recipient, data, commit)
    }
}
