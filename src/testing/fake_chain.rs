use std::collections::HashMap;
use std::sync::Mutex;

use alloy_dyn_abi::{DynSolValue, JsonAbiExt};
use alloy_json_abi::JsonAbi;
use alloy_primitives::{Address, Bytes};

use crate::domain::{ExecutionContext, PortError};
use crate::ports::{AccountKeeper, CallResult, EvmExecutor};

/// A call the fake EVM received.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    Abi {
        sender: Address,
        recipient: Address,
        commit: bool,
        method: String,
        args: Vec<DynSolValue>,
        calldata: Vec<u8>,
    },
    Raw {
        sender: Address,
        recipient: Option<Address>,
        data: Vec<u8>,
        commit: bool,
    },
}

/// Account keeper and EVM sharing one nonce table.
///
/// Every committed call bumps the sender's sequence, the way the EVM module does.
#[derive(Debug, Default)]
pub struct FakeChain {
    sequences: Mutex<HashMap<Address, u64>>,
    calls: Mutex<Vec<RecordedCall>>,
    sequence_reads: Mutex<usize>,
    sequence_failure: Mutex<Option<String>>,
    evm_failure: Mutex<Option<String>>,
}

impl FakeChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_sequence(&self, account: Address, sequence: u64) {
        self.sequences.lock().unwrap().insert(account, sequence);
    }

    pub fn fail_sequence_reads(&self, message: &str) {
        *self.sequence_failure.lock().unwrap() = Some(message.to_string());
    }

    pub fn fail_evm_calls(&self, message: &str) {
        *self.evm_failure.lock().unwrap() = Some(message.to_string());
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn sequence_reads(&self) -> usize {
        *self.sequence_reads.lock().unwrap()
    }

    fn current(&self, account: Address) -> u64 {
        self.sequences.lock().unwrap().get(&account).copied().unwrap_or(0)
    }

    fn execute(&self, sender: Address, commit: bool, call: RecordedCall) -> Result<(), PortError> {
        if let Some(message) = self.evm_failure.lock().unwrap().clone() {
            return Err(PortError::new(message));
        }
        self.calls.lock().unwrap().push(call);
        if commit {
            *self.sequences.lock().unwrap().entry(sender).or_insert(0) += 1;
        }
        Ok(())
    }
}

impl AccountKeeper for FakeChain {
    fn sequence(&self, _ctx: &ExecutionContext, account: Address) -> Result<u64, PortError> {
        *self.sequence_reads.lock().unwrap() += 1;
        if let Some(message) = self.sequence_failure.lock().unwrap().clone() {
            return Err(PortError::new(message));
        }
        Ok(self.current(account))
    }
}

impl EvmExecutor for FakeChain {
    fn call_with_abi(
        &self,
        _ctx: &ExecutionContext,
        abi: &JsonAbi,
        sender: Address,
        recipient: Address,
        commit: bool,
        method: &str,
        args: &[DynSolValue],
    ) -> Result<CallResult, PortError> {
        let function = abi
            .function(method)
            .and_then(|overloads| overloads.iter().find(|f| f.inputs.len() == args.len()))
            .ok_or_else(|| PortError::new(format!("method '{method}' not found")))?;
        let calldata =
            function.abi_encode_input(args).map_err(|err| PortError::new(err.to_string()))?;
        self.execute(
            sender,
            commit,
            RecordedCall::Abi {
                sender,
                recipient,
                commit,
                method: method.to_string(),
                args: args.to_vec(),
                calldata,
            },
        )?;
        Ok(CallResult { ret: Bytes::new(), gas_used: 21_000 })
    }

    fn call_with_raw_data(
        &self,
        _ctx: &ExecutionContext,
        sender: Address,
        recipient: Option<Address>,
        data: &[u8],
        commit: bool,
    ) -> Result<CallResult, PortError> {
        self.execute(
            sender,
            commit,
            RecordedCall::Raw { sender, recipient, data: data.to_vec(), commit },
        )?;
        Ok(CallResult { ret: Bytes::new(), gas_used: 53_000 })
    }
}
