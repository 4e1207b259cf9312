//! In-process stand-ins for the chain collaborators.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use alloy_dyn_abi::{DynSolValue, JsonAbiExt};
use alloy_json_abi::JsonAbi;
use alloy_primitives::{Address, Bytes};
use govshuttle::ports::{AccountKeeper, EvmExecutor, ProposalIdSource};
use govshuttle::{CallResult, ExecutionContext, PortError};

/// Governance module handing out sequential proposal ids.
pub(crate) struct Governance {
    next: Cell<u64>,
}

impl Governance {
    pub(crate) fn starting_at(id: u64) -> Self {
        Self { next: Cell::new(id) }
    }
}

impl ProposalIdSource for Governance {
    fn next_proposal_id(&self, _ctx: &ExecutionContext) -> Result<u64, PortError> {
        let id = self.next.get();
        self.next.set(id + 1);
        Ok(id)
    }
}

/// Submitted EVM transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Transaction {
    pub(crate) sender: Address,
    pub(crate) recipient: Option<Address>,
    pub(crate) data: Vec<u8>,
}

/// Account nonces plus an EVM that records every committed transaction.
#[derive(Default)]
pub(crate) struct Chain {
    nonces: RefCell<HashMap<Address, u64>>,
    transactions: RefCell<Vec<Transaction>>,
}

impl Chain {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set_nonce(&self, account: Address, nonce: u64) {
        self.nonces.borrow_mut().insert(account, nonce);
    }

    pub(crate) fn nonce(&self, account: Address) -> u64 {
        self.nonces.borrow().get(&account).copied().unwrap_or(0)
    }

    pub(crate) fn transactions(&self) -> Vec<Transaction> {
        self.transactions.borrow().clone()
    }

    fn submit(&self, sender: Address, recipient: Option<Address>, data: Vec<u8>, commit: bool) {
        if commit {
            *self.nonces.borrow_mut().entry(sender).or_insert(0) += 1;
            self.transactions.borrow_mut().push(Transaction { sender, recipient, data });
        }
    }
}

impl AccountKeeper for Chain {
    fn sequence(&self, _ctx: &ExecutionContext, account: Address) -> Result<u64, PortError> {
        Ok(self.nonce(account))
    }
}

impl EvmExecutor for Chain {
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
            .ok_or_else(|| PortError::new(format!("no method {method}")))?;
        let data = function.abi_encode_input(args).map_err(|e| PortError::new(e.to_string()))?;
        self.submit(sender, Some(recipient), data, commit);
        Ok(CallResult { ret: Bytes::new(), gas_used: 0 })
    }

    fn call_with_raw_data(
        &self,
        _ctx: &ExecutionContext,
        sender: Address,
        recipient: Option<Address>,
        data: &[u8],
        commit: bool,
    ) -> Result<CallResult, PortError> {
        self.submit(sender, recipient, data.to_vec(), commit);
        Ok(CallResult { ret: Bytes::new(), gas_used: 0 })
    }
}
