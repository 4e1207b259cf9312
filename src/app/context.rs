use crate::ports::{AccountKeeper, DeploymentStateStore, EvmExecutor, ProposalIdSource};

/// Collaborators the relay runs against.
pub struct AppContext<G, A, E, S>
where
    G: ProposalIdSource,
    A: AccountKeeper,
    E: EvmExecutor,
    S: DeploymentStateStore,
{
    governance: G,
    accounts: A,
    evm: E,
    state: S,
}

impl<G, A, E, S> AppContext<G, A, E, S>
where
    G: ProposalIdSource,
    A: AccountKeeper,
    E: EvmExecutor,
    S: DeploymentStateStore,
{
    pub fn new(governance: G, accounts: A, evm: E, state: S) -> Self {
        Self { governance, accounts, evm, state }
    }

    /// Governance proposal-id sequence.
    pub fn governance(&self) -> &G {
        &self.governance
    }

    /// Account keeper holding the relay sequence.
    pub fn accounts(&self) -> &A {
        &self.accounts
    }

    /// Embedded EVM.
    pub fn evm(&self) -> &E {
        &self.evm
    }

    /// Deployment state persistence.
    pub fn state(&self) -> &S {
        &self.state
    }
}
