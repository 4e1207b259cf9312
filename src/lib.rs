//! govshuttle: Relay lending-market governance proposals into an EVM proposal store.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;


use app::AppContext;
use domain::config::ShuttleConfig;
use ports::{AccountKeeper, EvmExecutor, ProposalIdSource};
use services::ConfiguredStateStore;

pub use app::{ProposalRelay, RelayAction, RelayOptions, RelayOutcome};
pub use domain::{
    CallFailure, ConfigError, ContractArtifact, ContractDeploymentState, ErrorKind,
    ExecutionContext, LendingMarketProposal, PortError, ProposalMetadata, ShuttleError,
    compute_address, module_address,
};
pub use ports::{CallResult, DeploymentStateStore};

/// Relay wired to the state store chosen by the configuration.
pub type ConfiguredRelay<G, A, E> = ProposalRelay<G, A, E, ConfiguredStateStore>;

/// Open a relay from a loaded configuration and the chain collaborators.
///
/// The contract artifact is read from `contract.artifact`, and the recorded
/// deployment state from the `[state]` store.
pub fn open_relay<G, A, E>(
    config: &ShuttleConfig,
    governance: G,
    accounts: A,
    evm: E,
) -> Result<ConfiguredRelay<G, A, E>, ShuttleError>
where
    G: ProposalIdSource,
    A: AccountKeeper,
    E: EvmExecutor,
{
    let artifact_path = config
        .contract
        .artifact
        .as_deref()
        .ok_or_else(|| ConfigError::Invalid("contract.artifact is not set".into()))?;
    let artifact = ContractArtifact::load(artifact_path)?;

    let state = ConfiguredStateStore::from_settings(&config.state);
    let ctx = AppContext::new(governance, accounts, evm, state);
    ProposalRelay::new(ctx, artifact, RelayOptions::from_config(config))
}

/// Load the configuration at `path` and open a relay from it.
pub fn open_relay_from_path<G, A, E>(
    path: &std::path::Path,
    governance: G,
    accounts: A,
    evm: E,
) -> Result<ConfiguredRelay<G, A, E>, ShuttleError>
where
    G: ProposalIdSource,
    A: AccountKeeper,
    E: EvmExecutor,
{
    let config = app::config::load_config(path)?;
    open_relay(&config, governance, accounts, evm)
}
