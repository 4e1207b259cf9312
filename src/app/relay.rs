//! Relays lending-market proposals into the proposal store contract.
//!
//! The first proposal deploys the store with that proposal as constructor input. Every later
//! proposal is appended to the deployed store. Which of the two happens is decided by the
//! recorded deployment state and, when nothing is recorded, by the relay account sequence.

use alloy_primitives::Address;
use tracing::{debug, info, info_span, warn};

use crate::app::AppContext;
use crate::domain::config::ShuttleConfig;
use crate::domain::deployment::{self, DeploymentPlan};
use crate::domain::{
    CallFailure, ContractArtifact, ContractDeploymentState, ExecutionContext,
    LendingMarketProposal, ProposalArgs, ShuttleError, build_deployment_payload, is_first_use,
};
use crate::ports::{AccountKeeper, DeploymentStateStore, EvmExecutor, ProposalIdSource};

/// Relay settings derived from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayOptions {
    /// Sender of every deployment and append call.
    pub relay_account: Address,
    /// Proposal store method receiving appended proposals.
    pub append_method: String,
    /// Recover the store address from the sequence when no deployment is recorded.
    pub sequence_fallback: bool,
}

impl RelayOptions {
    pub fn from_config(config: &ShuttleConfig) -> Self {
        Self {
            relay_account: config.relay.relay_account(),
            append_method: config.relay.append_method.clone(),
            sequence_fallback: config.relay.sequence_fallback,
        }
    }
}

impl Default for RelayOptions {
    fn default() -> Self {
        Self::from_config(&ShuttleConfig::default())
    }
}

/// Which terminal state a relay reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayAction {
    /// The store was created at `address` with the proposal as constructor input.
    Deployed { address: Address },
    /// The proposal was appended to the store at `address`.
    Appended { address: Address },
}

impl RelayAction {
    pub fn address(&self) -> Address {
        match self {
            RelayAction::Deployed { address } | RelayAction::Appended { address } => *address,
        }
    }
}

/// Result of a successful relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayOutcome {
    /// The relayed proposal with its id assigned.
    pub proposal: LendingMarketProposal,
    pub action: RelayAction,
}

/// Relays proposals one at a time; `&mut self` keeps relays from interleaving.
pub struct ProposalRelay<G, A, E, S>
where
    G: ProposalIdSource,
    A: AccountKeeper,
    E: EvmExecutor,
    S: DeploymentStateStore,
{
    ctx: AppContext<G, A, E, S>,
    artifact: ContractArtifact,
    options: RelayOptions,
    deployment: ContractDeploymentState,
    /// `deployment` is ahead of the store and must be saved before the next relay.
    unsaved: bool,
}

impl<G, A, E, S> ProposalRelay<G, A, E, S>
where
    G: ProposalIdSource,
    A: AccountKeeper,
    E: EvmExecutor,
    S: DeploymentStateStore,
{
    /// Build a relay, loading the recorded deployment state.
    ///
    /// Fails when the artifact lacks a constructor or the append method.
    pub fn new(
        ctx: AppContext<G, A, E, S>,
        artifact: ContractArtifact,
        options: RelayOptions,
    ) -> Result<Self, ShuttleError> {
        if artifact.abi().constructor().is_none() {
            return Err(ShuttleError::Artifact("contract ABI has no constructor".into()));
        }
        if !artifact.has_method(&options.append_method) {
            return Err(ShuttleError::Artifact(format!(
                "contract ABI has no method '{}'",
                options.append_method
            )));
        }
        let deployment = ctx.state().load().map_err(ShuttleError::StatePersistence)?;
        debug!(?deployment, relay_account = %options.relay_account, "Loaded deployment state");
        Ok(Self { ctx, artifact, options, deployment, unsaved: false })
    }

    pub fn context(&self) -> &AppContext<G, A, E, S> {
        &self.ctx
    }

    pub fn relay_account(&self) -> Address {
        self.options.relay_account
    }

    pub fn deployment_state(&self) -> ContractDeploymentState {
        self.deployment
    }

    /// Whether the cached deployment state still has to reach the store.
    pub fn has_unsaved_state(&self) -> bool {
        self.unsaved
    }

    /// Address of the deployed proposal store, once known.
    pub fn store_address(&self) -> Option<Address> {
        self.deployment.address()
    }

    /// Relay a proposal and return it with its id assigned.
    pub fn relay_lending_market_proposal(
        &mut self,
        ctx: &ExecutionContext,
        proposal: LendingMarketProposal,
    ) -> Result<LendingMarketProposal, ShuttleError> {
        self.relay(ctx, proposal).map(|outcome| outcome.proposal)
    }

    /// Relay a proposal, reporting whether the store was deployed or appended to.
    ///
    /// Nothing is recorded unless the EVM call succeeded. A store address whose save failed
    /// stays cached, and the save is retried before the next relay calls any collaborator.
    pub fn relay(
        &mut self,
        ctx: &ExecutionContext,
        mut proposal: LendingMarketProposal,
    ) -> Result<RelayOutcome, ShuttleError> {
        let span = info_span!(
            "relay_proposal",
            chain_id = %ctx.chain_id,
            height = ctx.block_height,
            prop_id = proposal.prop_id()
        );
        let _guard = span.enter();

        self.save_pending()?;

        if !proposal.is_assigned() {
            let id = self
                .ctx
                .governance()
                .next_proposal_id(ctx)
                .map_err(ShuttleError::IdentifierResolutionFailed)?;
            debug!(prop_id = id, "Assigned proposal id");
            proposal.metadata.prop_id = id;
        }

        let relay_account = self.options.relay_account;
        let sequence = self
            .ctx
            .accounts()
            .sequence(ctx, relay_account)
            .map_err(|source| ShuttleError::SequenceReadFailed { account: relay_account, source })?;

        if !proposal.metadata.lists_aligned() {
            warn!(
                prop_id = proposal.prop_id(),
                accounts = proposal.metadata.account.len(),
                values = proposal.metadata.values.len(),
                signatures = proposal.metadata.signatures.len(),
                calldatas = proposal.metadata.calldatas.len(),
                "Proposal metadata lists differ in length"
            );
        }
        let args = ProposalArgs::from_proposal(&proposal)?;

        let plan = deployment::plan(
            self.deployment,
            relay_account,
            sequence,
            self.options.sequence_fallback,
        );
        let action = match plan {
            DeploymentPlan::Deploy { address } => {
                self.deploy(ctx, &args, address)?;
                RelayAction::Deployed { address }
            }
            DeploymentPlan::Append { address } => {
                if is_first_use(sequence) {
                    warn!(%address, "Relay account sequence is zero but a store is recorded");
                }
                self.append(ctx, &args, address)?;
                RelayAction::Appended { address }
            }
            DeploymentPlan::Recover { address } => {
                warn!(
                    %address,
                    sequence, "No deployment recorded; using the store created at nonce zero"
                );
                self.append(ctx, &args, address)?;
                self.record(address)?;
                RelayAction::Appended { address }
            }
            DeploymentPlan::Missing => {
                return Err(ShuttleError::DeploymentStateMissing { sequence });
            }
        };

        Ok(RelayOutcome { proposal, action })
    }

    fn deploy(
        &mut self,
        ctx: &ExecutionContext,
        args: &ProposalArgs,
        address: Address,
    ) -> Result<(), ShuttleError> {
        let encoded = self.artifact.encode_constructor(&args.to_abi_values());
        let payload = build_deployment_payload(self.artifact.bytecode(), encoded)
            .map_err(|err| ShuttleError::DeploymentFailed(abi_failure(err)))?;
        debug!(bytes = payload.len(), "Built deployment payload");

        let result = self
            .ctx
            .evm()
            .call_with_raw_data(ctx, self.options.relay_account, None, &payload, true)
            .map_err(|err| ShuttleError::DeploymentFailed(CallFailure::Execution(err)))?;

        self.record(address)?;
        info!(%address, gas_used = result.gas_used, "Deployed proposal store");
        Ok(())
    }

    fn append(
        &self,
        ctx: &ExecutionContext,
        args: &ProposalArgs,
        address: Address,
    ) -> Result<(), ShuttleError> {
        let method = self.options.append_method.as_str();
        let values = args.to_abi_values();
        // ABI mismatches fail here, before the EVM call.
        let calldata = self
            .artifact
            .encode_call(method, &values)
            .map_err(|err| ShuttleError::AppendFailed { address, source: abi_failure(err) })?;
        debug!(method, bytes = calldata.len(), "Encoded append call");

        let result = self
            .ctx
            .evm()
            .call_with_abi(
                ctx,
                self.artifact.abi(),
                self.options.relay_account,
                address,
                true,
                method,
                &values,
            )
            .map_err(|err| ShuttleError::AppendFailed {
                address,
                source: CallFailure::Execution(err),
            })?;

        info!(%address, prop_id = %args.prop_id, gas_used = result.gas_used, "Appended proposal");
        Ok(())
    }

    fn record(&mut self, address: Address) -> Result<(), ShuttleError> {
        self.deployment = ContractDeploymentState::Deployed(address);
        self.unsaved = true;
        self.save_pending()
    }

    fn save_pending(&mut self) -> Result<(), ShuttleError> {
        if !self.unsaved {
            return Ok(());
        }
        if let Err(err) = self.ctx.state().save(self.deployment) {
            warn!(state = ?self.deployment, error = %err, "Deployment state not saved");
            return Err(ShuttleError::StatePersistence(err));
        }
        self.unsaved = false;
        Ok(())
    }
}

fn abi_failure(err: ShuttleError) -> CallFailure {
    match err {
        ShuttleError::AbiEncoding(message) => CallFailure::Abi(message),
        other => CallFailure::Abi(other.to_string()),
    }
}
