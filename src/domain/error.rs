use std::io;

use alloy_primitives::Address;
use thiserror::Error;

use crate::domain::config::ConfigError;

/// Failure reported by an external collaborator (governance, account keeper, EVM, state store).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PortError {
    message: String,
}

impl PortError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Why a deployment or append call did not go through.
#[derive(Debug, Error)]
pub enum CallFailure {
    /// Arguments could not be packed against the contract ABI.
    #[error("ABI encoding failed: {0}")]
    Abi(String),

    /// The EVM collaborator rejected or reverted the call.
    #[error("EVM call failed: {0}")]
    Execution(#[from] PortError),
}

/// Coarse grouping of [`ShuttleError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A collaborator could not be read from.
    Collaborator,
    /// Proposal metadata is malformed.
    InvalidInput,
    /// The contract call itself failed.
    Execution,
    /// Configuration, artifact or local IO problem.
    Environment,
}

/// Library-wide error type for govshuttle operations.
#[derive(Debug, Error)]
pub enum ShuttleError {
    /// The governance subsystem could not hand out a proposal id.
    #[error("Error obtaining proposal id: {0}")]
    IdentifierResolutionFailed(#[source] PortError),

    /// The relay account sequence could not be read.
    #[error("Error obtaining sequence for relay account {account}: {source}")]
    SequenceReadFailed {
        account: Address,
        #[source]
        source: PortError,
    },

    /// A target account is not a valid hex address.
    #[error("Invalid address '{value}': {reason}")]
    InvalidAddress { value: String, reason: String },

    /// A calldata entry is not valid hex.
    #[error("Invalid hex encoding '{value}': {reason}")]
    InvalidEncoding { value: String, reason: String },

    /// Arguments could not be packed against the contract ABI.
    #[error("ABI encoding failed: {0}")]
    AbiEncoding(String),

    /// Deploying the proposal store contract failed.
    #[error("Proposal store deployment failed: {0}")]
    DeploymentFailed(#[source] CallFailure),

    /// Appending to the deployed proposal store failed.
    #[error("Append to proposal store {address} failed: {source}")]
    AppendFailed {
        address: Address,
        #[source]
        source: CallFailure,
    },

    /// No deployment is recorded and the sequence fallback is disabled.
    #[error(
        "Relay account sequence is {sequence} but no proposal store deployment is recorded"
    )]
    DeploymentStateMissing { sequence: u64 },

    /// Deployment state could not be loaded or saved.
    #[error("Deployment state store error: {0}")]
    StatePersistence(#[source] PortError),

    /// Contract artifact is unreadable or incomplete.
    #[error("Invalid contract artifact: {0}")]
    Artifact(String),

    /// Configuration issue.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ShuttleError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShuttleError::IdentifierResolutionFailed(_)
            | ShuttleError::SequenceReadFailed { .. }
            | ShuttleError::StatePersistence(_) => ErrorKind::Collaborator,
            ShuttleError::InvalidAddress { .. }
            | ShuttleError::InvalidEncoding { .. }
            | ShuttleError::AbiEncoding(_) => ErrorKind::InvalidInput,
            ShuttleError::DeploymentFailed(_)
            | ShuttleError::AppendFailed { .. }
            | ShuttleError::DeploymentStateMissing { .. } => ErrorKind::Execution,
            ShuttleError::Artifact(_)
            | ShuttleError::Config(_)
            | ShuttleError::Io(_)
            | ShuttleError::Json(_) => ErrorKind::Environment,
        }
    }
}
