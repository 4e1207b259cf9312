//! CLI Adapter.

use std::fs;
use std::path::{Path, PathBuf};

use alloy_primitives::{Address, hex};
use clap::{Parser, Subcommand};

use crate::app::commands::encode::EncodeTarget;
use crate::app::commands::{address, encode};
use crate::app::config::load_config;
use crate::domain::config::ShuttleConfig;
use crate::domain::{ConfigError, ContractArtifact, LendingMarketProposal, ShuttleError};

const MISSING_ARTIFACT: &str =
    "no contract artifact given; pass --artifact or set contract.artifact";

#[derive(Parser)]
#[command(name = "govshuttle")]
#[command(version)]
#[command(
    about = "Inspect and encode lending-market proposal relays without a running chain",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the relay account and the proposal store address it creates
    #[clap(visible_alias = "a")]
    Address {
        /// Relay configuration (govshuttle.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Module name the relay account is derived from
        #[arg(short, long, conflicts_with = "account")]
        module: Option<String>,
        /// Explicit relay account
        #[arg(long)]
        account: Option<Address>,
        /// Relay account nonce at deployment
        #[arg(short, long, default_value_t = 0)]
        nonce: u64,
    },
    /// Encode a proposal JSON into a deployment payload or append calldata
    #[clap(visible_alias = "e")]
    Encode {
        /// Proposal JSON file
        proposal: PathBuf,
        /// Relay configuration (govshuttle.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Compiled proposal store artifact; overrides the config
        #[arg(long)]
        artifact: Option<PathBuf>,
        /// Produce append calldata instead of the deployment payload
        #[arg(long)]
        append: bool,
        /// Proposal id to encode when the file leaves it unassigned
        #[arg(long)]
        prop_id: Option<u64>,
    },
}

pub fn run() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Address { config, module, account, nonce } => {
            run_address(config.as_deref(), module, account, nonce)
        }
        Commands::Encode { proposal, config, artifact, append, prop_id } => {
            run_encode(&proposal, config.as_deref(), artifact, append, prop_id)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_optional_config(path: Option<&Path>) -> Result<ShuttleConfig, ShuttleError> {
    match path {
        Some(path) => Ok(load_config(path)?),
        None => Ok(ShuttleConfig::default()),
    }
}

fn run_address(
    config: Option<&Path>,
    module: Option<String>,
    account: Option<Address>,
    nonce: u64,
) -> Result<(), ShuttleError> {
    let mut config = load_optional_config(config)?;
    if let Some(module) = module {
        config.relay.module_name = module;
        config.relay.address = None;
    }
    if account.is_some() {
        config.relay.address = account;
    }
    config.validate()?;

    let report = address::execute(config.relay.relay_account(), nonce);
    println!("relay account: {}", report.relay_account);
    println!("store address (nonce {}): {}", report.nonce, report.store_address);
    Ok(())
}

fn run_encode(
    proposal_path: &Path,
    config: Option<&Path>,
    artifact: Option<PathBuf>,
    append: bool,
    prop_id: Option<u64>,
) -> Result<(), ShuttleError> {
    let config = load_optional_config(config)?;
    let artifact_path = artifact
        .or(config.contract.artifact.clone())
        .ok_or_else(|| ConfigError::Invalid(MISSING_ARTIFACT.into()))?;
    let artifact = ContractArtifact::load(&artifact_path)?;

    let content = fs::read_to_string(proposal_path)?;
    let mut proposal: LendingMarketProposal = serde_json::from_str(&content)?;
    if let Some(id) = prop_id {
        proposal.metadata.prop_id = id;
    }

    let target = if append {
        EncodeTarget::Append { method: config.relay.append_method.clone() }
    } else {
        EncodeTarget::Deployment
    };
    let payload = encode::execute(&artifact, &proposal, &target)?;
    println!("{}", hex::encode_prefixed(payload));
    Ok(())
}
