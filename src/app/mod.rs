pub mod cli;
pub mod commands;
pub mod config;
mod context;
pub mod relay;

pub use context::AppContext;
pub use relay::{ProposalRelay, RelayAction, RelayOptions, RelayOutcome};
