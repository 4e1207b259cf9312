mod error;
pub mod parse;
mod shuttle;

pub use error::ConfigError;
pub use parse::parse_config_content;
pub use shuttle::{ContractSettings, RelaySettings, ShuttleConfig, StateSettings};
