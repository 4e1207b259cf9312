//! Compiled proposal store contract: ABI plus init code.

use std::fs;
use std::path::Path;

use alloy_dyn_abi::{DynSolValue, JsonAbiExt};
use alloy_json_abi::JsonAbi;
use alloy_primitives::{Bytes, hex};
use serde::Deserialize;

use crate::domain::ShuttleError;

/// ABI and bytecode of the contract the relay deploys and appends to.
#[derive(Debug, Clone)]
pub struct ContractArtifact {
    abi: JsonAbi,
    bytecode: Bytes,
}

#[derive(Deserialize)]
struct RawArtifact {
    abi: RawAbi,
    #[serde(alias = "bytecode")]
    bin: String,
}

/// Compiled-contract files store the ABI either inline or as a JSON-encoded string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAbi {
    Inline(JsonAbi),
    Encoded(String),
}

impl ContractArtifact {
    pub fn new(abi: JsonAbi, bytecode: Bytes) -> Self {
        Self { abi, bytecode }
    }

    /// Parse a `{ "abi": ..., "bin": "<hex>" }` document.
    pub fn from_json_str(content: &str) -> Result<Self, ShuttleError> {
        let raw: RawArtifact = serde_json::from_str(content)?;
        let abi = match raw.abi {
            RawAbi::Inline(abi) => abi,
            RawAbi::Encoded(encoded) => serde_json::from_str(&encoded)?,
        };
        let bytecode = hex::decode(raw.bin.trim())
            .map_err(|err| ShuttleError::Artifact(format!("bytecode is not valid hex: {err}")))?;
        if bytecode.is_empty() {
            return Err(ShuttleError::Artifact("bytecode is empty".into()));
        }
        Ok(Self { abi, bytecode: Bytes::from(bytecode) })
    }

    pub fn load(path: &Path) -> Result<Self, ShuttleError> {
        let content = fs::read_to_string(path).map_err(|err| {
            ShuttleError::Artifact(format!("Failed to read {}: {}", path.display(), err))
        })?;
        Self::from_json_str(&content)
    }

    pub fn abi(&self) -> &JsonAbi {
        &self.abi
    }

    pub fn bytecode(&self) -> &Bytes {
        &self.bytecode
    }

    /// ABI-encode constructor arguments (no selector).
    pub fn encode_constructor(&self, args: &[DynSolValue]) -> Result<Vec<u8>, ShuttleError> {
        let constructor = self
            .abi
            .constructor()
            .ok_or_else(|| ShuttleError::AbiEncoding("contract ABI has no constructor".into()))?;
        constructor.abi_encode_input(args).map_err(|err| ShuttleError::AbiEncoding(err.to_string()))
    }

    /// ABI-encode a call to `method`, selector included.
    ///
    /// Overloads are resolved by argument count.
    pub fn encode_call(&self, method: &str, args: &[DynSolValue]) -> Result<Vec<u8>, ShuttleError> {
        let function = self
            .abi
            .function(method)
            .and_then(|overloads| overloads.iter().find(|f| f.inputs.len() == args.len()))
            .ok_or_else(|| {
                ShuttleError::AbiEncoding(format!(
                    "contract ABI has no method '{method}' taking {} arguments",
                    args.len()
                ))
            })?;
        function.abi_encode_input(args).map_err(|err| ShuttleError::AbiEncoding(err.to_string()))
    }

    /// Whether the ABI declares `method`.
    pub fn has_method(&self, method: &str) -> bool {
        self.abi.function(method).is_some_and(|overloads| !overloads.is_empty())
    }
}
