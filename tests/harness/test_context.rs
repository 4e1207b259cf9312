//! Shared testing harness for `govshuttle` integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

const ARTIFACT: &str = include_str!("../fixtures/ProposalStore.json");

/// Isolated directory holding a relay config, the store artifact and proposal files.
pub(crate) struct TestContext {
    root: TempDir,
}

impl TestContext {
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        fs::write(root.path().join("ProposalStore.json"), ARTIFACT)
            .expect("Failed to write artifact");
        Self { root }
    }

    pub(crate) fn root(&self) -> &Path {
        self.root.path()
    }

    /// Write `govshuttle.toml` with `extra` appended after the contract section.
    pub(crate) fn write_config(&self, extra: &str) -> PathBuf {
        let path = self.root().join("govshuttle.toml");
        let content = format!("[contract]\nartifact = \"ProposalStore.json\"\n\n{extra}");
        fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Config that persists the deployment state under `state.json`.
    pub(crate) fn write_persistent_config(&self) -> PathBuf {
        self.write_config("[state]\npath = \"state.json\"\n")
    }

    pub(crate) fn state_path(&self) -> PathBuf {
        self.root().join("state.json")
    }

    pub(crate) fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root().join(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Proposal JSON with two market calls and an unassigned id.
    pub(crate) fn write_proposal(&self, name: &str) -> PathBuf {
        self.write_file(
            name,
            r#"{
  "title": "Onboard markets",
  "description": "Lists two new lending markets",
  "metadata": {
    "prop_id": 0,
    "account": [
      "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
      "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb"
    ],
    "values": [100, 200],
    "signatures": ["_supportMarket(address)", "_setReserveFactor(uint256)"],
    "calldatas": ["0x01", "0x0203"]
  }
}"#,
        )
    }

    /// Command running the compiled binary from the context root.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("govshuttle").expect("Failed to find binary");
        cmd.current_dir(self.root());
        cmd
    }
}
