use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::{ContractDeploymentState, PortError};
use crate::ports::DeploymentStateStore;

/// Deployment state kept as a JSON file next to the chain data.
#[derive(Debug, Clone)]
pub struct FilesystemDeploymentStateStore {
    path: PathBuf,
}

impl FilesystemDeploymentStateStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl DeploymentStateStore for FilesystemDeploymentStateStore {
    fn load(&self) -> Result<ContractDeploymentState, PortError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(ContractDeploymentState::NotDeployed);
            }
            Err(err) => {
                return Err(PortError::new(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    err
                )));
            }
        };
        serde_json::from_str(&content).map_err(|err| {
            PortError::new(format!("Malformed deployment state {}: {}", self.path.display(), err))
        })
    }

    fn save(&self, state: ContractDeploymentState) -> Result<(), PortError> {
        let write = || -> io::Result<()> {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(&state)?;
            let staging = self.staging_path();
            fs::write(&staging, format!("{content}\n"))?;
            fs::rename(&staging, &self.path)
        };
        write().map_err(|err| {
            PortError::new(format!("Failed to write {}: {}", self.path.display(), err))
        })
    }
}
