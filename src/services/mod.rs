pub mod adapters;

pub use adapters::configured_state_store::ConfiguredStateStore;
pub use adapters::deployment_state_filesystem::FilesystemDeploymentStateStore;
pub use adapters::memory_deployment_state_store::MemoryDeploymentStateStore;
