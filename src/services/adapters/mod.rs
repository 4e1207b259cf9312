pub mod configured_state_store;
pub mod deployment_state_filesystem;
pub mod memory_deployment_state_store;
