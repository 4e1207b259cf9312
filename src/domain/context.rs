/// Block-level context a relay runs in, forwarded to every collaborator call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionContext {
    pub chain_id: String,
    pub block_height: u64,
}

impl ExecutionContext {
    pub fn new(chain_id: impl Into<String>, block_height: u64) -> Self {
        Self { chain_id: chain_id.into(), block_height }
    }
}
