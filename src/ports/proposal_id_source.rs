use crate::domain::{ExecutionContext, PortError};

/// Port for the governance subsystem's proposal-id sequence.
pub trait ProposalIdSource {
    /// Next unused proposal id.
    fn next_proposal_id(&self, ctx: &ExecutionContext) -> Result<u64, PortError>;
}

impl<T: ProposalIdSource + ?Sized> ProposalIdSource for &T {
    fn next_proposal_id(&self, ctx: &ExecutionContext) -> Result<u64, PortError> {
        (**self).next_proposal_id(ctx)
    }
}
