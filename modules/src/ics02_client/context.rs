use crate::ics24_host::identifier::ClientId;
use crate::Height;

/// Read-only view of the light clients hosted on this chain.
///
/// Header verification and consensus state bookkeeping live elsewhere; the packet handlers only
/// ask how far a client has tracked its counterparty.
pub trait ConsensusStateReader {
    /// Returns the height of the latest consensus state stored for `client_id`, if any.
    fn client_consensus_height(&self, client_id: &ClientId) -> Option<Height>;
}
