use crate::ics03_connection::connection::ConnectionEnd;
use crate::ics23_commitment::commitment::CommitmentProof;
use crate::ics24_host::Path;
use crate::Height;

/// Membership proof verification against the counterparty's committed state.
///
/// This is the only cryptographic boundary of the packet handlers: an implementation must never
/// return `true` for a key/value pair that is not part of the state the counterparty committed
/// at `proof_height`. The light client behind `connection_end` decides which root that is.
pub trait ProofVerifier {
    fn verify_membership(
        &self,
        connection_end: &ConnectionEnd,
        proof_height: Height,
        proof: &CommitmentProof,
        path: &Path,
        value: &[u8],
    ) -> bool;
}
