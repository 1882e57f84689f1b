use std::collections::BTreeMap;

use crate::ics03_connection::connection::ConnectionEnd;
use crate::ics23_commitment::commitment::CommitmentProof;
use crate::ics23_commitment::verifier::ProofVerifier;
use crate::ics24_host::store::{MemoryStore, Store};
use crate::ics24_host::Path;
use crate::Height;

/// Stands in for a light client: remembers the counterparty store as it was committed at each
/// height and accepts any non-empty proof for a key/value pair present in that snapshot.
#[derive(Clone, Debug, Default)]
pub struct MockProofVerifier {
    committed: BTreeMap<Height, MemoryStore>,
}

impl MockProofVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `state` as the counterparty state committed at `height`.
    pub fn commit(&mut self, height: Height, state: MemoryStore) {
        self.committed.insert(height, state);
    }
}

impl ProofVerifier for MockProofVerifier {
    fn verify_membership(
        &self,
        _connection_end: &ConnectionEnd,
        proof_height: Height,
        proof: &CommitmentProof,
        path: &Path,
        value: &[u8],
    ) -> bool {
        if proof.is_empty() {
            return false;
        }

        self.committed
            .get(&proof_height)
            .and_then(|state| state.get(path))
            .map_or(false, |stored| stored == value)
    }
}
