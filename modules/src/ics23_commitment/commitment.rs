use std::fmt;

use serde_derive::{Deserialize, Serialize};

/// Opaque membership proof produced by the counterparty chain and carried by a relayer.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitmentProof(Vec<u8>);

impl CommitmentProof {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for CommitmentProof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommitmentProof({} bytes)", self.0.len())
    }
}

impl From<Vec<u8>> for CommitmentProof {
    fn from(v: Vec<u8>) -> Self {
        Self(v)
    }
}

impl From<CommitmentProof> for Vec<u8> {
    fn from(p: CommitmentProof) -> Vec<u8> {
        p.0
    }
}
