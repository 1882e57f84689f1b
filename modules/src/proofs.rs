use serde_derive::{Deserialize, Serialize};

use crate::ics23_commitment::commitment::CommitmentProof;
use crate::Height;

/// Structure comprising a membership proof together with the counterparty height it refers to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proofs {
    object_proof: CommitmentProof,
    /// Height for the above proof
    height: Height,
}

impl Proofs {
    pub fn new(object_proof: CommitmentProof, height: Height) -> Result<Self, String> {
        if height.is_zero() {
            return Err("Proofs height cannot be zero".to_string());
        }

        if object_proof.is_empty() {
            return Err("Proof cannot be empty".to_string());
        }

        Ok(Self {
            object_proof,
            height,
        })
    }

    /// Getter for the object-specific proof (e.g., proof for a packet commitment).
    pub fn object_proof(&self) -> &CommitmentProof {
        &self.object_proof
    }

    /// Getter for the height field.
    pub fn height(&self) -> Height {
        self.height
    }
}
