//! Packet commitments. A commitment is the record a sending chain keeps for every packet it has
//! sent and not yet cleaned up. It currently holds the raw packet data; all comparisons go
//! through [`commitment_matches`] so a digest can replace the raw bytes in one place.

use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct PacketCommitment(Vec<u8>);

impl PacketCommitment {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl fmt::Debug for PacketCommitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PacketCommitment({} bytes)", self.0.len())
    }
}

impl From<Vec<u8>> for PacketCommitment {
    fn from(bytes: Vec<u8>) -> Self {
        PacketCommitment(bytes)
    }
}

pub fn compute_packet_commitment(data: &[u8]) -> PacketCommitment {
    PacketCommitment(data.to_vec())
}

/// Whether `commitment` was computed from exactly `data`.
pub fn commitment_matches(commitment: &PacketCommitment, data: &[u8]) -> bool {
    compute_packet_commitment(data) == *commitment
}

#[cfg(test)]
mod tests {
    use super::{commitment_matches, compute_packet_commitment};

    #[test]
    fn commitment_equality_is_byte_exact() {
        let commitment = compute_packet_commitment(b"hello");
        assert!(commitment_matches(&commitment, b"hello"));
        assert!(!commitment_matches(&commitment, b"hellp"));
        assert!(!commitment_matches(&commitment, b"hello "));
        assert!(!commitment_matches(&commitment, b""));
    }
}
