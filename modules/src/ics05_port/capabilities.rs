//! A capability is an unforgeable handle that a module receives when it opens a channel end.
//! Presenting it is what entitles the module to send, receive or clean up packets on that end.

use serde_derive::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Capability {
    index: u64,
}

impl Capability {
    pub fn new(index: u64) -> Capability {
        Capability { index }
    }

    pub fn to_be_bytes(&self) -> [u8; 8] {
        self.index.to_be_bytes()
    }

    pub fn from_be_bytes(bytes: &[u8]) -> Option<Capability> {
        let mut buf = [0u8; 8];
        if bytes.len() != buf.len() {
            return None;
        }
        buf.copy_from_slice(bytes);
        Some(Capability::new(u64::from_be_bytes(buf)))
    }
}

impl PartialEq for Capability {
    fn eq(&self, other: &Self) -> bool {
        self.index.ct_eq(&other.index).into()
    }
}

impl Eq for Capability {}

#[cfg(test)]
mod tests {
    use super::Capability;

    #[test]
    fn capability_bytes() {
        let cap = Capability::new(42);
        assert_eq!(Capability::from_be_bytes(&cap.to_be_bytes()), Some(cap));
        assert_eq!(Capability::from_be_bytes(&[1, 2, 3]), None);
        assert_ne!(Capability::new(1), Capability::new(2));
    }
}
