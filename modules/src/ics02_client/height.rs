use std::fmt;

use serde_derive::{Deserialize, Serialize};

/// Block height of a chain. A height of zero is used by packets to mean "no timeout".
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct Height(u64);

impl Height {
    pub fn new(height: u64) -> Self {
        Height(height)
    }

    pub fn zero() -> Self {
        Height(0)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn increment(self) -> Self {
        Height(self.0 + 1)
    }
}

impl From<u64> for Height {
    fn from(height: u64) -> Self {
        Height(height)
    }
}

impl From<Height> for u64 {
    fn from(height: Height) -> u64 {
        height.0
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
