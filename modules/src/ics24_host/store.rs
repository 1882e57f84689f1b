//! Key-value storage a host chain provides to the IBC handlers. Keys are ICS 24 paths.

use std::collections::BTreeMap;

use crate::ics24_host::Path;

/// Minimal get/set/delete store over canonical paths.
pub trait Store {
    fn get(&self, path: &Path) -> Option<Vec<u8>>;

    fn set(&mut self, path: &Path, value: Vec<u8>);

    fn delete(&mut self, path: &Path);

    fn contains(&self, path: &Path) -> bool {
        self.get(path).is_some()
    }
}

/// An in-memory store, ordered by the string form of the path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn get(&self, path: &Path) -> Option<Vec<u8>> {
        self.entries.get(&path.to_string()).cloned()
    }

    fn set(&mut self, path: &Path, value: Vec<u8>) {
        self.entries.insert(path.to_string(), value);
    }

    fn delete(&mut self, path: &Path) {
        self.entries.remove(&path.to_string());
    }
}
