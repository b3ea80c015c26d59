use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::store::{SnapshotStore, StoreError};

/// Directory-of-JSON-files snapshot store.
///
/// Each slot lives in its own `<slot>.json` file under the store
/// directory; every write replaces the whole file. This is the durable
/// counterpart of the browser's key-value storage: one flat payload per
/// slot, no partial updates.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open (creating if needed) a store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{slot}.json"))
    }
}

impl SnapshotStore for JsonFileStore {
    fn read_slot(&self, slot: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.slot_path(slot)) {
            Ok(payload) => {
                debug!(slot, bytes = payload.len(), "read snapshot slot");
                Ok(Some(payload))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write_slot(&self, slot: &str, payload: &str) -> Result<(), StoreError> {
        fs::write(self.slot_path(slot), payload)?;
        debug!(slot, bytes = payload.len(), "wrote snapshot slot");
        Ok(())
    }

    fn remove_slot(&self, slot: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.slot_path(slot)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_survive_reopening_the_directory() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = JsonFileStore::open(dir.path()).unwrap();
            store.write_slot("storeProducts", "[{\"id\":1}]").unwrap();
        }
        let store = JsonFileStore::open(dir.path()).unwrap();
        assert_eq!(
            store.read_slot("storeProducts").unwrap().as_deref(),
            Some("[{\"id\":1}]")
        );
    }

    #[test]
    fn absent_slot_reads_as_none_and_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        assert!(store.read_slot("storeOrders").unwrap().is_none());
        store.remove_slot("storeOrders").unwrap();

        store.write_slot("storeOrders", "[]").unwrap();
        store.remove_slot("storeOrders").unwrap();
        assert!(store.read_slot("storeOrders").unwrap().is_none());
    }
}
