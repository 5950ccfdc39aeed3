//! Store handle: one operation log, many named collections.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::collection::Collection;
use crate::error::StoreError;
use crate::wal::{self, doc_from_bytes, Wal};

const WAL_FILE: &str = "wal.bin";

/// A process-scoped store handle, constructed once at startup and shared by
/// every request handler and the seeding task.
pub struct Store {
    collections: RwLock<HashMap<String, Arc<Collection>>>,
    wal: Arc<Mutex<Wal>>,
    path: PathBuf,
}

impl Store {
    /// Open (or create) a store at `dir`, replaying the operation log to
    /// rebuild collection state.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let wal_path = dir.join(WAL_FILE);

        let records = wal::replay(&wal_path)?;
        let replayed = records.len();

        let store = Self {
            collections: RwLock::new(HashMap::new()),
            wal: Arc::new(Mutex::new(Wal::open(&wal_path)?)),
            path: dir.to_path_buf(),
        };
        for record in records {
            let data = record.data.as_deref().map(doc_from_bytes).transpose()?;
            store.collection(&record.collection).apply_replayed(record.op, record.id, data);
        }
        tracing::debug!(path = %dir.display(), records = replayed, "Operation log replayed");
        Ok(store)
    }

    /// Handle to a named collection, created on first use.
    pub fn collection(&self, name: &str) -> Arc<Collection> {
        if let Some(col) = self.collections.read().get(name) {
            return Arc::clone(col);
        }
        let mut collections = self.collections.write();
        Arc::clone(
            collections
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(Collection::new(name, Arc::clone(&self.wal)))),
        )
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
