//! In-memory computation history
//!
//! Insertion-ordered, append-only log of completed computations. The only
//! other mutation is a full clear. The store is an explicitly owned state
//! object shared between request handlers; all access goes through the
//! inner lock, and no lock is held across an await point.

use std::sync::RwLock;

use super::model::DeiRecord;

/// Shared, process-lifetime log of DEI computations
pub struct HistoryStore {
    entries: RwLock<Vec<DeiRecord>>,
}

impl HistoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Append a record at the end of the log
    pub fn append(&self, record: DeiRecord) {
        self.entries.write().unwrap().push(record);
    }

    /// Full history in insertion order
    pub fn snapshot(&self) -> Vec<DeiRecord> {
        self.entries.read().unwrap().clone()
    }

    /// Replace the log with an empty sequence
    pub fn clear(&self) {
        self.entries.write().unwrap().clear();
    }

    /// Number of records currently held
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// True when the log holds no records
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}
