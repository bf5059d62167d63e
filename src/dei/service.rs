//! DEI service operations
//!
//! The three operations the service exposes: compute (validate, evaluate,
//! stamp, append), history listing, and full reset. Rejected computations
//! never touch the history.

use chrono::Utc;

use super::errors::DeiError;
use super::history::HistoryStore;
use super::model::{DeiInput, DeiRecord};

/// Compute/history/reset operations over a shared history store
pub struct DeiService {
    history: HistoryStore,
}

impl DeiService {
    /// Create a service with an empty history
    pub fn new() -> Self {
        Self {
            history: HistoryStore::new(),
        }
    }

    /// Evaluate the DEI formula for `input`, stamp it with the current UTC
    /// time, append the record to the history, and return it.
    pub fn compute(&self, input: DeiInput) -> Result<DeiRecord, DeiError> {
        let dei = input.score()?;

        let record = DeiRecord {
            dei,
            timestamp: Utc::now().to_rfc3339(),
            input,
        };
        self.history.append(record.clone());

        Ok(record)
    }

    /// Full computation history, oldest first
    pub fn history(&self) -> Vec<DeiRecord> {
        self.history.snapshot()
    }

    /// Number of records currently held
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Drop all history
    pub fn reset(&self) {
        self.history.clear();
    }
}

impl Default for DeiService {
    fn default() -> Self {
        Self::new()
    }
}
