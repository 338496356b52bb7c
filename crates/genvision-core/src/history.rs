//! Bounded, newest-first record of recent generation requests.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Maximum number of entries kept in a [`HistoryStore`].
pub const HISTORY_CAPACITY: usize = 10;

/// Summary of one successful generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HistoryEntry {
    pub prompt: String,
    /// Display names (not keys) of the requested models, in request order.
    pub models: Vec<String>,
    pub timestamp: DateTime<Utc>,
    /// Number of results produced.
    pub results: usize,
}

/// In-process prompt history shared by every request.
///
/// Insertion and truncation happen under a single lock, so concurrent
/// writers can never leave more than [`HISTORY_CAPACITY`] entries behind and
/// the front entry is always the most recently committed one.
pub struct HistoryStore {
    entries: Mutex<VecDeque<HistoryEntry>>,
}

impl std::fmt::Debug for HistoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HistoryStore({} entries)", self.len())
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(VecDeque::with_capacity(HISTORY_CAPACITY + 1)),
        }
    }

    /// Insert `entry` at the front, dropping the oldest entries beyond capacity.
    pub fn record(&self, entry: HistoryEntry) {
        let mut entries = self.lock();
        entries.push_front(entry);
        entries.truncate(HISTORY_CAPACITY);
    }

    /// Snapshot of the history, newest first.
    pub fn list(&self) -> Vec<HistoryEntry> {
        self.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Every critical section leaves the deque consistent, so a poisoned lock
    // still guards valid data.
    fn lock(&self) -> MutexGuard<'_, VecDeque<HistoryEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
