//! Persisted log of accepted submissions.
//!
//! Stored as a JSON array of epoch milliseconds under
//! [`HISTORY_KEY`](crate::config::HISTORY_KEY). There is no schema version;
//! an absent or unreadable entry is an empty history.

use tracing::warn;

use crate::config::HISTORY_KEY;
use crate::error::StorageResult;
use crate::storage::LocalStore;

/// Milliseconds since the Unix epoch
pub type EpochMillis = i64;

/// Current wall-clock time
pub fn now_millis() -> EpochMillis {
    chrono::Utc::now().timestamp_millis()
}

/// Ordered timestamps of past accepted submissions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionHistory {
    entries: Vec<EpochMillis>,
}

impl SubmissionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<EpochMillis>) -> Self {
        Self { entries }
    }

    /// Read the persisted history from `store`
    pub fn load(store: &dyn LocalStore) -> Self {
        let raw = match store.get_item(HISTORY_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::new(),
            Err(e) => {
                warn!("Failed to read submission history: {}", e);
                return Self::new();
            }
        };

        match serde_json::from_str::<Vec<EpochMillis>>(&raw) {
            Ok(entries) => Self { entries },
            Err(e) => {
                warn!("Ignoring unreadable submission history: {}", e);
                Self::new()
            }
        }
    }

    /// Write the history to `store`
    pub fn save(&self, store: &dyn LocalStore) -> StorageResult<()> {
        let json = serde_json::to_string(&self.entries)?;
        store.set_item(HISTORY_KEY, &json)
    }

    /// Drop entries older than `window_ms` before `now`.
    ///
    /// Entries at exactly `now - window_ms` are kept.
    pub fn prune(&mut self, now: EpochMillis, window_ms: i64) {
        let cutoff = now.saturating_sub(window_ms);
        self.entries.retain(|&t| t >= cutoff);
    }

    pub fn append(&mut self, at: EpochMillis) {
        self.entries.push(at);
    }

    /// Most recent entry
    pub fn last(&self) -> Option<EpochMillis> {
        self.entries.last().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[EpochMillis] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn absent_history_is_empty() {
        let store = MemoryStore::new();
        assert!(SubmissionHistory::load(&store).is_empty());
    }

    #[test]
    fn unreadable_history_is_empty() {
        let store = MemoryStore::new();
        store.set_item(HISTORY_KEY, "not json").unwrap();
        assert!(SubmissionHistory::load(&store).is_empty());
    }

    #[test]
    fn save_then_load() {
        let store = MemoryStore::new();
        let history = SubmissionHistory::from_entries(vec![1_000, 2_000]);
        history.save(&store).unwrap();

        assert_eq!(
            store.get_item(HISTORY_KEY).unwrap().as_deref(),
            Some("[1000,2000]")
        );
        assert_eq!(SubmissionHistory::load(&store), history);
    }

    #[test]
    fn prune_keeps_the_window_boundary() {
        let mut history = SubmissionHistory::from_entries(vec![0, 999, 1_000, 5_000]);
        history.prune(2_000, 1_000);
        assert_eq!(history.entries(), &[1_000, 5_000]);
    }

    #[test]
    fn last_is_most_recent_append() {
        let mut history = SubmissionHistory::new();
        assert_eq!(history.last(), None);
        history.append(10);
        history.append(20);
        assert_eq!(history.last(), Some(20));
        assert_eq!(history.len(), 2);
    }
}
