//! In-memory feedback record store
//!
//! The store keeps entries ordered by descending `created_at` so that
//! "recent" and default listing reads are snapshot slices. It is append-only:
//! no update or delete operations exist on this contract. Concurrent access
//! is the caller's concern; readers never observe in-place mutation.

use feedbackos_types::FeedbackEntry;
use tracing::debug;

/// Ordered, append-only collection of feedback entries.
#[derive(Debug, Clone, Default)]
pub struct FeedbackStore {
    entries: Vec<FeedbackEntry>,
}

impl FeedbackStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing entries, restoring the descending
    /// `created_at` order.
    pub fn from_entries(mut entries: Vec<FeedbackEntry>) -> Self {
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Self { entries }
    }

    /// Append an entry, keeping the collection ordered.
    pub fn insert(&mut self, entry: FeedbackEntry) {
        debug!(id = %entry.id, device = %entry.device_id, "storing feedback entry");
        let position = self
            .entries
            .iter()
            .position(|existing| existing.created_at <= entry.created_at)
            .unwrap_or(self.entries.len());
        self.entries.insert(position, entry);
    }

    /// Snapshot of all entries, most recent first.
    pub fn entries(&self) -> &[FeedbackEntry] {
        &self.entries
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
