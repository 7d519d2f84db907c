//! The local history log.

use crate::ports::HistoryStore;
use shared_types::HistoryItem;
use std::sync::Arc;
use tracing::warn;

/// Ordered sequence of sign-and-verify entries, newest first, written
/// through to the store on every change. Growth is unbounded; only an
/// explicit clear removes entries.
pub struct HistoryLog {
    items: Vec<HistoryItem>,
    store: Arc<dyn HistoryStore>,
}

impl HistoryLog {
    /// Open the log, reading whatever the store currently holds. A store
    /// that fails to load starts the session empty.
    pub fn open(store: Arc<dyn HistoryStore>) -> Self {
        let items = store.load().unwrap_or_else(|e| {
            warn!(error = %e, "could not load history, starting empty");
            Vec::new()
        });
        Self { items, store }
    }

    /// Prepend an entry (newest first) and persist.
    pub fn push(&mut self, item: HistoryItem) {
        self.items.insert(0, item);
        self.persist();
    }

    /// Drop all entries and persist the empty sequence.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    // Store failures are non-fatal; the in-memory sequence stays
    // authoritative for the session.
    fn persist(&self) {
        if let Err(e) = self.store.save(&self.items) {
            warn!(error = %e, "failed to persist history");
        }
    }
}

/// Shorten an address for display: first 6 and last 4 characters joined
/// by an ellipsis, or a placeholder when absent.
///
/// Counts characters, not bytes; the input comes off the wire and is not
/// guaranteed to be ASCII.
pub fn shorten_address(address: Option<&str>) -> String {
    match address {
        Some(a) if a.chars().count() > 10 => {
            let head: String = a.chars().take(6).collect();
            let tail: String = a.chars().skip(a.chars().count() - 4).collect();
            format!("{head}…{tail}")
        }
        Some(a) => a.to_string(),
        None => "—".to_string(),
    }
}
