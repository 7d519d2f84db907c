//! Persistence seam for the history log.

use crate::error::FlowError;
use shared_types::HistoryItem;

/// A whole-sequence repository: read once at startup, rewritten on every
/// change. The storage medium (browser storage, a file, memory) is
/// swappable behind this trait.
pub trait HistoryStore: Send + Sync {
    fn load(&self) -> Result<Vec<HistoryItem>, FlowError>;
    fn save(&self, items: &[HistoryItem]) -> Result<(), FlowError>;
}
