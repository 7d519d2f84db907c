//! In-memory history store, for tests and ephemeral sessions.

use crate::error::FlowError;
use crate::ports::HistoryStore;
use shared_types::HistoryItem;
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryHistoryStore {
    items: Mutex<Vec<HistoryItem>>,
}

impl HistoryStore for InMemoryHistoryStore {
    fn load(&self) -> Result<Vec<HistoryItem>, FlowError> {
        Ok(self.items.lock().map_err(poisoned)?.clone())
    }

    fn save(&self, items: &[HistoryItem]) -> Result<(), FlowError> {
        *self.items.lock().map_err(poisoned)? = items.to_vec();
        Ok(())
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> FlowError {
    FlowError::Store("history store lock poisoned".to_string())
}
