//! JSON-file history store.

use crate::error::FlowError;
use crate::ports::HistoryStore;
use shared_types::HistoryItem;
use std::fs;
use std::path::PathBuf;

/// Persists the history log as a pretty-printed JSON array. A missing
/// file reads as an empty log; every save rewrites the whole file.
pub struct JsonFileHistoryStore {
    path: PathBuf,
}

impl JsonFileHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HistoryStore for JsonFileHistoryStore {
    fn load(&self) -> Result<Vec<HistoryItem>, FlowError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(FlowError::Store(e.to_string())),
        };
        serde_json::from_str(&contents).map_err(|e| FlowError::Store(e.to_string()))
    }

    fn save(&self, items: &[HistoryItem]) -> Result<(), FlowError> {
        let json =
            serde_json::to_string_pretty(items).map_err(|e| FlowError::Store(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| FlowError::Store(e.to_string()))
    }
}
