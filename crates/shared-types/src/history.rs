//! Client-side history entries.

use crate::wire::VerifyResponse;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One sign-and-verify round trip, as kept in the local history log.
///
/// The log is an ordered sequence, newest first, persisted wholesale by
/// the history store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub message: String,
    pub signature: String,
    pub result: VerifyResponse,
    /// When the entry was recorded (ISO-8601 on the wire).
    pub at: DateTime<Utc>,
}
