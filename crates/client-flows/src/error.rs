//! Error types for client flows.

use thiserror::Error;

/// Failures surfaced to the flows by ports and adapters.
///
/// The flows never propagate these to the caller; they catch them at the
/// call site and turn them into user-facing text.
#[derive(Debug, Clone, Error)]
pub enum FlowError {
    /// The external SDK reported a failure; the message is shown verbatim
    #[error("{0}")]
    Sdk(String),

    /// Transport failure talking to the verification API
    #[error("network error: {0}")]
    Network(String),

    /// The wallet returned no signature
    #[error("Failed to sign message")]
    EmptySignature,

    /// Clipboard access failed (non-fatal)
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    /// The history store could not read or write
    #[error("history store error: {0}")]
    Store(String),
}

/// The user-facing message for a caught error: the error's own text when
/// it has any, otherwise the caller's fallback.
pub(crate) fn surface(error: &FlowError, fallback: &str) -> String {
    let text = error.to_string();
    if text.is_empty() {
        fallback.to_string()
    } else {
        text
    }
}
