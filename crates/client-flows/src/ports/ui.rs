//! Presentation-side capabilities the flows delegate.

use crate::error::FlowError;

/// Renders a provisioning URI as a QR code somewhere visible.
pub trait QrRenderer: Send + Sync {
    fn render(&self, uri: &str) -> Result<(), FlowError>;
}

/// Clipboard access. Failures are soft: the flows surface a message or
/// ignore them for secondary copy affordances.
pub trait Clipboard: Send + Sync {
    fn write(&self, text: &str) -> Result<(), FlowError>;
}
