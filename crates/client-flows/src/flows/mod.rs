//! The state machines the UI drives.

pub mod auth;
pub mod history;
pub mod mfa;
pub mod signer;
