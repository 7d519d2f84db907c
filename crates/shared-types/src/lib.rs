//! # Shared Types Crate
//!
//! Cross-crate types for the message signer/verifier system.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: the verification wire contract and the
//!   client-side data model are defined here and nowhere else.
//! - **Wire Fidelity**: JSON field names follow the HTTP contract
//!   (camelCase), independent of Rust naming.

pub mod history;
pub mod mfa;
pub mod wire;

pub use history::HistoryItem;
pub use mfa::{MfaDevice, MfaRegistration};
pub use wire::{VerifyRequest, VerifyResponse, MAX_MESSAGE_CHARS};
