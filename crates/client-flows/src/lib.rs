//! # Client Flows
//!
//! The client application model for the message signer: authentication
//! (email + one-time code), MFA device registration, sign-and-verify,
//! and the local history log.
//!
//! ## Architecture
//!
//! - **Ports** (`ports/`): traits for every external collaborator: the
//!   identity provider, the wallet handle, the MFA provider, QR
//!   rendering, the clipboard, the verification API, and the history
//!   store. Test doubles substitute deterministic responses.
//! - **Flows** (`flows/`): the state machines the UI drives. Each async
//!   action is gated by a per-flow busy flag; errors from external calls
//!   are caught at the call site and surfaced as user-facing text.
//! - **Adapters** (`adapters/`): a reqwest-backed verification API
//!   client and JSON-file / in-memory history stores.

pub mod adapters;
pub mod config;
pub mod error;
pub mod flows;
pub mod ports;

pub use config::ClientConfig;
pub use error::FlowError;
pub use flows::auth::{AuthFlow, AuthStage};
pub use flows::history::{shorten_address, HistoryLog};
pub use flows::mfa::{MfaFlow, MfaView};
pub use flows::signer::SignerFlow;
