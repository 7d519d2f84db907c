//! Trait seams for every external collaborator.
//!
//! The identity/wallet/MFA provider is a black box; these ports carry
//! exactly the capability set the flows consume, so tests can inject
//! deterministic doubles.

pub mod history;
pub mod identity;
pub mod ui;
pub mod verification;
pub mod wallet;

pub use history::HistoryStore;
pub use identity::{IdentityClient, MfaClient};
pub use ui::{Clipboard, QrRenderer};
pub use verification::VerificationApi;
pub use wallet::WalletHandle;
