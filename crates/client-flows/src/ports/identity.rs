//! Identity/session and MFA capabilities of the external provider.

use crate::error::FlowError;
use async_trait::async_trait;
use shared_types::{MfaDevice, MfaRegistration};

/// Session state and email one-time-password operations.
#[async_trait]
pub trait IdentityClient: Send + Sync {
    async fn is_logged_in(&self) -> bool;

    /// Send a one-time code to `email`.
    async fn connect_with_email(&self, email: &str) -> Result<(), FlowError>;

    /// Verify a one-time code; success establishes the session.
    async fn verify_one_time_password(&self, code: &str) -> Result<(), FlowError>;

    async fn logout(&self) -> Result<(), FlowError>;

    /// Whether the account currently requires an additional auth step
    /// (drives the out-of-band MFA sync).
    async fn requires_additional_auth(&self) -> bool;
}

/// Second-factor device lifecycle.
#[async_trait]
pub trait MfaClient: Send + Sync {
    /// Begin registering a new device; returns the provisioning URI and
    /// manual-entry secret.
    async fn add_device(&self) -> Result<MfaRegistration, FlowError>;

    /// Confirm a pending device with a code from the authenticator app.
    async fn authenticate_device(&self, code: &str) -> Result<(), FlowError>;

    async fn get_user_devices(&self) -> Result<Vec<MfaDevice>, FlowError>;

    /// Fetch one-time recovery codes; `force_regenerate` replaces them.
    async fn get_recovery_codes(&self, force_regenerate: bool) -> Result<Vec<String>, FlowError>;

    /// Signal the provider that the user has acknowledged their codes.
    async fn complete_acknowledgement(&self) -> Result<(), FlowError>;
}
