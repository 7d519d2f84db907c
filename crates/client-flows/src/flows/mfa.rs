//! Multi-factor device registration flow.
//!
//! A fixed forward-only step sequence:
//! devices → qr-code → otp → backup-codes. Each view is one variant of
//! [`MfaView`], carrying only the data that view needs.

use crate::error::{surface, FlowError};
use crate::ports::{Clipboard, IdentityClient, MfaClient, QrRenderer};
use shared_types::{MfaDevice, MfaRegistration};
use std::sync::Arc;
use tracing::warn;

/// The current view of the registration flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MfaView {
    /// Listing registered devices
    Devices,
    /// Showing the provisioning QR code and manual-entry secret
    QrCode { registration: MfaRegistration },
    /// Collecting the authenticator code
    Otp { code: String },
    /// Displaying one-time recovery codes
    BackupCodes { codes: Vec<String> },
}

/// The MFA registration state machine.
pub struct MfaFlow {
    identity: Arc<dyn IdentityClient>,
    mfa: Arc<dyn MfaClient>,
    qr: Arc<dyn QrRenderer>,
    clipboard: Arc<dyn Clipboard>,
    devices: Vec<MfaDevice>,
    view: MfaView,
    busy: bool,
    error: Option<String>,
}

impl MfaFlow {
    pub fn new(
        identity: Arc<dyn IdentityClient>,
        mfa: Arc<dyn MfaClient>,
        qr: Arc<dyn QrRenderer>,
        clipboard: Arc<dyn Clipboard>,
    ) -> Self {
        Self {
            identity,
            mfa,
            qr,
            clipboard,
            devices: Vec::new(),
            view: MfaView::Devices,
            busy: false,
            error: None,
        }
    }

    pub fn view(&self) -> &MfaView {
        &self.view
    }

    pub fn devices(&self) -> &[MfaDevice] {
        &self.devices
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// A verified TOTP device blocks adding another; at most one may
    /// exist.
    pub fn has_verified_totp(&self) -> bool {
        self.devices.iter().any(MfaDevice::is_verified_totp)
    }

    /// Whether the add-device action is enabled.
    pub fn can_add_device(&self) -> bool {
        !self.busy && !self.has_verified_totp()
    }

    /// Fetch the device list (on mount and after state-changing actions).
    pub async fn refresh_devices(&mut self) {
        match self.mfa.get_user_devices().await {
            Ok(list) => self.devices = list,
            Err(e) => self.error = Some(surface(&e, "Could not load devices.")),
        }
    }

    /// Start registering a new device: request a provisioning payload
    /// and advance to the QR view.
    pub async fn add_device(&mut self) {
        if !self.can_add_device() {
            return;
        }
        self.busy = true;
        self.error = None;
        match self.mfa.add_device().await {
            Ok(registration) => self.show_qr(registration),
            Err(e) => {
                self.error = Some(surface(&e, "Failed to start device registration"));
            }
        }
        self.busy = false;
    }

    /// "I've scanned it": discard the registration payload and move on
    /// to code entry. No server interaction.
    pub fn confirm_scanned(&mut self) {
        if matches!(self.view, MfaView::QrCode { .. }) {
            self.view = MfaView::Otp {
                code: String::new(),
            };
        }
    }

    pub fn set_code(&mut self, code: impl Into<String>) {
        if let MfaView::Otp { code: current } = &mut self.view {
            *current = code.into();
        }
    }

    /// Submit the authenticator code: on success fetch recovery codes,
    /// advance, and refresh the device list; on failure stay put with
    /// the provider's message.
    pub async fn submit_code(&mut self) {
        let MfaView::Otp { code } = &self.view else {
            return;
        };
        if code.is_empty() || self.busy {
            return;
        }
        let code = code.clone();

        self.busy = true;
        self.error = None;
        let outcome = async {
            self.mfa.authenticate_device(&code).await?;
            self.mfa.get_recovery_codes(false).await
        }
        .await;
        match outcome {
            Ok(codes) => {
                self.view = MfaView::BackupCodes { codes };
                self.refresh_devices().await;
            }
            Err(e) => {
                self.error = Some(surface(&e, "Invalid code"));
            }
        }
        self.busy = false;
    }

    /// Copy all recovery codes to the clipboard. Failure is soft.
    pub fn copy_codes(&mut self) {
        let MfaView::BackupCodes { codes } = &self.view else {
            return;
        };
        if self.clipboard.write(&codes.join("\n")).is_err() {
            self.error = Some("Failed to copy codes to clipboard. Please copy manually.".into());
        }
    }

    /// Replace the displayed codes with a freshly generated set.
    pub async fn regenerate_codes(&mut self) {
        if self.busy || !matches!(self.view, MfaView::BackupCodes { .. }) {
            return;
        }
        self.busy = true;
        match self.mfa.get_recovery_codes(true).await {
            Ok(codes) => self.view = MfaView::BackupCodes { codes },
            Err(e) => self.error = Some(surface(&e, "Could not regenerate codes.")),
        }
        self.busy = false;
    }

    /// Tell the provider the user has saved their codes. Used to finish
    /// regardless of how the backup-codes view was reached.
    pub async fn acknowledge(&mut self) {
        if let Err(e) = self.mfa.complete_acknowledgement().await {
            self.error = Some(surface(&e, "Could not complete acknowledgement."));
        }
    }

    /// Out-of-band sync from the identity provider. Drives the same
    /// transitions as user actions based on whether an additional auth
    /// step is currently required. Intentionally not gated by the busy
    /// flag; racing a manual action is an accepted limitation.
    pub async fn sync(&mut self) {
        self.error = None;
        if self.identity.requires_additional_auth().await {
            match self.mfa.get_user_devices().await {
                Ok(list) if list.is_empty() => match self.mfa.add_device().await {
                    Ok(registration) => self.show_qr(registration),
                    Err(e) => {
                        self.error = Some(surface(&e, "Failed to start device registration"));
                    }
                },
                Ok(list) => {
                    self.devices = list;
                    self.view = MfaView::Otp {
                        code: String::new(),
                    };
                }
                Err(e) => self.error = Some(surface(&e, "Could not load devices.")),
            }
        } else {
            match self.mfa.get_recovery_codes(false).await {
                Ok(codes) => self.view = MfaView::BackupCodes { codes },
                Err(e) => self.error = Some(surface(&e, "Could not load recovery codes.")),
            }
        }
    }

    fn show_qr(&mut self, registration: MfaRegistration) {
        // Rendering is delegated; a failed render is not fatal to the flow.
        if let Err(e) = self.qr.render(&registration.uri) {
            warn!(error = %e, "QR render failed");
        }
        self.view = MfaView::QrCode { registration };
    }
}
