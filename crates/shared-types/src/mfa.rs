//! Records exchanged with the external MFA provider.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payload returned when starting a new device registration: the
/// provisioning URI to encode as a QR code and the manual-entry secret.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MfaRegistration {
    pub uri: String,
    pub secret: String,
}

/// A registered second-factor device, as reported by the provider.
///
/// Provider payloads are not uniform: the device type may arrive under
/// either `type` or `deviceType`, and may be absent entirely.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MfaDevice {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(rename = "deviceType", default)]
    pub device_type: Option<String>,
    #[serde(rename = "isVerified", default)]
    pub is_verified: bool,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl MfaDevice {
    /// The device type under whichever field the provider used.
    pub fn effective_kind(&self) -> Option<&str> {
        self.kind.as_deref().or(self.device_type.as_deref())
    }

    /// Whether this device blocks further TOTP registration.
    ///
    /// A verified device counts when its type equals "totp"
    /// case-insensitively; a verified device with no type at all also
    /// counts.
    pub fn is_verified_totp(&self) -> bool {
        self.is_verified
            && self
                .effective_kind()
                .map(|t| t.eq_ignore_ascii_case("totp"))
                .unwrap_or(true)
    }
}
