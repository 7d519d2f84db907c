//! Email + one-time-code authentication flow.
//!
//! Two stages: collecting the email address, then collecting the code.
//! The authenticated state itself lives in the external provider; this
//! flow only orchestrates the transitions around it.

use crate::error::{surface, FlowError};
use crate::ports::IdentityClient;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid regex"));

/// Syntactic email check: something before an `@`, and a dot-segment
/// after it.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Which input the flow is collecting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStage {
    Email,
    Otp,
}

/// The sign-in flow state machine.
pub struct AuthFlow {
    identity: Arc<dyn IdentityClient>,
    stage: AuthStage,
    email: String,
    otp: String,
    busy: bool,
    error: Option<String>,
    info: Option<String>,
}

impl AuthFlow {
    pub fn new(identity: Arc<dyn IdentityClient>) -> Self {
        Self {
            identity,
            stage: AuthStage::Email,
            email: String::new(),
            otp: String::new(),
            busy: false,
            error: None,
            info: None,
        }
    }

    pub fn stage(&self) -> AuthStage {
        self.stage
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn info(&self) -> Option<&str> {
        self.info.as_deref()
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_otp(&mut self, otp: impl Into<String>) {
        self.otp = otp.into();
    }

    /// Whether the send-code action is enabled.
    pub fn can_send_code(&self) -> bool {
        !self.busy && is_valid_email(&self.email)
    }

    pub async fn is_logged_in(&self) -> bool {
        self.identity.is_logged_in().await
    }

    /// Submit the email address: send a code and advance to the OTP
    /// stage. An invalid address shows a validation hint and stays put.
    pub async fn submit_email(&mut self) {
        self.begin_action();
        if !is_valid_email(&self.email) {
            self.error = Some("Please enter a valid email address.".into());
            self.busy = false;
            return;
        }
        match self.identity.connect_with_email(&self.email).await {
            Ok(()) => {
                self.info = Some(format!("We sent a one-time code to {}.", self.email));
                self.stage = AuthStage::Otp;
            }
            Err(e) => {
                self.error = Some(surface(&e, "Failed to send code. Please try again."));
            }
        }
        self.busy = false;
    }

    /// Submit the one-time code; success leaves the session established
    /// in the provider.
    pub async fn submit_otp(&mut self) {
        self.begin_action();
        match self.identity.verify_one_time_password(&self.otp).await {
            Ok(()) => {
                self.info = Some("You are now signed in.".into());
            }
            Err(e) => {
                self.error = Some(surface(&e, "Invalid code. Please try again."));
            }
        }
        self.busy = false;
    }

    /// Re-send the code without changing stage.
    pub async fn resend(&mut self) {
        if self.busy || !is_valid_email(&self.email) {
            return;
        }
        self.begin_action();
        match self.identity.connect_with_email(&self.email).await {
            Ok(()) => {
                self.info = Some(format!("We re-sent a one-time code to {}.", self.email));
            }
            Err(e) => {
                self.error = Some(surface(&e, "Could not resend code."));
            }
        }
        self.busy = false;
    }

    /// Go back to the email stage; no provider interaction.
    pub fn change_email(&mut self) {
        self.stage = AuthStage::Email;
    }

    pub async fn logout(&mut self) {
        if let Err(e) = self.identity.logout().await {
            self.error = Some(surface(&e, "Could not log out."));
        }
    }

    // Error and info are mutually-clearable, reset at each action start.
    fn begin_action(&mut self) {
        self.busy = true;
        self.error = None;
        self.info = None;
    }
}
