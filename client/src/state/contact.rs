//! Contact form view state and submission state machine.
//!
//! DESIGN
//! ======
//! The form mirrors each input into `ContactMessage` on every keystroke. A
//! submission hands the relay a snapshot taken in `begin_submit`, so edits made
//! while a send is pending never reach the in-flight request.
//!
//! Status flow: `Idle -> Submitting -> Succeeded | Failed`, and back to
//! `Submitting` on resubmit. Banners are derived from the status, so the
//! success and error banners can never be shown together.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Generic, retryable message shown for every submission failure.
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again later.";

/// Banner text shown after the relay accepts a message.
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

/// The three fields collected by the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// Return the current value of one field.
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// First required field that is blank after trimming, in form order.
    #[must_use]
    pub fn first_missing(&self) -> Option<ContactField> {
        ContactField::ALL
            .into_iter()
            .find(|field| self.get(*field).trim().is_empty())
    }

    fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

/// Identifies one input of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Form key, also used as the template parameter name on the relay.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Visible label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }
}

/// Submission lifecycle of a mounted contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    /// Carries the user-facing reason shown in the error banner.
    Failed(String),
}

/// Why a submit attempt did not start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A previous submission has not settled yet.
    InFlight,
    /// A required field is empty.
    MissingField(ContactField),
}

/// Any failure while delivering a contact message.
///
/// Every variant collapses to [`FAILURE_MESSAGE`] in the UI; the variants only
/// exist for console diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionError {
    /// The request never produced a response (network down, CORS, abort).
    Transport(String),
    /// The relay answered with something other than the success marker.
    Rejected { status: u16, body: String },
    /// No relay is reachable from this build (server-side rendering).
    Unavailable,
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "transport failure: {e}"),
            Self::Rejected { status, body } => write!(f, "relay rejected message: {status} {body}"),
            Self::Unavailable => f.write_str("relay not available"),
        }
    }
}

impl std::error::Error for SubmissionError {}

/// Contact form fields plus submission status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub message: ContactMessage,
    pub status: SubmitStatus,
    /// Field that blocked the last submit attempt, until it is edited.
    pub missing: Option<ContactField>,
}

impl ContactFormState {
    /// Replace a single field. Allowed in every status.
    pub fn edit(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        if self.missing == Some(field) {
            self.missing = None;
        }
        match field {
            ContactField::Name => self.message.name = value,
            ContactField::Email => self.message.email = value,
            ContactField::Message => self.message.message = value,
        }
    }

    /// Enter `Submitting` and return the snapshot to hand to the relay.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitBlocked::InFlight`] while a send is pending and
    /// [`SubmitBlocked::MissingField`] when a required field is blank. The
    /// status is left untouched in both cases; a blank field is remembered so
    /// the form can point at it.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, SubmitBlocked> {
        if self.is_submitting() {
            return Err(SubmitBlocked::InFlight);
        }
        if let Some(field) = self.message.first_missing() {
            self.missing = Some(field);
            return Err(SubmitBlocked::MissingField(field));
        }
        self.missing = None;
        self.status = SubmitStatus::Submitting;
        Ok(self.message.clone())
    }

    /// Apply the relay outcome. Ignored unless a submission is pending.
    pub fn settle(&mut self, outcome: Result<(), SubmissionError>) {
        if !self.is_submitting() {
            return;
        }
        match outcome {
            Ok(()) => {
                self.message.clear();
                self.status = SubmitStatus::Succeeded;
            }
            Err(_) => self.status = SubmitStatus::Failed(FAILURE_MESSAGE.to_owned()),
        }
    }

    /// Close whichever banner is showing.
    pub fn dismiss_banner(&mut self) {
        if matches!(self.status, SubmitStatus::Succeeded | SubmitStatus::Failed(_)) {
            self.status = SubmitStatus::Idle;
        }
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// The submit button is disabled for the whole pending window.
    #[must_use]
    pub fn submit_disabled(&self) -> bool {
        self.is_submitting()
    }

    /// Inline hint under `field` after it blocked a submit.
    #[must_use]
    pub fn field_hint(&self, field: ContactField) -> Option<String> {
        (self.missing == Some(field)).then(|| format!("{} is required.", field.label()))
    }

    #[must_use]
    pub fn success_banner(&self) -> Option<&'static str> {
        (self.status == SubmitStatus::Succeeded).then_some(SUCCESS_MESSAGE)
    }

    #[must_use]
    pub fn error_banner(&self) -> Option<&str> {
        match &self.status {
            SubmitStatus::Failed(reason) => Some(reason.as_str()),
            _ => None,
        }
    }
}
