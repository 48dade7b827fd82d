//! Email relay client.
//!
//! Forwards a validated contact message to the EmailJS REST API. The browser
//! never sees the relay credentials; it posts to `/api/contact` and the host
//! makes this call on its behalf.
//!
//! ERROR HANDLING
//! ==============
//! A 2xx answer yields the relay's status text verbatim (EmailJS answers
//! `OK`). Non-2xx answers become [`RelayError::Response`]; timeouts and
//! connection failures are kept apart so the route can log them distinctly.

use portfolio_client::state::contact::{ContactField, ContactMessage};
use serde::Serialize;

use crate::config::RelayConfig;

pub const MAX_NAME_CHARS: usize = 256;
pub const MAX_EMAIL_CHARS: usize = 254;
pub const MAX_MESSAGE_CHARS: usize = 5000;

// =============================================================================
// ERROR TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The HTTP client could not be constructed.
    #[error("http client build failed: {0}")]
    HttpClientBuild(String),

    /// The relay did not answer within the configured timeout.
    #[error("relay request timed out")]
    Timeout,

    /// The request could not be delivered.
    #[error("relay request failed: {0}")]
    Request(String),

    /// The relay answered with a non-success status.
    #[error("relay response error: status {status}")]
    Response { status: u16, body: String },
}

/// Why a submission was refused before reaching the relay.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{} is required", .0.name())]
    Missing(ContactField),
    #[error("{} exceeds {max} characters", .field.name())]
    TooLong { field: ContactField, max: usize },
    #[error("email address is not valid")]
    InvalidEmail,
}

// =============================================================================
// TEMPLATE PARAMS
// =============================================================================

/// Template variables sent to the relay. Keys match the form field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl TemplateParams {
    /// Validate a submitted message and trim its fields.
    ///
    /// # Errors
    ///
    /// Returns the first field that is blank, too long, or (for email) not an
    /// address.
    pub fn from_message(message: &ContactMessage) -> Result<Self, ValidationError> {
        if let Some(field) = message.first_missing() {
            return Err(ValidationError::Missing(field));
        }

        let name = bounded(ContactField::Name, &message.name, MAX_NAME_CHARS)?;
        let email = bounded(ContactField::Email, &message.email, MAX_EMAIL_CHARS)?;
        let body = bounded(ContactField::Message, &message.message, MAX_MESSAGE_CHARS)?;
        if !is_plausible_email(&email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(Self { name, email, message: body })
    }
}

fn bounded(field: ContactField, raw: &str, max: usize) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(trimmed.to_owned())
}

/// Address syntax as accepted by `lettre`, which admits single-label domains
/// such as `localhost` the same way the browser's email input does.
fn is_plausible_email(email: &str) -> bool {
    email.parse::<lettre::Address>().is_ok()
}

// =============================================================================
// RELAY TRAIT
// =============================================================================

/// Delivers template params to an email relay. Enables mocking in tests.
#[async_trait::async_trait]
pub trait EmailRelay: Send + Sync {
    /// Send one message and return the relay's status text.
    ///
    /// # Errors
    ///
    /// Returns a [`RelayError`] if the relay is unreachable, times out, or
    /// answers with a non-success status.
    async fn send(&self, params: &TemplateParams) -> Result<String, RelayError>;
}

// =============================================================================
// EMAILJS CLIENT
// =============================================================================

pub struct EmailJsRelay {
    http: reqwest::Client,
    config: RelayConfig,
}

impl EmailJsRelay {
    /// # Errors
    ///
    /// Returns [`RelayError::HttpClientBuild`] if the TLS backend fails to initialize.
    pub fn new(config: RelayConfig) -> Result<Self, RelayError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeouts.request())
            .connect_timeout(config.timeouts.connect())
            .build()
            .map_err(|e| RelayError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }
}

#[async_trait::async_trait]
impl EmailRelay for EmailJsRelay {
    async fn send(&self, params: &TemplateParams) -> Result<String, RelayError> {
        let body = build_request(&self.config, params);

        let response = self
            .http
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(classify)?;

        if !(200..300).contains(&status) {
            return Err(RelayError::Response { status, body: text });
        }
        Ok(text)
    }
}

fn classify(err: reqwest::Error) -> RelayError {
    if err.is_timeout() {
        RelayError::Timeout
    } else {
        RelayError::Request(err.to_string())
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a TemplateParams,
}

fn build_request<'a>(config: &'a RelayConfig, params: &'a TemplateParams) -> SendRequest<'a> {
    SendRequest {
        service_id: &config.service_id,
        template_id: &config.template_id,
        user_id: &config.public_key,
        access_token: config.private_key.as_deref(),
        template_params: params,
    }
}

#[cfg(test)]
#[path = "relay_test.rs"]
mod tests;
