//! Host configuration parsed from environment variables.
//!
//! The relay is optional: when its required variables are absent the site
//! still serves, and `POST /api/contact` answers `503`.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const DEFAULT_RELAY_REQUEST_TIMEOUT_SECS: u64 = 20;
pub const DEFAULT_RELAY_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl RelayTimeouts {
    #[must_use]
    pub fn request(&self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    #[must_use]
    pub fn connect(&self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

/// Credentials and endpoint of the email relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// Optional access token for accounts that require it on server calls.
    pub private_key: Option<String>,
    pub endpoint: String,
    pub timeouts: RelayTimeouts,
}

impl RelayConfig {
    /// Build relay config from environment variables.
    ///
    /// Required (otherwise `Ok(None)`):
    /// - `EMAILJS_SERVICE_ID`
    /// - `EMAILJS_TEMPLATE_ID`
    /// - `EMAILJS_PUBLIC_KEY`
    ///
    /// Optional:
    /// - `EMAILJS_PRIVATE_KEY`
    /// - `EMAILJS_ENDPOINT`: default EmailJS REST send URL
    /// - `CONTACT_RELAY_TIMEOUT_SECS`: default 20
    /// - `CONTACT_RELAY_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if a timeout variable is present but not a positive integer.
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        let (Some(service_id), Some(template_id), Some(public_key)) = (
            env_non_empty("EMAILJS_SERVICE_ID"),
            env_non_empty("EMAILJS_TEMPLATE_ID"),
            env_non_empty("EMAILJS_PUBLIC_KEY"),
        ) else {
            return Ok(None);
        };

        let endpoint = env_non_empty("EMAILJS_ENDPOINT")
            .unwrap_or_else(|| DEFAULT_EMAILJS_ENDPOINT.to_owned());
        let timeouts = RelayTimeouts {
            request_secs: env_positive("CONTACT_RELAY_TIMEOUT_SECS", DEFAULT_RELAY_REQUEST_TIMEOUT_SECS)?,
            connect_secs: env_positive("CONTACT_RELAY_CONNECT_TIMEOUT_SECS", DEFAULT_RELAY_CONNECT_TIMEOUT_SECS)?,
        };

        Ok(Some(Self {
            service_id,
            template_id,
            public_key,
            private_key: env_non_empty("EMAILJS_PRIVATE_KEY"),
            endpoint,
            timeouts,
        }))
    }
}

/// Top-level host configuration.
///
/// Rate-limit windows are read separately by
/// [`RateLimitConfig::from_env`](crate::rate_limit::RateLimitConfig::from_env).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub port: u16,
    pub relay: Option<RelayConfig>,
    /// Key rate limits on the first `X-Forwarded-For` hop instead of the peer
    /// address. Only safe behind a proxy that overwrites the header.
    pub trust_forwarded_for: bool,
}

impl SiteConfig {
    /// # Errors
    ///
    /// Returns an error if `PORT` or a relay timeout is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value: raw })?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self {
            port,
            relay: RelayConfig::from_env()?,
            trust_forwarded_for: env_bool("TRUST_FORWARDED_FOR").unwrap_or(false),
        })
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

fn env_positive(key: &'static str, default: u64) -> Result<u64, ConfigError> {
    let Some(raw) = env_non_empty(key) else {
        return Ok(default);
    };
    match raw.parse::<u64>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(ConfigError::Invalid { key, value: raw }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
