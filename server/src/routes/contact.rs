//! Contact form endpoint.
//!
//! `POST /api/contact` takes the form fields as JSON and forwards them to the
//! email relay. Checks run in order: relay configured (`503`), field
//! validation (`422`), rate limit (`429`), relay call (`502` on failure). On
//! success the relay's status text is echoed back with `200`; the browser
//! treats anything other than `OK` as a failure.

use std::net::{IpAddr, SocketAddr};

use axum::Json;
use axum::extract::{ConnectInfo, State};
use axum::http::{HeaderMap, StatusCode};
use portfolio_client::state::contact::ContactMessage;

use crate::relay::{RelayError, TemplateParams};
use crate::state::AppState;

/// Largest accepted request body.
pub const MAX_BODY_BYTES: usize = 16 * 1024;

pub(crate) const RELAY_UNAVAILABLE: &str = "contact relay is not configured";
pub(crate) const RELAY_FAILED: &str = "contact relay failed";

pub async fn send_contact(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(message): Json<ContactMessage>,
) -> Result<String, (StatusCode, String)> {
    let Some(relay) = state.relay.clone() else {
        tracing::warn!("contact submission received but relay is not configured");
        return Err((StatusCode::SERVICE_UNAVAILABLE, RELAY_UNAVAILABLE.to_owned()));
    };

    let client = client_ip(&headers, peer, state.trust_forwarded_for);
    let params = TemplateParams::from_message(&message).map_err(|e| {
        tracing::info!(%client, error = %e, "contact submission rejected");
        (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
    })?;

    // Only messages that would reach the relay count against the limits.
    if let Err(e) = state.rate_limiter.check_and_record(client) {
        tracing::warn!(%client, error = %e, "contact submission rate limited");
        return Err((StatusCode::TOO_MANY_REQUESTS, e.to_string()));
    }

    match relay.send(&params).await {
        Ok(text) => {
            tracing::info!(%client, status_text = %text, "contact message relayed");
            Ok(text)
        }
        Err(RelayError::Response { status, body }) => {
            tracing::error!(%client, status, %body, "relay rejected contact message");
            Err((StatusCode::BAD_GATEWAY, RELAY_FAILED.to_owned()))
        }
        Err(e) => {
            tracing::error!(%client, error = %e, "contact relay call failed");
            Err((StatusCode::BAD_GATEWAY, RELAY_FAILED.to_owned()))
        }
    }
}

/// Address used for rate limiting: the first `X-Forwarded-For` hop when the
/// proxy is trusted and the header parses, else the socket peer.
pub(crate) fn client_ip(headers: &HeaderMap, peer: SocketAddr, trust_forwarded_for: bool) -> IpAddr {
    if trust_forwarded_for {
        let forwarded = headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|raw| raw.split(',').next())
            .and_then(|first| first.trim().parse::<IpAddr>().ok());
        if let Some(ip) = forwarded {
            return ip;
        }
    }
    peer.ip()
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
