//! Contact relay client.
//!
//! Client-side (hydrate): `POST /api/contact` via `gloo-net`; the host forwards
//! the fields to the email relay and echoes the relay's status text.
//! Server-side (SSR): the relay is unreachable and every send fails with
//! [`SubmissionError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! Only a 2xx response whose body is exactly [`SUCCESS_MARKER`] counts as
//! delivered. Every other shape, including a 200 with an unexpected body, is a
//! failure. Callers surface all failures with the same generic message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "relay_test.rs"]
mod relay_test;

use crate::state::contact::{ContactMessage, SubmissionError};

/// Body returned by the relay for an accepted message.
pub const SUCCESS_MARKER: &str = "OK";

/// Host endpoint that forwards contact messages to the relay.
pub const CONTACT_ENDPOINT: &str = "/api/contact";

/// Raw relay response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayReceipt {
    pub status: u16,
    pub text: String,
}

/// `true` only for a 2xx status carrying exactly the success marker.
#[must_use]
pub fn is_success(receipt: &RelayReceipt) -> bool {
    (200..300).contains(&receipt.status) && receipt.text == SUCCESS_MARKER
}

/// Delivers a contact message and reports what the relay answered.
#[allow(async_fn_in_trait)]
pub trait ContactRelay {
    /// # Errors
    ///
    /// Returns [`SubmissionError::Transport`] when no response was received.
    async fn send(&self, message: &ContactMessage) -> Result<RelayReceipt, SubmissionError>;
}

/// Relay reached through the hosting server.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpRelay;

impl ContactRelay for HttpRelay {
    async fn send(&self, message: &ContactMessage) -> Result<RelayReceipt, SubmissionError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(CONTACT_ENDPOINT)
                .json(message)
                .map_err(|e| SubmissionError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| SubmissionError::Transport(e.to_string()))?;
            let status = resp.status();
            let text = resp
                .text()
                .await
                .map_err(|e| SubmissionError::Transport(e.to_string()))?;
            Ok(RelayReceipt { status, text })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = message;
            Err(SubmissionError::Unavailable)
        }
    }
}

/// Send `message` and collapse the receipt into delivered / not delivered.
///
/// # Errors
///
/// Propagates transport errors and turns any receipt other than the success
/// marker into [`SubmissionError::Rejected`].
pub async fn dispatch<R: ContactRelay>(relay: &R, message: &ContactMessage) -> Result<(), SubmissionError> {
    let receipt = relay.send(message).await?;
    if is_success(&receipt) {
        return Ok(());
    }
    Err(SubmissionError::Rejected { status: receipt.status, body: receipt.text })
}
