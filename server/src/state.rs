//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the optional email relay and the contact rate limiter. Clone is
//! required by Axum; every field is `Arc`-backed or `Copy`.

use std::sync::Arc;

use crate::rate_limit::RateLimiter;
use crate::relay::EmailRelay;

#[derive(Clone)]
pub struct AppState {
    /// Email relay. `None` when relay env vars are not configured.
    pub relay: Option<Arc<dyn EmailRelay>>,
    /// In-memory rate limiter for contact submissions.
    pub rate_limiter: RateLimiter,
    /// Whether the client address may be taken from `X-Forwarded-For`.
    pub trust_forwarded_for: bool,
}

impl AppState {
    #[must_use]
    pub fn new(relay: Option<Arc<dyn EmailRelay>>, rate_limiter: RateLimiter) -> Self {
        Self { relay, rate_limiter, trust_forwarded_for: false }
    }

    #[must_use]
    pub fn with_trust_forwarded_for(mut self, trust: bool) -> Self {
        self.trust_forwarded_for = trust;
        self
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Mutex;

    use super::*;
    use crate::rate_limit::RateLimitConfig;
    use crate::relay::{RelayError, TemplateParams};

    /// Relay double that records every call and replays one scripted answer.
    pub struct MockRelay {
        answer: Box<dyn Fn() -> Result<String, RelayError> + Send + Sync>,
        pub sent: Mutex<Vec<TemplateParams>>,
    }

    impl MockRelay {
        #[must_use]
        pub fn answering(text: &str) -> Arc<Self> {
            let text = text.to_owned();
            Arc::new(Self { answer: Box::new(move || Ok(text.clone())), sent: Mutex::new(Vec::new()) })
        }

        #[must_use]
        pub fn rejecting(status: u16, body: &str) -> Arc<Self> {
            let body = body.to_owned();
            Arc::new(Self {
                answer: Box::new(move || Err(RelayError::Response { status, body: body.clone() })),
                sent: Mutex::new(Vec::new()),
            })
        }

        #[must_use]
        pub fn timing_out() -> Arc<Self> {
            Arc::new(Self { answer: Box::new(|| Err(RelayError::Timeout)), sent: Mutex::new(Vec::new()) })
        }

        #[must_use]
        pub fn calls(&self) -> usize {
            self.sent.lock().unwrap().len()
        }
    }

    #[async_trait::async_trait]
    impl EmailRelay for MockRelay {
        async fn send(&self, params: &TemplateParams) -> Result<String, RelayError> {
            self.sent.lock().unwrap().push(params.clone());
            (self.answer)()
        }
    }

    /// State with no relay configured and default limits.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(None, RateLimiter::default())
    }

    /// State wired to `relay` with default limits.
    #[must_use]
    pub fn test_app_state_with_relay(relay: Arc<dyn EmailRelay>) -> AppState {
        AppState::new(Some(relay), RateLimiter::default())
    }

    /// State wired to `relay` with a per-client limit of `per_client`.
    #[must_use]
    pub fn test_app_state_with_limit(relay: Arc<dyn EmailRelay>, per_client: usize) -> AppState {
        let config = RateLimitConfig { per_client_limit: per_client, ..RateLimitConfig::default() };
        AppState::new(Some(relay), RateLimiter::new(config))
    }
}
