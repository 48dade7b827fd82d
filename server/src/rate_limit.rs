//! In-memory rate limiting for contact submissions.
//!
//! DESIGN
//! ======
//! Sliding-window counters backed by `HashMap<IpAddr, VecDeque<Instant>>`.
//! Two limits enforced:
//! - Per-client: 5 submissions / 10 min per remote address
//! - Global: 30 relay calls / min across all clients
//!
//! Both limits are checked before anything is recorded, so a rejected
//! request never consumes quota.

use std::collections::{HashMap, VecDeque};
use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

const DEFAULT_PER_CLIENT_LIMIT: usize = 5;
const DEFAULT_PER_CLIENT_WINDOW_SECS: u64 = 600;

const DEFAULT_GLOBAL_LIMIT: usize = 30;
const DEFAULT_GLOBAL_WINDOW_SECS: u64 = 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_client_limit: usize,
    pub per_client_window: Duration,
    pub global_limit: usize,
    pub global_window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            per_client_limit: DEFAULT_PER_CLIENT_LIMIT,
            per_client_window: Duration::from_secs(DEFAULT_PER_CLIENT_WINDOW_SECS),
            global_limit: DEFAULT_GLOBAL_LIMIT,
            global_window: Duration::from_secs(DEFAULT_GLOBAL_WINDOW_SECS),
        }
    }
}

impl RateLimitConfig {
    /// Read limits from `CONTACT_RATE_LIMIT_*`; malformed values fall back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let per_client_window_secs =
            env_parse("CONTACT_RATE_LIMIT_PER_CLIENT_WINDOW_SECS", DEFAULT_PER_CLIENT_WINDOW_SECS);
        let global_window_secs = env_parse("CONTACT_RATE_LIMIT_GLOBAL_WINDOW_SECS", DEFAULT_GLOBAL_WINDOW_SECS);

        Self {
            per_client_limit: env_parse("CONTACT_RATE_LIMIT_PER_CLIENT", DEFAULT_PER_CLIENT_LIMIT),
            per_client_window: Duration::from_secs(per_client_window_secs),
            global_limit: env_parse("CONTACT_RATE_LIMIT_GLOBAL", DEFAULT_GLOBAL_LIMIT),
            global_window: Duration::from_secs(global_window_secs),
        }
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[allow(clippy::enum_variant_names)]
pub enum RateLimitError {
    #[error("per-client rate limit exceeded (max {limit} requests/{window_secs}s)")]
    PerClientExceeded { limit: usize, window_secs: u64 },
    #[error("global rate limit exceeded (max {limit} requests/{window_secs}s)")]
    GlobalExceeded { limit: usize, window_secs: u64 },
}

// =============================================================================
// RATE LIMITER
// =============================================================================

#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<Mutex<RateLimiterInner>>,
    config: RateLimitConfig,
}

#[derive(Default)]
struct RateLimiterInner {
    /// Per-address submission timestamps.
    client_requests: HashMap<IpAddr, VecDeque<Instant>>,
    /// Global submission timestamps.
    global_requests: VecDeque<Instant>,
}

impl RateLimiter {
    #[must_use]
    pub fn new(config: RateLimitConfig) -> Self {
        Self { inner: Arc::new(Mutex::new(RateLimiterInner::default())), config }
    }

    /// Check both per-client and global limits, then record the request.
    ///
    /// # Errors
    ///
    /// Returns the first limit that would be exceeded.
    pub fn check_and_record(&self, client: IpAddr) -> Result<(), RateLimitError> {
        self.check_and_record_at(client, Instant::now())
    }

    fn check_and_record_at(&self, client: IpAddr, now: Instant) -> Result<(), RateLimitError> {
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let cfg = self.config;

        prune_window(&mut inner.global_requests, now, cfg.global_window);
        if inner.global_requests.len() >= cfg.global_limit {
            return Err(RateLimitError::GlobalExceeded {
                limit: cfg.global_limit,
                window_secs: cfg.global_window.as_secs(),
            });
        }

        let client_deque = inner.client_requests.entry(client).or_default();
        prune_window(client_deque, now, cfg.per_client_window);
        if client_deque.len() >= cfg.per_client_limit {
            return Err(RateLimitError::PerClientExceeded {
                limit: cfg.per_client_limit,
                window_secs: cfg.per_client_window.as_secs(),
            });
        }

        client_deque.push_back(now);
        inner.global_requests.push_back(now);

        // Forget addresses whose window has fully drained.
        let window = cfg.per_client_window;
        inner
            .client_requests
            .retain(|_, deque| deque.back().is_some_and(|t| now.duration_since(*t) < window));

        Ok(())
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}

fn prune_window(deque: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(&front) = deque.front() {
        if now.duration_since(front) >= window {
            deque.pop_front();
        } else {
            break;
        }
    }
}

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod tests;
