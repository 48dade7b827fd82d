use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use super::*;

fn ip(last: u8) -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(203, 0, 113, last))
}

fn small_limiter() -> RateLimiter {
    RateLimiter::new(RateLimitConfig {
        per_client_limit: 2,
        per_client_window: Duration::from_secs(600),
        global_limit: 3,
        global_window: Duration::from_secs(60),
    })
}

#[test]
fn defaults_match_contact_policy() {
    let cfg = RateLimitConfig::default();
    assert_eq!(cfg.per_client_limit, 5);
    assert_eq!(cfg.per_client_window, Duration::from_secs(600));
    assert_eq!(cfg.global_limit, 30);
    assert_eq!(cfg.global_window, Duration::from_secs(60));
}

#[test]
fn per_client_limit_blocks_after_max() {
    let rl = small_limiter();
    let now = Instant::now();

    assert!(rl.check_and_record_at(ip(1), now).is_ok());
    assert!(rl.check_and_record_at(ip(1), now).is_ok());
    assert_eq!(
        rl.check_and_record_at(ip(1), now),
        Err(RateLimitError::PerClientExceeded { limit: 2, window_secs: 600 })
    );
}

#[test]
fn other_clients_unaffected_by_one_noisy_address() {
    let rl = small_limiter();
    let now = Instant::now();

    rl.check_and_record_at(ip(1), now).unwrap();
    rl.check_and_record_at(ip(1), now).unwrap();
    assert!(rl.check_and_record_at(ip(1), now).is_err());
    assert!(rl.check_and_record_at(ip(2), now).is_ok());
}

#[test]
fn global_limit_blocks_all_clients() {
    let rl = small_limiter();
    let now = Instant::now();

    for last in 1..=3 {
        rl.check_and_record_at(ip(last), now).unwrap();
    }
    assert_eq!(
        rl.check_and_record_at(ip(9), now),
        Err(RateLimitError::GlobalExceeded { limit: 3, window_secs: 60 })
    );
}

#[test]
fn rejected_request_does_not_consume_quota() {
    let rl = small_limiter();
    let now = Instant::now();

    rl.check_and_record_at(ip(1), now).unwrap();
    rl.check_and_record_at(ip(1), now).unwrap();
    for _ in 0..5 {
        assert!(rl.check_and_record_at(ip(1), now).is_err());
    }
    // Only the two accepted requests count toward the global window.
    assert!(rl.check_and_record_at(ip(2), now).is_ok());
}

#[test]
fn window_expiry_allows_new_requests() {
    let rl = small_limiter();
    let start = Instant::now();

    rl.check_and_record_at(ip(1), start).unwrap();
    rl.check_and_record_at(ip(1), start).unwrap();
    assert!(rl.check_and_record_at(ip(1), start).is_err());

    let later = start + Duration::from_secs(601);
    assert!(rl.check_and_record_at(ip(1), later).is_ok());
}

#[test]
fn global_window_expires_independently() {
    let rl = small_limiter();
    let start = Instant::now();

    for last in 1..=3 {
        rl.check_and_record_at(ip(last), start).unwrap();
    }
    assert!(rl.check_and_record_at(ip(4), start).is_err());
    assert!(rl.check_and_record_at(ip(4), start + Duration::from_secs(61)).is_ok());
}

#[test]
fn drained_addresses_are_forgotten() {
    let rl = small_limiter();
    let start = Instant::now();

    rl.check_and_record_at(ip(1), start).unwrap();
    rl.check_and_record_at(IpAddr::V6(Ipv6Addr::LOCALHOST), start + Duration::from_secs(700))
        .unwrap();

    let inner = rl.inner.lock().unwrap();
    assert_eq!(inner.client_requests.len(), 1);
    assert!(inner.client_requests.contains_key(&IpAddr::V6(Ipv6Addr::LOCALHOST)));
}

#[test]
fn env_parse_falls_back_on_garbage() {
    let key = "__TEST_CONTACT_RATE_LIMIT_GARBAGE_5531__";
    unsafe { std::env::set_var(key, "lots") };
    assert_eq!(env_parse(key, 7_usize), 7);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn error_messages_name_the_window() {
    let err = RateLimitError::PerClientExceeded { limit: 5, window_secs: 600 };
    assert_eq!(err.to_string(), "per-client rate limit exceeded (max 5 requests/600s)");
}
