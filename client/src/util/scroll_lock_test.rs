use super::*;

#[test]
fn locked_body_hides_overflow() {
    assert_eq!(body_overflow(true), Some("hidden"));
}

#[test]
fn unlocked_body_clears_overflow() {
    assert_eq!(body_overflow(false), None);
}
