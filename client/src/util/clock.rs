//! Calendar year for the footer.
//!
//! Both render paths read the UTC clock, so the server markup and the hydrated
//! footer agree.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::OffsetDateTime;

/// Current calendar year (UTC).
#[must_use]
pub fn current_year() -> i32 {
    year_of(OffsetDateTime::now_utc())
}

#[must_use]
pub fn year_of(at: OffsetDateTime) -> i32 {
    at.year()
}
