//! Fixed-point helpers shared by the report and the notification.
//!
//! Rates and times are carried as scaled integers (`_x100`, `_x1000`) so the
//! rendered digits are stable across platforms.
use std::time::Duration;

/// Nanoseconds per millisecond.
pub(crate) const NS_PER_MS: u128 = 1_000_000;
/// Nanoseconds per hundredth of a second.
const NS_PER_CENTI_SEC: u128 = 10_000_000;
/// Divisor for two-decimal values.
const X100_DIVISOR: u64 = 100;
/// Divisor for three-decimal values.
const X1000_DIVISOR: u64 = 1_000;

pub(crate) fn format_x100(value: u64) -> String {
    format!("{}.{:02}", value / X100_DIVISOR, value % X100_DIVISOR)
}

pub(crate) fn format_x1000(value: u64) -> String {
    format!("{}.{:03}", value / X1000_DIVISOR, value % X1000_DIVISOR)
}

/// Divide rounding half up. A zero denominator yields zero.
pub(crate) fn div_round(numerator: u128, denominator: u128) -> u64 {
    let half = denominator >> 1;
    let value = numerator
        .saturating_add(half)
        .checked_div(denominator)
        .unwrap_or(0);
    u64::try_from(value).unwrap_or(u64::MAX)
}

/// Whole milliseconds, truncating the sub-millisecond part.
pub(crate) fn ns_to_ms(value: u128) -> u64 {
    u64::try_from(value.checked_div(NS_PER_MS).unwrap_or(0)).unwrap_or(u64::MAX)
}

pub(crate) fn elapsed_secs_x100(elapsed: Duration) -> u64 {
    div_round(elapsed.as_nanos(), NS_PER_CENTI_SEC)
}
