use crate::format::ns_to_ms;

use super::types::PercentileValue;

/// Percentile points shown in the report, in order.
pub const PERCENTILE_POINTS: [u8; 9] = [50, 66, 75, 80, 90, 95, 98, 99, 100];
/// Percentile that always resolves to the slowest sample.
pub const LONGEST_PERCENTILE: u8 = 100;
/// Divisor for percent values.
const PERCENT_DIVISOR: usize = 100;

/// Index into an ascending sample set of `len` elements for `percent`.
///
/// Uses `floor(percent * len / 100)`; the longest percentile maps to the last
/// element instead.
#[must_use]
pub fn percentile_index(percent: u8, len: usize) -> Option<usize> {
    let last = len.checked_sub(1)?;
    if percent >= LONGEST_PERCENTILE {
        return Some(last);
    }
    usize::from(percent)
        .checked_mul(len)?
        .checked_div(PERCENT_DIVISOR)
}

pub(super) fn percentile_table(sorted_ns: &[u128]) -> Vec<PercentileValue> {
    PERCENTILE_POINTS
        .iter()
        .filter_map(|&percent| {
            let index = percentile_index(percent, sorted_ns.len())?;
            let value = sorted_ns.get(index)?;
            Some(PercentileValue {
                percent,
                latency_ms: ns_to_ms(*value),
            })
        })
        .collect()
}
