//! Change arithmetic shared by both delta engines.

/// Round to one decimal place, half away from zero.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `current - previous` as a signed unit change.
///
/// Exact for counts up to [`MAX_UNITS`](crate::model::MAX_UNITS); beyond that
/// the result saturates instead of wrapping.
pub fn signed_change(current: u64, previous: u64) -> i64 {
    let change = i128::from(current) - i128::from(previous);
    i64::try_from(change).unwrap_or(if change < 0 { i64::MIN } else { i64::MAX })
}

/// Percent change relative to `previous`, or `None` when `previous` is zero.
pub fn percent_change(change: i64, previous: u64) -> Option<f64> {
    if previous == 0 {
        return None;
    }
    Some(round_one_decimal(change as f64 / previous as f64 * 100.0))
}
