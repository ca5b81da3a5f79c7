use std::time::Duration;

use super::QueryLabel;

/// Leading token of every query log line.
pub const QUERY_MARKER: &str = "Query -->";

/// Suffix appended to lines of fallible calls that returned an error.
pub const FAILED_SUFFIX: &str = "(failed)";

/// Renders `elapsed` in milliseconds with two significant digits.
///
/// Both digits are always printed, trailing zeros included: `2.0`, `0.10`,
/// `0.0010`, `1.6`, `120`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let millis = elapsed.as_secs_f64() * 1000.0;
    if millis <= 0.0 || !millis.is_finite() {
        return "0.0".to_string();
    }

    let rounded = round_significant(millis, 2);
    let magnitude = rounded.log10().floor() as i32;
    if magnitude >= 1 {
        format!("{rounded:.0}")
    } else {
        let decimals = (1 - magnitude) as usize;
        format!("{rounded:.decimals$}")
    }
}

/// `Query -->  User.insert_one() --> 1.6 ms`
pub fn format_query_line(
    label: &QueryLabel,
    elapsed: Duration,
) -> String {
    format!("{QUERY_MARKER}  {label} --> {} ms", format_elapsed(elapsed))
}

pub fn format_failed_query_line(
    label: &QueryLabel,
    elapsed: Duration,
) -> String {
    format!("{} {FAILED_SUFFIX}", format_query_line(label, elapsed))
}

fn round_significant(
    value: f64,
    digits: i32,
) -> f64 {
    let magnitude = value.log10().floor() as i32;
    let factor = 10f64.powi(digits - 1 - magnitude);
    (value * factor).round() / factor
}
