//! Execution time parsing.
//!
//! Benchmark records encode durations either as a raw tick count
//! (`"123456 Ticks"`, 1 tick = 100ns) or as an `H:M:S` span whose seconds
//! may be fractional (`"0:00:01.5"`).

/// Ticks per millisecond.
pub const TICKS_PER_MS: f64 = 10_000.0;

const TICKS_SUFFIX: &str = "Ticks";

/// Parse an execution time string into milliseconds.
///
/// The tick form is tried first, then the `H:M:S` form. Returns `None` when
/// neither applies.
pub fn parse_execution_time(raw: &str) -> Option<f64> {
    parse_ticks(raw).or_else(|| parse_hms(raw))
}

fn parse_ticks(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let digits = trimmed
        .strip_suffix(TICKS_SUFFIX)
        .map(str::trim_end)
        .unwrap_or(trimmed);
    let ticks: i64 = digits.parse().ok()?;
    Some(ticks as f64 / TICKS_PER_MS)
}

fn parse_hms(raw: &str) -> Option<f64> {
    let parts: Vec<&str> = raw.trim().split(':').collect();
    let [hours, minutes, seconds] = parts.as_slice() else {
        return None;
    };

    let hours: i64 = hours.trim().parse().ok()?;
    let minutes: i64 = minutes.trim().parse().ok()?;
    let seconds: f64 = seconds.trim().parse().ok()?;
    if !seconds.is_finite() {
        return None;
    }

    let whole = hours.checked_mul(3600)?.checked_add(minutes.checked_mul(60)?)?;
    let ms = (whole as f64 + seconds) * 1000.0;
    ms.is_finite().then_some(ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks() {
        assert_eq!(parse_execution_time("100000 Ticks"), Some(10.0));
        assert_eq!(parse_execution_time("12345 Ticks"), Some(1.2345));
        assert_eq!(parse_execution_time("0 Ticks"), Some(0.0));
    }

    #[test]
    fn test_bare_tick_count() {
        assert_eq!(parse_execution_time("5000"), Some(0.5));
    }

    #[test]
    fn test_hms() {
        assert_eq!(parse_execution_time("0:00:01.5"), Some(1500.0));
        assert_eq!(parse_execution_time("1:02:03"), Some(3_723_000.0));
    }

    #[test]
    fn test_unparsable() {
        assert_eq!(parse_execution_time(""), None);
        assert_eq!(parse_execution_time("fast"), None);
        assert_eq!(parse_execution_time("1.5 Ticks"), None);
        assert_eq!(parse_execution_time("00:01"), None);
        assert_eq!(parse_execution_time("1.00:00:01"), None);
        assert_eq!(parse_execution_time("a:b:c"), None);
    }

    #[test]
    fn test_out_of_range_hms_is_dropped() {
        assert_eq!(parse_execution_time("9999999999999999:00:00"), None);
        assert_eq!(parse_execution_time("0:9999999999999999999:00"), None);
        assert_eq!(parse_execution_time("0:00:1e308"), None);
    }
}
