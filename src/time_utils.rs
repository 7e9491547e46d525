// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting and workout durations.

use chrono::{DateTime, Duration, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse a stored workout duration like `"1h23m45s"`.
///
/// Components are optional but must appear in h/m/s order; at least one is
/// required. Values outside their usual range ("90m") are accepted and
/// normalized by the arithmetic.
pub fn parse_duration(raw: &str) -> Option<Duration> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    let mut total_secs: i64 = 0;
    let mut num = String::new();
    let mut seen_unit = false;
    let mut last_unit_rank = 0u8;

    for c in s.chars() {
        if c.is_ascii_digit() {
            num.push(c);
            continue;
        }

        let (rank, factor) = match c {
            'h' => (1, 3600),
            'm' => (2, 60),
            's' => (3, 1),
            _ => return None,
        };

        // Units must be strictly descending and each needs a value.
        if num.is_empty() || rank <= last_unit_rank {
            return None;
        }
        last_unit_rank = rank;
        seen_unit = true;

        let value: i64 = num.parse().ok()?;
        total_secs = total_secs.checked_add(value.checked_mul(factor)?)?;
        num.clear();
    }

    // Trailing digits without a unit are malformed.
    if !seen_unit || !num.is_empty() {
        return None;
    }

    Some(Duration::seconds(total_secs))
}

/// Format a duration in the same `"1h23m45s"` component form `parse_duration`
/// accepts. Zero-valued leading components are omitted; zero overall is `"0s"`.
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.num_seconds().max(0);
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{}h", hours));
    }
    if minutes > 0 {
        out.push_str(&format!("{}m", minutes));
    }
    if seconds > 0 || out.is_empty() {
        out.push_str(&format!("{}s", seconds));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration_full() {
        assert_eq!(
            parse_duration("1h23m45s"),
            Some(Duration::seconds(3600 + 23 * 60 + 45))
        );
    }

    #[test]
    fn test_parse_duration_partial_components() {
        assert_eq!(parse_duration("45s"), Some(Duration::seconds(45)));
        assert_eq!(parse_duration("10m"), Some(Duration::seconds(600)));
        assert_eq!(parse_duration("2h"), Some(Duration::seconds(7200)));
        assert_eq!(parse_duration("1h5s"), Some(Duration::seconds(3605)));
    }

    #[test]
    fn test_parse_duration_unnormalized_values() {
        assert_eq!(parse_duration("90m"), Some(Duration::seconds(5400)));
    }

    #[test]
    fn test_parse_duration_rejects_malformed() {
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("abc"), None);
        assert_eq!(parse_duration("10"), None); // no unit
        assert_eq!(parse_duration("m5"), None); // unit without value
        assert_eq!(parse_duration("5s10m"), None); // out of order
        assert_eq!(parse_duration("1h2h"), None); // repeated unit
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::seconds(0)), "0s");
        assert_eq!(format_duration(Duration::seconds(45)), "45s");
        assert_eq!(format_duration(Duration::seconds(600)), "10m");
        assert_eq!(format_duration(Duration::seconds(3605)), "1h5s");
        assert_eq!(
            format_duration(Duration::seconds(3600 + 23 * 60 + 45)),
            "1h23m45s"
        );
    }

    #[test]
    fn test_format_parse_agreement() {
        let d = Duration::seconds(2 * 3600 + 15 * 60 + 9);
        assert_eq!(parse_duration(&format_duration(d)), Some(d));
    }
}
