//! Text formatting for clock readings and durations

use chrono::Duration;

/// Format a clock reading as `D:HH:MM:SS`, `H:MM:SS` or `MM:SS` by magnitude.
///
/// With `hide_seconds` the trailing seconds field is dropped. Negative values,
/// which only occur after the system clock jumps backwards, get a leading `-`.
pub fn format_clock(duration: Duration, hide_seconds: bool) -> String {
    if duration < Duration::zero() {
        return format!("-{}", format_clock(-duration, hide_seconds));
    }

    let total = duration.num_seconds();
    let seconds = total % 60;

    if duration > Duration::hours(24) {
        let (days, hours, minutes) = (total / 86_400, total / 3600 % 24, total / 60 % 60);
        if hide_seconds {
            format!("{}:{:02}:{:02}", days, hours, minutes)
        } else {
            format!("{}:{:02}:{:02}:{:02}", days, hours, minutes, seconds)
        }
    } else if duration > Duration::hours(1) {
        let (hours, minutes) = (total / 3600, total / 60 % 60);
        if hide_seconds {
            format!("{}:{:02}", hours, minutes)
        } else {
            format!("{}:{:02}:{:02}", hours, minutes, seconds)
        }
    } else {
        let minutes = total / 60;
        if hide_seconds {
            format!("{:02}", minutes)
        } else {
            format!("{:02}:{:02}", minutes, seconds)
        }
    }
}

/// Compact duration such as `25m0s`, `1h30m0s`, `45s`, `1.5s` or `500ms`.
pub fn format_span(duration: Duration) -> String {
    let sign = if duration < Duration::zero() { "-" } else { "" };
    let total_ms = duration.num_milliseconds().abs();
    if total_ms > 0 && total_ms < 1000 {
        return format!("{}{}ms", sign, total_ms);
    }

    let total = total_ms / 1000;
    let (hours, minutes) = (total / 3600, total / 60 % 60);
    let seconds = match total_ms % 1000 {
        0 => format!("{}s", total % 60),
        millis => {
            let fraction = format!("{:03}", millis);
            format!("{}.{}s", total % 60, fraction.trim_end_matches('0'))
        }
    };
    if hours > 0 {
        format!("{}{}h{}m{}", sign, hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}{}m{}", sign, minutes, seconds)
    } else {
        format!("{}{}", sign, seconds)
    }
}

/// Whole percent, zero-padded to three digits.
pub fn format_percent(percent: u8) -> String {
    format!("{:03}%", percent.min(100))
}

/// Parse a duration like `25m`, `1h30m`, `90s`, `1h2m3s` or `1500ms`.
///
/// A bare number is taken as minutes. Durations are stored as integer
/// nanoseconds, so anything beyond that range is rejected.
pub fn parse_span(input: &str) -> Result<Duration, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("empty duration".to_string());
    }
    if input.starts_with('-') {
        return Err(format!("negative duration '{}'", input));
    }
    let out_of_range = || format!("duration out of range '{}'", input);
    if let Ok(minutes) = input.parse::<i64>() {
        return Duration::try_minutes(minutes)
            .filter(fits_nanoseconds)
            .ok_or_else(out_of_range);
    }

    let mut total = Duration::zero();
    let mut rest = input;
    while !rest.is_empty() {
        let digits = rest
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(|| format!("missing unit in '{}'", input))?;
        if digits == 0 {
            return Err(format!("invalid duration '{}'", input));
        }
        let value: i64 = rest[..digits]
            .parse()
            .map_err(|_| format!("invalid duration '{}'", input))?;
        rest = &rest[digits..];

        let unit_len = rest
            .find(|c: char| c.is_ascii_digit())
            .unwrap_or(rest.len());
        let part = match &rest[..unit_len] {
            "h" => Duration::try_hours(value),
            "m" => Duration::try_minutes(value),
            "s" => Duration::try_seconds(value),
            "ms" => Duration::try_milliseconds(value),
            unit => return Err(format!("unknown unit '{}' in '{}'", unit, input)),
        };
        total = part
            .and_then(|part| total.checked_add(&part))
            .ok_or_else(out_of_range)?;
        rest = &rest[unit_len..];
    }
    if !fits_nanoseconds(&total) {
        return Err(out_of_range());
    }
    Ok(total)
}

fn fits_nanoseconds(duration: &Duration) -> bool {
    duration.num_nanoseconds().is_some()
}
