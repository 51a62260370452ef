// Duration formatting and parsing

use crate::models::Locale;
use anyhow::Result;

/// Placeholder shown when a value cannot be formatted
pub const PLACEHOLDER: &str = "-";

/// Render a whole number of seconds, picking the unit by magnitude
fn format_whole_seconds(secs: u64, locale: Locale) -> String {
    match locale {
        Locale::ZhCn => {
            if secs < 60 {
                format!("{}秒", secs)
            } else if secs < 3600 {
                format!("{}分{}秒", secs / 60, secs % 60)
            } else {
                format!("{}时{}分", secs / 3600, (secs % 3600) / 60)
            }
        }
        Locale::En => {
            if secs < 60 {
                format!("{}s", secs)
            } else if secs < 3600 {
                format!("{}m{}s", secs / 60, secs % 60)
            } else {
                format!("{}h{}m", secs / 3600, (secs % 3600) / 60)
            }
        }
    }
}

/// Format a millisecond duration (e.g. "45秒", "2分5秒", "1时30分").
///
/// Milliseconds are rounded to the nearest second (half up) before the unit is chosen.
/// Negative durations render as the placeholder.
pub fn format_duration_ms(ms: i64) -> String {
    format_duration_ms_in(ms, Locale::ZhCn)
}

pub fn format_duration_ms_in(ms: i64, locale: Locale) -> String {
    if ms < 0 {
        return PLACEHOLDER.to_string();
    }
    let secs = ms.saturating_add(500) / 1000;
    format_whole_seconds(secs as u64, locale)
}

/// Format a duration given in (possibly fractional) seconds.
///
/// `None` is missing and renders the placeholder; `Some(0.0)` is a real zero duration.
pub fn format_duration_sec(seconds: Option<f64>) -> String {
    format_duration_sec_in(seconds, Locale::ZhCn)
}

pub fn format_duration_sec_in(seconds: Option<f64>, locale: Locale) -> String {
    match seconds {
        Some(secs) if secs.is_finite() => {
            let ms = secs * 1000.0;
            // Checked before truncation so -0.0003s stays negative
            if ms < 0.0 {
                return PLACEHOLDER.to_string();
            }
            format_duration_ms_in(ms as i64, locale)
        }
        _ => PLACEHOLDER.to_string(),
    }
}

/// Parse a duration expression and return milliseconds
///
/// Accepts a bare number of milliseconds ("3000") or unit groups in any order
/// of h, m, s, ms ("1h30m", "2s", "1s500ms").
pub fn parse_duration_ms(expr: &str) -> Result<u64> {
    let expr = expr.trim();
    if let Ok(ms) = expr.parse::<u64>() {
        return Ok(ms);
    }

    let mut total_ms = 0u64;
    let mut remaining = expr;

    while !remaining.is_empty() {
        let digits_end = remaining
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(remaining.len());
        if digits_end == 0 {
            anyhow::bail!("Invalid duration format: {}", expr);
        }
        let value: u64 = remaining[..digits_end].parse()?;
        let rest = &remaining[digits_end..];

        // "ms" must be tried before "m"
        let (factor, unit_len) = if rest.starts_with("ms") {
            (1, 2)
        } else if rest.starts_with('h') {
            (3_600_000, 1)
        } else if rest.starts_with('m') {
            (60_000, 1)
        } else if rest.starts_with('s') {
            (1000, 1)
        } else {
            anyhow::bail!("Invalid duration format: {}", expr);
        };

        total_ms = value
            .checked_mul(factor)
            .and_then(|v| total_ms.checked_add(v))
            .ok_or_else(|| anyhow::anyhow!("Duration too large: {}", expr))?;
        remaining = &rest[unit_len..];
    }

    if total_ms == 0 {
        anyhow::bail!("Duration must be greater than 0");
    }

    Ok(total_ms)
}
