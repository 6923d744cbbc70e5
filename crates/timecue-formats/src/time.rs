//! Subtitle timestamp codec: `HH:MM:SS,mmm` / `HH:MM:SS.mmm`.

use crate::error::ParseError;

/// Values that decimal-round to an exact millisecond are often stored just
/// below it in binary (61.234 s sits a hair under 61234 ms); nudge before
/// truncating so they don't come out one short.
const MS_NUDGE: f64 = 1e-6;

/// Format seconds as `HH:MM:SS<sep>mmm`, zero-padded, milliseconds
/// truncated (not rounded) to 3 digits.
pub fn format_timestamp(seconds: f64, millis_sep: char) -> String {
    let total_ms = (seconds.max(0.0) * 1000.0 + MS_NUDGE).floor() as u64;
    let hours = total_ms / 3_600_000;
    let mins = (total_ms % 3_600_000) / 60_000;
    let secs = (total_ms % 60_000) / 1_000;
    let millis = total_ms % 1_000;
    format!("{hours:02}:{mins:02}:{secs:02}{millis_sep}{millis:03}")
}

/// Parse `HH:MM:SS,mmm` or `HH:MM:SS.mmm` back into seconds.
pub fn parse_timestamp(value: &str) -> Result<f64, ParseError> {
    let invalid = || ParseError::InvalidTimestamp {
        value: value.to_owned(),
    };
    // SRT uses a comma for the millisecond delimiter, WebVTT a dot.
    let normalized = value.trim().replace(',', ".");
    let parts: Vec<&str> = normalized.split(':').collect();
    if parts.len() != 3 {
        return Err(invalid());
    }
    let hours: f64 = parts[0].parse().map_err(|_| invalid())?;
    let mins: f64 = parts[1].parse().map_err(|_| invalid())?;
    let secs: f64 = parts[2].parse().map_err(|_| invalid())?;
    if hours < 0.0 || mins < 0.0 || secs < 0.0 {
        return Err(invalid());
    }
    Ok(hours * 3600.0 + mins * 60.0 + secs)
}

/// Parse a `<start> --> <end>` cue timing line.
pub(crate) fn parse_timing_line(line: &str, line_no: usize) -> Result<(f64, f64), ParseError> {
    let mut parts = line.splitn(2, "-->");
    let start = parts.next().unwrap_or_default().trim();
    let end = parts.next().ok_or_else(|| ParseError::InvalidCue {
        line: line_no,
        reason: "no --> separator".into(),
    })?;
    // WebVTT allows cue settings after the end timestamp; take the first
    // whitespace-delimited token.
    let end = end.trim().split_whitespace().next().unwrap_or_default();
    Ok((parse_timestamp(start)?, parse_timestamp(end)?))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
