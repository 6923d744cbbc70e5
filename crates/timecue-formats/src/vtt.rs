//! WebVTT rendering and re-ingestion.

use timecue_core::{CanonicalSegment, TimedTranscript};

use crate::error::ParseError;
use crate::time::{format_timestamp, parse_timing_line};

/// Render a transcript as WebVTT: the `WEBVTT` header, then the same cue
/// ordering and timing as SRT with `.` as the millisecond delimiter and no
/// index lines.
pub fn render(transcript: &TimedTranscript) -> String {
    let mut out = String::from("WEBVTT\n\n");
    for s in transcript.segments() {
        out.push_str(&format_timestamp(s.segment.start_seconds, '.'));
        out.push_str(" --> ");
        out.push_str(&format_timestamp(s.segment.end_seconds, '.'));
        out.push('\n');
        out.push_str(&s.segment.text);
        out.push_str("\n\n");
    }
    out
}

/// Parse the WebVTT dialect [`render`] produces. Cue identifier lines are
/// tolerated and skipped; `NOTE`/`STYLE`/`REGION` blocks are skipped whole.
pub fn parse(input: &str) -> Result<Vec<CanonicalSegment>, ParseError> {
    let lines: Vec<&str> = input.lines().collect();
    let first = lines
        .first()
        .map(|l| l.trim().trim_start_matches('\u{FEFF}'))
        .unwrap_or_default();
    if !first.starts_with("WEBVTT") {
        return Err(ParseError::MissingHeader);
    }

    let mut segments = Vec::new();
    let mut i = 1;
    while i < lines.len() {
        let line = lines[i].trim();
        if line.is_empty() {
            i += 1;
            continue;
        }
        if line.starts_with("NOTE") || line.starts_with("STYLE") || line.starts_with("REGION") {
            i = skip_block(&lines, i);
            continue;
        }

        // A cue may carry an identifier line before its timing line.
        let header = if line.contains("-->") {
            line
        } else {
            i += 1;
            lines
                .get(i)
                .map(|l| l.trim())
                .ok_or_else(|| ParseError::InvalidCue {
                    line: i,
                    reason: "file ends after cue identifier".into(),
                })?
        };
        let (start_seconds, end_seconds) = parse_timing_line(header, i)?;
        i += 1;

        let mut text_lines = Vec::new();
        while i < lines.len() && !lines[i].trim().is_empty() {
            text_lines.push(lines[i].trim());
            i += 1;
        }
        segments.push(CanonicalSegment {
            start_seconds,
            end_seconds,
            text: text_lines.join(" "),
        });
    }

    Ok(segments)
}

fn skip_block(lines: &[&str], mut i: usize) -> usize {
    i += 1;
    while i < lines.len() && !lines[i].trim().is_empty() {
        i += 1;
    }
    i
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
