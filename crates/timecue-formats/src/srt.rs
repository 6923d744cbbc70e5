//! SRT (SubRip) rendering and re-ingestion.

use timecue_core::{CanonicalSegment, TimedTranscript};

use crate::error::ParseError;
use crate::time::{format_timestamp, parse_timing_line};

/// Render a transcript as SRT:
///
/// ```text
/// <index>
/// HH:MM:SS,mmm --> HH:MM:SS,mmm
/// <text>
///
/// ```
///
/// Indices are 1-based in segment order.
pub fn render(transcript: &TimedTranscript) -> String {
    let mut out = String::new();
    for (i, s) in transcript.segments().iter().enumerate() {
        out.push_str(&(i + 1).to_string());
        out.push('\n');
        out.push_str(&format_timestamp(s.segment.start_seconds, ','));
        out.push_str(" --> ");
        out.push_str(&format_timestamp(s.segment.end_seconds, ','));
        out.push('\n');
        out.push_str(&s.segment.text);
        out.push_str("\n\n");
    }
    out
}

/// Parse the SRT dialect [`render`] produces (index optional, multi-line
/// cue text joined with spaces).
pub fn parse(input: &str) -> Result<Vec<CanonicalSegment>, ParseError> {
    let lines: Vec<&str> = input.lines().collect();
    let mut segments = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if lines[i].trim().is_empty() {
            i += 1;
            continue;
        }

        let mut header = lines[i].trim();
        if is_index_line(header) {
            i += 1;
            header = lines
                .get(i)
                .map(|l| l.trim())
                .ok_or_else(|| ParseError::InvalidCue {
                    line: i,
                    reason: "file ends after cue index".into(),
                })?;
        }
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

fn is_index_line(line: &str) -> bool {
    !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use timecue_core::{AnnotatedSegment, SegmentFlags};

    fn transcript(specs: &[(f64, f64, &str)]) -> TimedTranscript {
        let segments = specs
            .iter()
            .map(|&(start, end, text)| AnnotatedSegment {
                segment: CanonicalSegment {
                    start_seconds: start,
                    end_seconds: end,
                    text: text.into(),
                },
                flags: SegmentFlags::default(),
            })
            .collect();
        TimedTranscript::new(segments, None)
    }

    #[test]
    fn renders_the_subrip_layout() {
        let t = transcript(&[(0.0, 2.5, "Hello world"), (2.5, 5.0, "This is a test")]);
        let srt = render(&t);
        assert_eq!(
            srt,
            "1\n00:00:00,000 --> 00:00:02,500\nHello world\n\n\
             2\n00:00:02,500 --> 00:00:05,000\nThis is a test\n\n"
        );
    }

    #[test]
    fn renders_the_minute_boundary_literal() {
        let t = transcript(&[(61.234, 65.0, "hello")]);
        let srt = render(&t);
        assert!(srt.contains("00:01:01,234 --> 00:01:05,000"), "{srt}");
    }

    #[test]
    fn empty_transcript_renders_nothing() {
        assert_eq!(render(&transcript(&[])), "");
    }

    #[test]
    fn parses_own_output() {
        let t = transcript(&[(3.4, 6.177, "In this lesson"), (6.177, 10.009, "finance")]);
        let parsed = parse(&render(&t)).expect("parse");
        assert_eq!(parsed.len(), 2);
        assert!((parsed[0].start_seconds - 3.4).abs() <= 0.001);
        assert!((parsed[0].end_seconds - 6.177).abs() <= 0.001);
        assert_eq!(parsed[0].text, "In this lesson");
        assert!((parsed[1].start_seconds - 6.177).abs() <= 0.001);
    }

    #[test]
    fn parses_cues_without_index_lines() {
        let input = "00:00:01,000 --> 00:00:04,000\nHello world\n";
        let parsed = parse(input).expect("parse");
        assert_eq!(parsed.len(), 1);
        assert!((parsed[0].start_seconds - 1.0).abs() < 1e-9);
        assert_eq!(parsed[0].text, "Hello world");
    }

    #[test]
    fn joins_multi_line_cue_text() {
        let input = "1\n00:00:01,000 --> 00:00:04,000\nline one\nline two\n";
        let parsed = parse(input).expect("parse");
        assert_eq!(parsed[0].text, "line one line two");
    }

    #[test]
    fn rejects_cue_without_arrow() {
        let input = "1\n00:00:01,000 00:00:04,000\nHello\n";
        assert_matches!(parse(input), Err(ParseError::InvalidCue { .. }));
    }

    #[test]
    fn rejects_index_at_end_of_file() {
        assert_matches!(parse("1\n"), Err(ParseError::InvalidCue { .. }));
    }

    #[test]
    fn empty_input_parses_to_no_segments() {
        assert_eq!(parse("").expect("parse"), Vec::new());
        assert_eq!(parse("\n\n").expect("parse"), Vec::new());
    }
}
