//! Timed-JSON rendering.
//!
//! The wire shape is always keyed — `{"start", "end", "text"}` — regardless
//! of the shape the backend emitted, so downstream consumers never see
//! positional raw-unit data.

use serde::{Deserialize, Serialize};
use timecue_core::TimedTranscript;

/// One segment in the timed-JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonSegment {
    /// Start in seconds.
    pub start: f64,
    /// End in seconds.
    pub end: f64,
    /// Cue text.
    pub text: String,
}

/// The timed-JSON document: `{"segments": [...], "total_duration": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonTranscript {
    /// Segments in chronological order.
    pub segments: Vec<JsonSegment>,
    /// The larger of the clip duration and the last segment end.
    pub total_duration: f64,
}

impl From<&TimedTranscript> for JsonTranscript {
    fn from(transcript: &TimedTranscript) -> Self {
        Self {
            segments: transcript
                .segments()
                .iter()
                .map(|s| JsonSegment {
                    start: s.segment.start_seconds,
                    end: s.segment.end_seconds,
                    text: s.segment.text.clone(),
                })
                .collect(),
            total_duration: transcript.total_duration_seconds(),
        }
    }
}

/// Render a transcript as a timed-JSON document.
pub fn render(transcript: &TimedTranscript) -> String {
    // Canonical segments hold only finite numbers and strings; serializing
    // them cannot fail.
    serde_json::to_string_pretty(&JsonTranscript::from(transcript))
        .expect("canonical transcript serializes")
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use timecue_core::{AnnotatedSegment, CanonicalSegment, SegmentFlags};

    fn transcript(specs: &[(f64, f64, &str)], clip: Option<f64>) -> TimedTranscript {
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
        TimedTranscript::new(segments, clip)
    }

    #[test]
    fn renders_keyed_segments_and_total() {
        let t = transcript(&[(0.0, 2.5, "Hello world")], Some(10.0));
        let doc: JsonTranscript = serde_json::from_str(&render(&t)).expect("parse back");
        assert_eq!(doc.segments.len(), 1);
        assert!((doc.segments[0].start - 0.0).abs() < f64::EPSILON);
        assert!((doc.segments[0].end - 2.5).abs() < f64::EPSILON);
        assert_eq!(doc.segments[0].text, "Hello world");
        assert!((doc.total_duration - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn field_names_match_the_wire_contract() {
        let t = transcript(&[(1.0, 2.0, "x")], None);
        let val: serde_json::Value = serde_json::from_str(&render(&t)).expect("parse back");
        assert!(val.get("segments").is_some());
        assert!(val.get("total_duration").is_some());
        let seg = &val["segments"][0];
        assert!(seg.get("start").is_some());
        assert!(seg.get("end").is_some());
        assert!(seg.get("text").is_some());
        // No raw-unit or flag fields leak into the wire shape.
        assert!(seg.get("start_unit").is_none());
        assert!(seg.get("flags").is_none());
    }

    #[test]
    fn empty_transcript_renders_empty_document() {
        let doc: JsonTranscript =
            serde_json::from_str(&render(&transcript(&[], None))).expect("parse back");
        assert!(doc.segments.is_empty());
        assert!((doc.total_duration - 0.0).abs() < f64::EPSILON);
    }
}
