//! Canonical segment and transcript types.

use serde::{Deserialize, Serialize};

/// A single backend-agnostic transcript segment with seconds-based timing.
///
/// Invariants, established by the normalizer and relied on by renderers:
/// `0 ≤ start_seconds ≤ end_seconds`, both finite; `text` is non-empty and
/// single-line (see [`crate::text::clean_text`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalSegment {
    /// Segment start, seconds from the beginning of the clip.
    pub start_seconds: f64,
    /// Segment end, seconds from the beginning of the clip.
    pub end_seconds: f64,
    /// Cleaned segment text.
    pub text: String,
}

impl CanonicalSegment {
    /// Length of the segment in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.end_seconds - self.start_seconds
    }
}

/// Correction metadata attached to a segment by the normalizer.
///
/// Flags travel with the segment as immutable data instead of being logged
/// as a side effect, so aggregate checks over them stay pure and testable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentFlags {
    /// End time preceded start time and was collapsed to a zero-length
    /// segment.
    pub corrected: bool,
    /// End time exceeds the known clip duration beyond tolerance. Never
    /// clamped: an overrun is the canonical signature of a wrong
    /// seconds-per-unit factor and must stay visible.
    pub out_of_bounds: bool,
}

/// A canonical segment together with its correction flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedSegment {
    /// The canonical segment.
    pub segment: CanonicalSegment,
    /// Correction metadata for this segment.
    pub flags: SegmentFlags,
}

/// An ordered, seconds-based transcript ready for rendering.
///
/// Segments are kept sorted by start time (stable: ties keep insertion
/// order). A `TimedTranscript` only exists for batches whose unit scale
/// resolved, so renderers never see raw-unit data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedTranscript {
    segments: Vec<AnnotatedSegment>,
    total_duration_seconds: f64,
}

impl TimedTranscript {
    /// Build a transcript from segments and a known clip duration (if any).
    ///
    /// Segments are stably sorted by start time; the total duration is the
    /// larger of the clip duration and the last segment end.
    pub fn new(mut segments: Vec<AnnotatedSegment>, clip_duration_seconds: Option<f64>) -> Self {
        segments.sort_by(|a, b| a.segment.start_seconds.total_cmp(&b.segment.start_seconds));
        // The chronologically last segment is not necessarily the one ending
        // latest, so take the max over all ends.
        let last_end = segments
            .iter()
            .map(|s| s.segment.end_seconds)
            .fold(0.0, f64::max);
        let total_duration_seconds = clip_duration_seconds.unwrap_or(0.0).max(last_end);
        Self {
            segments,
            total_duration_seconds,
        }
    }

    /// Segments in chronological order.
    pub fn segments(&self) -> &[AnnotatedSegment] {
        &self.segments
    }

    /// The larger of the known clip duration and the last segment end.
    pub fn total_duration_seconds(&self) -> f64 {
        self.total_duration_seconds
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the transcript holds no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
