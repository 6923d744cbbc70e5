//! Post-assembly timing analysis.
//!
//! A pure report over a finished transcript, for operators and accuracy
//! checks: aggregate statistics plus human-readable issues and warnings.
//! Complements the per-batch diagnostics — those count what the normalizer
//! corrected, this inspects what the transcript still claims.

use serde::{Deserialize, Serialize};
use timecue_core::TimedTranscript;

/// Segments longer than this draw a warning.
const LONG_SEGMENT_SECONDS: f64 = 30.0;
/// Segments shorter than this draw a warning.
const SHORT_SEGMENT_SECONDS: f64 = 0.1;
/// Neighbouring segments may overlap by up to this much before it is an
/// issue.
const OVERLAP_TOLERANCE_SECONDS: f64 = 1.0;
/// Coverage below this ratio of the clip is an issue (scale-error
/// signature); above [`HIGH_COVERAGE_RATIO`] it is a warning.
const LOW_COVERAGE_RATIO: f64 = 0.1;
/// Coverage above this ratio of the clip draws a warning.
const HIGH_COVERAGE_RATIO: f64 = 2.0;

/// Aggregate timing statistics over a non-empty transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingStats {
    /// Start of the earliest segment.
    pub first_start: f64,
    /// End of the latest-ending segment.
    pub last_end: f64,
    /// Mean segment duration in seconds.
    pub avg_segment_seconds: f64,
    /// Shortest segment duration in seconds.
    pub min_segment_seconds: f64,
    /// Longest segment duration in seconds.
    pub max_segment_seconds: f64,
    /// `last_end / clip duration`, when the clip duration is known.
    pub coverage_ratio: Option<f64>,
}

/// Timing report: statistics plus issue and warning messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingReport {
    /// Number of segments inspected.
    pub segment_count: usize,
    /// Aggregate statistics; absent for an empty transcript.
    pub stats: Option<TimingStats>,
    /// Problems that indicate corrupted timing.
    pub issues: Vec<String>,
    /// Oddities worth an operator's glance.
    pub warnings: Vec<String>,
}

impl TimingReport {
    /// Whether the report carries no issues and no warnings.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty() && self.warnings.is_empty()
    }
}

/// Inspect a transcript's timing and produce a [`TimingReport`].
pub fn analyze(transcript: &TimedTranscript, clip_duration_seconds: Option<f64>) -> TimingReport {
    let segments = transcript.segments();
    if segments.is_empty() {
        return TimingReport {
            segment_count: 0,
            stats: None,
            issues: vec!["no timed segments".into()],
            warnings: Vec::new(),
        };
    }

    let mut issues = Vec::new();
    let mut warnings = Vec::new();

    let mut first_start = f64::INFINITY;
    let mut last_end: f64 = 0.0;
    let mut total = 0.0;
    let mut min_dur = f64::INFINITY;
    let mut max_dur: f64 = 0.0;

    for (i, s) in segments.iter().enumerate() {
        let (start, end) = (s.segment.start_seconds, s.segment.end_seconds);
        let duration = s.segment.duration_seconds();
        first_start = first_start.min(start);
        last_end = last_end.max(end);
        total += duration;
        min_dur = min_dur.min(duration);
        max_dur = max_dur.max(duration);

        if start < 0.0 {
            issues.push(format!("segment {i}: negative start time ({start})"));
        }
        if end <= start {
            issues.push(format!(
                "segment {i}: end time not after start time ({start} -> {end})"
            ));
        }
        if duration > LONG_SEGMENT_SECONDS {
            warnings.push(format!("segment {i}: very long segment ({duration:.1}s)"));
        } else if duration < SHORT_SEGMENT_SECONDS {
            warnings.push(format!("segment {i}: very short segment ({duration:.3}s)"));
        }
    }

    for (i, pair) in segments.windows(2).enumerate() {
        let current_end = pair[0].segment.end_seconds;
        let next_start = pair[1].segment.start_seconds;
        if current_end > next_start + OVERLAP_TOLERANCE_SECONDS {
            issues.push(format!(
                "segments {i}-{}: overlap ({current_end} > {next_start})",
                i + 1
            ));
        }
    }

    let coverage_ratio = clip_duration_seconds
        .filter(|clip| *clip > 0.0)
        .map(|clip| last_end / clip);
    if let Some(ratio) = coverage_ratio {
        if ratio < LOW_COVERAGE_RATIO {
            issues.push(format!(
                "timestamps cover {ratio:.3} of the clip; a wrong seconds-per-unit factor compresses the whole transcript like this"
            ));
        } else if ratio > HIGH_COVERAGE_RATIO {
            warnings.push(format!(
                "timestamps cover {ratio:.3} of the clip; ends run far past the audio"
            ));
        }
    }

    TimingReport {
        segment_count: segments.len(),
        stats: Some(TimingStats {
            first_start,
            last_end,
            avg_segment_seconds: total / segments.len() as f64,
            min_segment_seconds: min_dur,
            max_segment_seconds: max_dur,
            coverage_ratio,
        }),
        issues,
        warnings,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
