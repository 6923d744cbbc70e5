//! Ordering, totals and the aggregate scale check.

use timecue_core::{
    AnnotatedSegment, BatchDiagnostics, ScaleSuspicion, SuspicionCause, TimedTranscript,
};

use crate::config::NormalizeConfig;

/// Tallies accumulated by the pipeline before assembly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeCounts {
    /// Raw records received from the backend.
    pub total_records: usize,
    /// Segments dropped for empty text.
    pub dropped_empty: usize,
    /// Records matching neither shape.
    pub malformed: usize,
}

/// Assemble kept segments into an ordered transcript plus diagnostics.
///
/// Ordering is delegated to [`TimedTranscript::new`] (stable sort by start
/// time; no ordering assumption is made about the input). Flag counts are
/// aggregated from the immutable per-segment metadata, and the scale
/// heuristics decide whether the batch as a whole looks mis-scaled.
pub fn assemble(
    segments: Vec<AnnotatedSegment>,
    counts: OutcomeCounts,
    clip_duration_seconds: Option<f64>,
    config: &NormalizeConfig,
) -> (TimedTranscript, BatchDiagnostics) {
    let transcript = TimedTranscript::new(segments, clip_duration_seconds);
    let corrected = transcript
        .segments()
        .iter()
        .filter(|s| s.flags.corrected)
        .count();
    let out_of_bounds = transcript
        .segments()
        .iter()
        .filter(|s| s.flags.out_of_bounds)
        .count();
    let scale_suspicion = suspect_scale(&transcript, out_of_bounds, clip_duration_seconds, config);
    let diagnostics = BatchDiagnostics {
        total_records: counts.total_records,
        kept: transcript.len(),
        corrected,
        out_of_bounds,
        dropped_empty: counts.dropped_empty,
        malformed: counts.malformed,
        scale_suspicion,
    };
    (transcript, diagnostics)
}

/// Decide whether the flag pattern implicates the unit scale itself.
///
/// Two heuristics, in order:
/// 1. The fraction of out-of-bounds segments reaches the configured
///    threshold — a too-large seconds-per-unit factor pushes ends past the
///    clip.
/// 2. The transcript covers almost none of the known clip (last end /
///    clip duration below the configured ratio) — a too-small factor
///    compresses an entire hour into seconds.
fn suspect_scale(
    transcript: &TimedTranscript,
    out_of_bounds: usize,
    clip_duration_seconds: Option<f64>,
    config: &NormalizeConfig,
) -> Option<ScaleSuspicion> {
    let kept = transcript.len();
    if kept == 0 {
        return None;
    }
    let last_end = transcript
        .segments()
        .iter()
        .map(|s| s.segment.end_seconds)
        .fold(0.0, f64::max);
    let coverage_ratio = clip_duration_seconds
        .filter(|clip| *clip > 0.0)
        .map(|clip| last_end / clip);

    let fraction = out_of_bounds as f64 / kept as f64;
    if fraction >= config.suspect_flag_fraction && out_of_bounds > 0 {
        return Some(ScaleSuspicion {
            flagged: out_of_bounds,
            total: kept,
            coverage_ratio,
            cause: SuspicionCause::OutOfBoundsFraction,
        });
    }
    if let Some(ratio) = coverage_ratio {
        if ratio < config.min_coverage_ratio {
            return Some(ScaleSuspicion {
                flagged: kept,
                total: kept,
                coverage_ratio: Some(ratio),
                cause: SuspicionCause::LowCoverage,
            });
        }
    }
    None
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
