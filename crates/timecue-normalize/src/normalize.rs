//! Raw-value conversion and post-conversion correction.

use timecue_core::text::clean_text;
use timecue_core::{AnnotatedSegment, CanonicalSegment, SegmentFlags};

use crate::config::NormalizeConfig;
use crate::ingest::RawSegment;
use crate::scale::UnitSpec;

/// Relative clip-overrun tolerance before a segment is flagged.
const BOUNDS_TOLERANCE_REL: f64 = 0.01;
/// Absolute clip-overrun tolerance in seconds; the larger of the two wins.
const BOUNDS_TOLERANCE_ABS_SECONDS: f64 = 0.5;

/// Outcome of normalizing one classified record.
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentOutcome {
    /// Segment kept, with correction flags.
    Kept(AnnotatedSegment),
    /// Text was empty after cleaning; the segment is dropped and counted.
    DroppedEmpty,
}

/// Convert one classified record into a canonical segment.
///
/// Keyed values are taken as seconds; an absent `start` defaults to 0 and an
/// absent `end` to `start + default_segment_seconds` — an explicit policy
/// for missing fields, not a guess about scale. Positional values multiply
/// by the resolved seconds-per-unit.
///
/// Corrections applied uniformly after conversion:
/// 1. `start` clamps to ≥ 0.
/// 2. `end < start` collapses to a zero-length segment, flagged `corrected`.
/// 3. An end beyond the known clip duration (past the larger of 1% or
///    0.5 s) is flagged `out_of_bounds` but deliberately not clamped —
///    clamping would mask the scale-error class this flag exists to catch.
pub fn normalize_segment(
    record: RawSegment,
    unit: UnitSpec,
    clip_duration_seconds: Option<f64>,
    config: &NormalizeConfig,
) -> SegmentOutcome {
    let (raw_start, raw_end, raw_text) = match record {
        RawSegment::Positional {
            start_unit,
            end_unit,
            text,
        } => {
            let spu = unit.seconds_per_unit();
            (start_unit * spu, end_unit * spu, text)
        }
        RawSegment::Keyed { start, end, text } => {
            let start = start.unwrap_or(0.0);
            let end = end.unwrap_or(start + config.default_segment_seconds);
            (start, end, text)
        }
    };

    let text = clean_text(&raw_text);
    if text.is_empty() {
        return SegmentOutcome::DroppedEmpty;
    }

    let mut flags = SegmentFlags::default();
    let start_seconds = raw_start.max(0.0);
    let mut end_seconds = raw_end;
    if end_seconds < start_seconds {
        end_seconds = start_seconds;
        flags.corrected = true;
    }
    if let Some(clip) = clip_duration_seconds {
        let tolerance = (clip * BOUNDS_TOLERANCE_REL).max(BOUNDS_TOLERANCE_ABS_SECONDS);
        if end_seconds > clip + tolerance {
            flags.out_of_bounds = true;
        }
    }

    SegmentOutcome::Kept(AnnotatedSegment {
        segment: CanonicalSegment {
            start_seconds,
            end_seconds,
            text,
        },
        flags,
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
