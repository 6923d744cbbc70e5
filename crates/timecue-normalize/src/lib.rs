//! # timecue-normalize
//!
//! Segment-timing normalization: turns the incompatible raw output of
//! speech-transcription backends into canonical, seconds-based transcripts.
//!
//! The pipeline, leaves first:
//!
//! - **Ingest** ([`ingest`]): classify each raw record structurally as
//!   positional (`[start, end, text]` in backend units) or keyed
//!   (`{start, end, text}` in seconds)
//! - **Scale** ([`scale`]): resolve a declared [`scale::UnitSpec`] per
//!   shape; positional data without a declared rate is a hard error, never
//!   a guessed constant
//! - **Normalize** ([`normalize`]): convert to seconds and apply the
//!   clamp / collapse / bounds corrections
//! - **Assemble** ([`assemble`]): order segments, compute totals, aggregate
//!   flags, and raise a scale suspicion when the pattern implicates the
//!   unit scale
//! - **Analysis** ([`analysis`]): operator-facing timing report over a
//!   finished transcript
//!
//! [`normalize_batch`] wires the stages together for one backend batch.
//! Everything is pure and synchronous; independent batches can be
//! normalized from independent threads with no coordination.
//!
//! ## Crate Position
//!
//! Depends on `timecue-core`. Depended on by callers that feed
//! `timecue-formats`.

#![deny(unsafe_code)]

pub mod analysis;
pub mod assemble;
pub mod batch;
pub mod config;
pub mod error;
pub mod ingest;
pub mod normalize;
pub mod scale;

pub use analysis::{analyze, TimingReport, TimingStats};
pub use assemble::OutcomeCounts;
pub use batch::{BackendId, RawBatch};
pub use config::NormalizeConfig;
pub use error::NormalizeError;
pub use ingest::{classify_record, RawSegment};
pub use normalize::{normalize_segment, SegmentOutcome};
pub use scale::{resolve_unit, UnitSpec};

use timecue_core::{BatchDiagnostics, TimedTranscript};
use tracing::{debug, warn};

use crate::assemble::assemble;

/// A normalized batch: the ordered transcript plus aggregate diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedBatch {
    /// The canonical transcript, ready for rendering.
    pub transcript: TimedTranscript,
    /// What normalization had to correct, drop or suspect.
    pub diagnostics: BatchDiagnostics,
}

/// Normalize one backend invocation's raw output.
///
/// Malformed records are skipped and counted; positional records with no
/// declared rate abort the whole batch with
/// [`NormalizeError::UnresolvedScale`] — by the time a
/// [`TimedTranscript`] exists, every timing value in it went through a
/// declared conversion. A raised [`timecue_core::ScaleSuspicion`] is
/// surfaced in the diagnostics (and logged) but does not abort.
pub fn normalize_batch(
    batch: &RawBatch,
    config: &NormalizeConfig,
) -> Result<NormalizedBatch, NormalizeError> {
    let mut counts = OutcomeCounts {
        total_records: batch.records.len(),
        ..OutcomeCounts::default()
    };
    let mut segments = Vec::with_capacity(batch.records.len());

    for (index, record) in batch.records.iter().enumerate() {
        let raw = match classify_record(index, record) {
            Ok(raw) => raw,
            Err(err) => {
                debug!(backend = %batch.backend, %err, "skipping malformed record");
                counts.malformed += 1;
                continue;
            }
        };
        let unit = resolve_unit(&raw, batch.backend, batch.declared_rate_hz)?;
        match normalize_segment(raw, unit, batch.clip_duration_seconds, config) {
            SegmentOutcome::Kept(segment) => segments.push(segment),
            SegmentOutcome::DroppedEmpty => counts.dropped_empty += 1,
        }
    }

    let (transcript, diagnostics) =
        assemble(segments, counts, batch.clip_duration_seconds, config);
    if let Some(ref suspicion) = diagnostics.scale_suspicion {
        warn!(backend = %batch.backend, %suspicion, "unit scale looks wrong for this batch");
    }
    debug!(
        backend = %batch.backend,
        total = diagnostics.total_records,
        kept = diagnostics.kept,
        malformed = diagnostics.malformed,
        "batch normalized"
    );
    Ok(NormalizedBatch {
        transcript,
        diagnostics,
    })
}
