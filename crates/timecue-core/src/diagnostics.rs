//! Aggregate per-batch diagnostics and the scale-suspicion signal.

use serde::{Deserialize, Serialize};

/// Which heuristic implicated the unit scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuspicionCause {
    /// Too many segments overran the known clip duration.
    OutOfBoundsFraction,
    /// The transcript covers implausibly little of the known clip duration,
    /// the signature of a far-too-small seconds-per-unit factor.
    LowCoverage,
}

/// Warning-level signal that the unit scale applied to a batch was likely
/// wrong.
///
/// Carried in [`BatchDiagnostics::scale_suspicion`]; never aborts a batch.
/// Operators and CI-style accuracy checks are expected to treat it as a
/// failure, which is the whole point: a systematic scale error must not
/// pass silently as a rendered subtitle file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("suspected scale error: {flagged} of {total} segments implicate the unit scale")]
pub struct ScaleSuspicion {
    /// Segments implicated by the firing heuristic.
    pub flagged: usize,
    /// Segments kept in the transcript.
    pub total: usize,
    /// `last end / clip duration`, when the clip duration is known.
    pub coverage_ratio: Option<f64>,
    /// Which heuristic fired.
    pub cause: SuspicionCause,
}

/// Aggregate outcome counts for one normalized batch.
///
/// Per-record problems are recovered locally (record skipped) and counted
/// here rather than aborting the batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchDiagnostics {
    /// Raw records received from the backend.
    pub total_records: usize,
    /// Segments kept in the transcript.
    pub kept: usize,
    /// Segments whose end time preceded their start and was collapsed.
    pub corrected: usize,
    /// Segments overrunning the known clip duration beyond tolerance.
    pub out_of_bounds: usize,
    /// Segments dropped because their text was empty after cleaning.
    pub dropped_empty: usize,
    /// Records matching neither known shape, skipped.
    pub malformed: usize,
    /// Present when the flag pattern implicates the unit scale itself.
    pub scale_suspicion: Option<ScaleSuspicion>,
}

impl BatchDiagnostics {
    /// Whether every record survived normalization untouched.
    pub fn is_clean(&self) -> bool {
        self.corrected == 0
            && self.out_of_bounds == 0
            && self.dropped_empty == 0
            && self.malformed == 0
            && self.scale_suspicion.is_none()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
