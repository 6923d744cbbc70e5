//! Declared-unit resolution.
//!
//! The seconds-per-unit factor for positional records comes from a rate the
//! backend adapter declared out of its own configuration. There is no
//! fallback constant: a conversion factor with no traceable source is
//! exactly how timestamps get silently corrupted.

use crate::batch::BackendId;
use crate::error::NormalizeError;
use crate::ingest::RawSegment;

/// How raw timing values convert to seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnitSpec {
    /// Values are already seconds.
    Seconds,
    /// Values are frame indices at the declared rate.
    FrameIndex {
        /// Frames per second, as declared by the backend adapter.
        rate_hz: f64,
    },
}

impl UnitSpec {
    /// Seconds represented by one raw unit.
    pub fn seconds_per_unit(self) -> f64 {
        match self {
            Self::Seconds => 1.0,
            Self::FrameIndex { rate_hz } => 1.0 / rate_hz,
        }
    }
}

/// Resolve the unit spec for one classified record.
///
/// Keyed records are seconds by definition. Positional records convert only
/// through the declared rate; an absent, non-finite or non-positive rate
/// fails with [`NormalizeError::UnresolvedScale`] and aborts the batch.
pub fn resolve_unit(
    record: &RawSegment,
    backend: BackendId,
    declared_rate_hz: Option<f64>,
) -> Result<UnitSpec, NormalizeError> {
    if !record.is_positional() {
        return Ok(UnitSpec::Seconds);
    }
    match declared_rate_hz {
        Some(rate) if rate.is_finite() && rate > 0.0 => Ok(UnitSpec::FrameIndex { rate_hz: rate }),
        _ => Err(NormalizeError::UnresolvedScale { backend }),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
