//! Error taxonomy for batch normalization.

use crate::batch::BackendId;

/// Errors surfaced while normalizing a backend batch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    /// A record matched neither the positional nor the keyed shape.
    ///
    /// Recovered per record inside [`crate::normalize_batch`]: the record is
    /// skipped and counted in the batch diagnostics. Public so callers
    /// driving [`crate::ingest::classify_record`] directly see the same
    /// taxonomy.
    #[error("malformed segment record #{index}: {reason}")]
    MalformedSegment {
        /// Position of the record in the batch.
        index: usize,
        /// What the record's structure failed to satisfy.
        reason: String,
    },

    /// Positional records arrived with no usable declared frame/sample rate.
    ///
    /// Fatal for the batch: converting with a guessed factor is the defect
    /// class this crate exists to eliminate, so normalization aborts instead
    /// of defaulting. Other batches are unaffected.
    #[error("cannot resolve unit scale for backend {backend}: positional records need a declared rate")]
    UnresolvedScale {
        /// Backend whose adapter failed to declare a rate.
        backend: BackendId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_display_names_record() {
        let e = NormalizeError::MalformedSegment {
            index: 3,
            reason: "expected array or object".into(),
        };
        assert_eq!(
            e.to_string(),
            "malformed segment record #3: expected array or object"
        );
    }

    #[test]
    fn unresolved_scale_display_names_backend() {
        let e = NormalizeError::UnresolvedScale {
            backend: BackendId::Mlx,
        };
        assert!(e.to_string().contains("mlx"));
        assert!(e.to_string().contains("declared rate"));
    }
}
