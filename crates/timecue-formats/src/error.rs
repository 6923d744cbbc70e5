//! Errors for re-ingesting rendered subtitle text.

/// Errors raised while parsing SRT or WebVTT input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// WebVTT input did not begin with the `WEBVTT` header line.
    #[error("missing WEBVTT header")]
    MissingHeader,

    /// A cue block was structurally broken.
    #[error("invalid cue at line {line}: {reason}")]
    InvalidCue {
        /// Zero-based line number of the offending cue.
        line: usize,
        /// What the cue failed to satisfy.
        reason: String,
    },

    /// A timing value did not match `HH:MM:SS,mmm` / `HH:MM:SS.mmm`.
    #[error("invalid timestamp '{value}'")]
    InvalidTimestamp {
        /// The offending timestamp text.
        value: String,
    },
}
