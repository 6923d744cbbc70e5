//! Normalization policy knobs.

use serde::{Deserialize, Serialize};

/// Tunable policy for normalization and the aggregate scale check.
///
/// Every field has a compiled default; deserializing a partial document
/// overrides individual values only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Seconds assigned to a keyed segment that carries no end time.
    ///
    /// A deliberate, visible policy for a missing field — not a guess about
    /// scale. Whether 5 s suits very short utterances is an open question;
    /// the value is configurable for that reason.
    pub default_segment_seconds: f64,

    /// Fraction of kept segments flagged out of bounds at or above which the
    /// assembler raises a scale suspicion.
    pub suspect_flag_fraction: f64,

    /// Coverage ratio (last segment end / clip duration) below which the
    /// assembler raises a scale suspicion.
    pub min_coverage_ratio: f64,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            default_segment_seconds: 5.0,
            suspect_flag_fraction: 0.05,
            min_coverage_ratio: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_policy() {
        let cfg = NormalizeConfig::default();
        assert!((cfg.default_segment_seconds - 5.0).abs() < f64::EPSILON);
        assert!((cfg.suspect_flag_fraction - 0.05).abs() < f64::EPSILON);
        assert!((cfg.min_coverage_ratio - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn partial_document_overrides_one_field() {
        let cfg: NormalizeConfig =
            serde_json::from_str(r#"{"default_segment_seconds": 2.0}"#).expect("deserialize");
        assert!((cfg.default_segment_seconds - 2.0).abs() < f64::EPSILON);
        assert!((cfg.suspect_flag_fraction - 0.05).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_document_yields_defaults() {
        let cfg: NormalizeConfig = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(cfg, NormalizeConfig::default());
    }
}
