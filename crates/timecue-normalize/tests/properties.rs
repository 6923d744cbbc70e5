//! Property tests for the normalization invariants.

#![allow(missing_docs)]

use proptest::prelude::*;
use serde_json::{json, Value};
use timecue_normalize::{normalize_batch, BackendId, NormalizeConfig, RawBatch};

/// Clip length used throughout; long enough that generated segments are
/// usually in bounds, short enough that some overrun.
const CLIP_SECONDS: f64 = 120.0;

fn keyed_record() -> impl Strategy<Value = Value> {
    (0.0f64..150.0, 0.0f64..30.0, "[a-z]{1,12}")
        .prop_map(|(start, dur, text)| json!({"start": start, "end": start + dur, "text": text}))
}

fn positional_record() -> impl Strategy<Value = Value> {
    (0u32..7_500, 0u32..1_500, "[a-z]{1,12}")
        .prop_map(|(start, dur, text)| json!([start, start + dur, text]))
}

fn junk_record() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(json!("noise")),
        Just(json!([1])),
        Just(json!({"end": 4.0})),
        Just(Value::Null),
        Just(json!(42)),
    ]
}

fn mixed_record() -> impl Strategy<Value = Value> {
    prop_oneof![
        4 => keyed_record(),
        4 => positional_record(),
        1 => junk_record(),
    ]
}

proptest! {
    #[test]
    fn output_is_monotonic_and_well_formed(
        records in prop::collection::vec(keyed_record(), 0..40)
    ) {
        let batch = RawBatch {
            backend: BackendId::Cpu,
            records,
            declared_rate_hz: None,
            clip_duration_seconds: Some(CLIP_SECONDS),
        };
        let normalized = normalize_batch(&batch, &NormalizeConfig::default()).unwrap();
        let segments = normalized.transcript.segments();
        for pair in segments.windows(2) {
            prop_assert!(
                pair[0].segment.start_seconds <= pair[1].segment.start_seconds,
                "output must be non-decreasing in start time"
            );
        }
        for s in segments {
            prop_assert!(s.segment.start_seconds >= 0.0);
            prop_assert!(s.segment.end_seconds >= s.segment.start_seconds);
            prop_assert!(s.segment.end_seconds.is_finite());
            prop_assert!(!s.segment.text.is_empty());
        }
    }

    #[test]
    fn bounds_violations_are_always_flagged(
        records in prop::collection::vec(keyed_record(), 1..40)
    ) {
        let batch = RawBatch {
            backend: BackendId::Cpu,
            records,
            declared_rate_hz: None,
            clip_duration_seconds: Some(CLIP_SECONDS),
        };
        let normalized = normalize_batch(&batch, &NormalizeConfig::default()).unwrap();
        for s in normalized.transcript.segments() {
            if s.segment.end_seconds > CLIP_SECONDS * 1.01 + 1e-9 {
                prop_assert!(s.flags.out_of_bounds, "overrun at {}", s.segment.end_seconds);
            }
            if !s.flags.out_of_bounds {
                prop_assert!(s.segment.end_seconds <= CLIP_SECONDS * 1.01 + 1e-9);
            }
        }
    }

    #[test]
    fn positional_batches_uphold_the_same_invariants(
        records in prop::collection::vec(positional_record(), 0..40)
    ) {
        let batch = RawBatch {
            backend: BackendId::Mlx,
            records,
            declared_rate_hz: Some(50.0),
            clip_duration_seconds: Some(CLIP_SECONDS),
        };
        let normalized = normalize_batch(&batch, &NormalizeConfig::default()).unwrap();
        for s in normalized.transcript.segments() {
            prop_assert!(s.segment.start_seconds >= 0.0);
            prop_assert!(s.segment.end_seconds >= s.segment.start_seconds);
        }
    }

    #[test]
    fn positional_records_without_a_rate_always_abort(
        records in prop::collection::vec(positional_record(), 1..10)
    ) {
        let batch = RawBatch {
            backend: BackendId::Cuda,
            records,
            declared_rate_hz: None,
            clip_duration_seconds: None,
        };
        prop_assert!(normalize_batch(&batch, &NormalizeConfig::default()).is_err());
    }

    #[test]
    fn record_accounting_is_conserved(
        records in prop::collection::vec(mixed_record(), 0..60)
    ) {
        let batch = RawBatch {
            backend: BackendId::Cuda,
            records,
            declared_rate_hz: Some(50.0),
            clip_duration_seconds: Some(CLIP_SECONDS),
        };
        let normalized = normalize_batch(&batch, &NormalizeConfig::default()).unwrap();
        let d = &normalized.diagnostics;
        prop_assert_eq!(d.kept + d.dropped_empty + d.malformed, d.total_records);
        prop_assert_eq!(d.kept, normalized.transcript.len());
    }
}
