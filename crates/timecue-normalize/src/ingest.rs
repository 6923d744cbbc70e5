//! Structural classification of raw backend records.
//!
//! Backends emit one of two shapes: an ordered `[start, end, text]` triple
//! in a backend-defined unit, or a `{start, end, text}` mapping already in
//! seconds. Classification is purely structural and never consults backend
//! identity, since one backend may emit either shape across versions. No
//! values are interpreted here.

use serde_json::Value;

use crate::error::NormalizeError;

/// A raw record in one of the two shapes backends emit.
#[derive(Debug, Clone, PartialEq)]
pub enum RawSegment {
    /// Ordered triple `(start_unit, end_unit, text)` where the timing values
    /// are in a backend-defined unit, not necessarily seconds.
    Positional {
        /// Raw start value in backend units.
        start_unit: f64,
        /// Raw end value in backend units.
        end_unit: f64,
        /// Segment text as emitted.
        text: String,
    },
    /// Mapping with seconds-valued `start`/`end` and `text`, any of which
    /// may be absent.
    Keyed {
        /// Start in seconds, when present.
        start: Option<f64>,
        /// End in seconds, when present.
        end: Option<f64>,
        /// Segment text as emitted; empty when the key is absent.
        text: String,
    },
}

impl RawSegment {
    /// Whether this record carries positional (unit-valued) timing.
    pub fn is_positional(&self) -> bool {
        matches!(self, Self::Positional { .. })
    }
}

/// Classify one raw record by structure alone.
///
/// `index` is the record's position in the batch, used for error context.
/// Records matching neither shape fail with
/// [`NormalizeError::MalformedSegment`].
pub fn classify_record(index: usize, record: &Value) -> Result<RawSegment, NormalizeError> {
    match record {
        Value::Array(items) => classify_positional(index, items),
        Value::Object(map) => classify_keyed(index, map),
        other => Err(malformed(
            index,
            format!("expected array or object, got {}", json_kind(other)),
        )),
    }
}

fn classify_positional(index: usize, items: &[Value]) -> Result<RawSegment, NormalizeError> {
    if items.len() < 3 {
        return Err(malformed(
            index,
            format!("positional record has {} elements, need at least 3", items.len()),
        ));
    }
    let start_unit = finite_number(&items[0])
        .ok_or_else(|| malformed(index, "positional start is not a finite number".into()))?;
    let end_unit = finite_number(&items[1])
        .ok_or_else(|| malformed(index, "positional end is not a finite number".into()))?;
    let text = items[2]
        .as_str()
        .ok_or_else(|| malformed(index, "positional text is not a string".into()))?;
    Ok(RawSegment::Positional {
        start_unit,
        end_unit,
        text: text.to_owned(),
    })
}

fn classify_keyed(
    index: usize,
    map: &serde_json::Map<String, Value>,
) -> Result<RawSegment, NormalizeError> {
    let start = match map.get("start") {
        None => None,
        Some(v) => Some(
            finite_number(v)
                .ok_or_else(|| malformed(index, "keyed start is not a finite number".into()))?,
        ),
    };
    let end = match map.get("end") {
        None => None,
        Some(v) => Some(
            finite_number(v)
                .ok_or_else(|| malformed(index, "keyed end is not a finite number".into()))?,
        ),
    };
    let text = match map.get("text") {
        None => None,
        Some(v) => Some(
            v.as_str()
                .ok_or_else(|| malformed(index, "keyed text is not a string".into()))?,
        ),
    };
    if start.is_none() && text.is_none() {
        return Err(malformed(
            index,
            "mapping carries neither start nor text".into(),
        ));
    }
    Ok(RawSegment::Keyed {
        start,
        end,
        text: text.unwrap_or_default().to_owned(),
    })
}

fn malformed(index: usize, reason: String) -> NormalizeError {
    NormalizeError::MalformedSegment { index, reason }
}

/// JSON numbers cannot encode NaN/∞, but hand-built `Value`s could; reject
/// anything that is not a finite `f64`.
fn finite_number(v: &Value) -> Option<f64> {
    v.as_f64().filter(|n| n.is_finite())
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a bool",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
