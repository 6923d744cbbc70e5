//! Input boundary: what a backend adapter hands to the normalizer.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identity of the transcription backend that produced a batch.
///
/// Carried for diagnostics and error context only. Record shape is always
/// classified structurally — a backend may change its output shape across
/// versions, so identity never drives parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendId {
    /// Whisper running on CPU.
    Cpu,
    /// Whisper running on CUDA GPUs.
    Cuda,
    /// The Apple-Silicon-accelerated backend.
    Mlx,
}

impl BackendId {
    /// Stable lowercase name, matching adapter configuration values.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::Cuda => "cuda",
            Self::Mlx => "mlx",
        }
    }
}

impl fmt::Display for BackendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One backend invocation's full raw output plus the declarations the
/// adapter must supply alongside it.
///
/// The adapter is responsible for invoking the engine and for reporting the
/// engine's true frame/sample rate from its own configuration. The rate is
/// never inferred from timestamp magnitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBatch {
    /// Which backend produced the records.
    pub backend: BackendId,
    /// Raw segment records exactly as the engine emitted them.
    pub records: Vec<Value>,
    /// Declared frame/sample rate in Hz, required for positional records.
    #[serde(default)]
    pub declared_rate_hz: Option<f64>,
    /// Clip duration in seconds, when the caller probed it.
    #[serde(default)]
    pub clip_duration_seconds: Option<f64>,
}
