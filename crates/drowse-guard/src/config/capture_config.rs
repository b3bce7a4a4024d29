use crate::config::{default_chunk_bytes, default_chunk_interval_ms, default_segment_ms};

use serde::{Deserialize, Serialize};

/// Capture device configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Fixed duration of each recorded segment, in milliseconds.
    #[serde(default = "default_segment_ms")]
    pub segment_ms: u64,

    /// Interval between emitted chunks of the synthetic stream, in
    /// milliseconds.
    #[serde(default = "default_chunk_interval_ms")]
    pub chunk_interval_ms: u64,

    /// Size of each emitted chunk of the synthetic stream, in bytes.
    #[serde(default = "default_chunk_bytes")]
    pub chunk_bytes: usize,
}
