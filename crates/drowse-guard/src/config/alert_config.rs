use crate::config::default_alert_ms;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Audible alert configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertConfig {
    /// Bound on alert playback, in milliseconds; the clip is force-stopped
    /// here regardless of its natural length.
    #[serde(default = "default_alert_ms")]
    pub duration_ms: u64,

    /// WAV file to play (None = generated tone).
    #[serde(default)]
    pub sound_path: Option<PathBuf>,
}
