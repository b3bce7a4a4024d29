use crate::config::default_cycle_delay_ms;

use serde::{Deserialize, Serialize};

/// Cycle scheduling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Delay between a completed cycle and the next capture, in
    /// milliseconds.
    #[serde(default = "default_cycle_delay_ms")]
    pub cycle_delay_ms: u64,
}
