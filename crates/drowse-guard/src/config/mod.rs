mod alert_config;
mod capture_config;
#[allow(clippy::module_inception)]
mod config;
mod monitor_config;
mod service_config;

pub(crate) use {
    alert_config::AlertConfig, capture_config::CaptureConfig, config::Config,
    monitor_config::MonitorConfig, service_config::ServiceConfig,
};

pub(crate) const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub(crate) const DEFAULT_UPLOAD_TIMEOUT_SECS: u64 = 30;
pub(crate) const DEFAULT_SEGMENT_MS: u64 = 4000;
pub(crate) const DEFAULT_CHUNK_INTERVAL_MS: u64 = 250;
pub(crate) const DEFAULT_CHUNK_BYTES: usize = 4096;
pub(crate) const DEFAULT_CYCLE_DELAY_MS: u64 = 1000;
pub(crate) const DEFAULT_ALERT_MS: u64 = 2000;

pub(crate) fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

pub(crate) fn default_upload_timeout_secs() -> u64 {
    DEFAULT_UPLOAD_TIMEOUT_SECS
}

pub(crate) fn default_segment_ms() -> u64 {
    DEFAULT_SEGMENT_MS
}

pub(crate) fn default_chunk_interval_ms() -> u64 {
    DEFAULT_CHUNK_INTERVAL_MS
}

pub(crate) fn default_chunk_bytes() -> usize {
    DEFAULT_CHUNK_BYTES
}

pub(crate) fn default_cycle_delay_ms() -> u64 {
    DEFAULT_CYCLE_DELAY_MS
}

pub(crate) fn default_alert_ms() -> u64 {
    DEFAULT_ALERT_MS
}
