use crate::config::{default_base_url, default_upload_timeout_secs};

use serde::{Deserialize, Serialize};

/// Classification service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the classification service; segments upload to
    /// `{base_url}/upload`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Upload request timeout in seconds. A timed-out upload counts as a
    /// transport failure.
    #[serde(default = "default_upload_timeout_secs")]
    pub upload_timeout_secs: u64,
}
