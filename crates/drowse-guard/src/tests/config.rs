use crate::config::{
    Config, DEFAULT_BASE_URL, DEFAULT_CYCLE_DELAY_MS, DEFAULT_SEGMENT_MS,
    DEFAULT_UPLOAD_TIMEOUT_SECS,
};

use std::time::Duration;

#[allow(clippy::unwrap_used)]
fn minimal_config() -> Config {
    toml::from_str("[service]\n[capture]\n[monitor]\n[alert]\n").unwrap()
}

/// WHAT: Missing keys fall back to documented defaults
/// WHY: A freshly created or hand-trimmed config must still run
#[test]
fn given_empty_sections_when_parsing_then_defaults_applied() {
    // Given/When: A config file with empty sections
    let config = minimal_config();

    // Then: Every knob carries its default
    assert_eq!(config.service.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.service.upload_timeout_secs, DEFAULT_UPLOAD_TIMEOUT_SECS);
    assert_eq!(config.capture.segment_ms, DEFAULT_SEGMENT_MS);
    assert_eq!(config.monitor.cycle_delay_ms, DEFAULT_CYCLE_DELAY_MS);
    assert!(config.alert.sound_path.is_none());
}

/// WHAT: The config round-trips through TOML
/// WHY: Saved configs must load back unchanged
#[test]
#[allow(clippy::unwrap_used)]
fn given_config_when_serialized_and_reparsed_then_equivalent() {
    // Given: A config with a non-default base URL
    let mut config = minimal_config();
    config.service.base_url = "http://classifier.local:9000".to_string();

    // When: Serializing and parsing back
    let serialized = toml::to_string_pretty(&config).unwrap();
    let reparsed: Config = toml::from_str(&serialized).unwrap();

    // Then: The non-default and the defaults both survive
    assert_eq!(reparsed.service.base_url, "http://classifier.local:9000");
    assert_eq!(reparsed.capture.segment_ms, DEFAULT_SEGMENT_MS);
}

/// WHAT: Millisecond knobs convert to the monitor's durations
/// WHY: The controller takes Durations, the file speaks integers
#[test]
fn given_config_when_deriving_settings_then_durations_match() {
    // Given: Default timing values
    let config = minimal_config();

    // When: Deriving the monitor settings
    let settings = config.monitor_settings();

    // Then: Millisecond fields map 1:1
    assert_eq!(settings.segment_duration, Duration::from_millis(DEFAULT_SEGMENT_MS));
    assert_eq!(settings.cycle_delay, Duration::from_millis(DEFAULT_CYCLE_DELAY_MS));
}

/// WHAT: A present environment override replaces the base URL
/// WHY: The base URL is the one parameter supplied at process start
#[test]
fn given_override_when_applying_then_base_url_replaced() {
    // Given: A default config
    let mut config = minimal_config();

    // When: Applying a non-empty override
    config.apply_base_url_override(Some("http://10.0.0.5:5000".to_string()));

    // Then: The override wins
    assert_eq!(config.service.base_url, "http://10.0.0.5:5000");
}

/// WHAT: Absent or blank overrides leave the config untouched
/// WHY: An empty environment variable must not erase the configured URL
#[test]
fn given_blank_override_when_applying_then_config_kept() {
    // Given: A default config
    let mut config = minimal_config();

    // When: Applying absent and blank overrides
    config.apply_base_url_override(None);
    config.apply_base_url_override(Some("   ".to_string()));

    // Then: The configured URL survives
    assert_eq!(config.service.base_url, DEFAULT_BASE_URL);
}
