//! Drowse-Guard: continuous driver-drowsiness monitoring console.

mod app;
mod app_command;
mod config;
mod display;
mod error;
#[cfg(test)]
mod tests;

pub(crate) use {
    app::App,
    app_command::ConsoleCommand,
    error::{AppError, Result as AppResult},
};

use crate::config::Config;

use std::time::Duration;

use drowse_guard_core::{
    AlertTrigger, HttpClassifier, Monitor, MonitorStatus, RodioPlayback, SegmentRecorder,
    SyntheticStream, TelemetryStore,
};
use tokio::sync::{mpsc, watch};
use tracing::error;

/// Application entry point.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("drowse_guard=debug,drowse_guard_core=debug")
        .init();

    let mut config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };
    config.apply_env_overrides();

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to create tokio runtime: {:?}", e);
            std::process::exit(1);
        }
    };

    rt.block_on(async {
        let classifier = match HttpClassifier::new(&config.service.base_url, config.upload_timeout())
        {
            Ok(c) => c,
            Err(e) => {
                error!("Failed to create classifier: {:?}", e);
                std::process::exit(1);
            }
        };

        // Connectivity logging only; monitoring behaves the same either way.
        classifier.probe().await;

        let playback = match RodioPlayback::new(config.alert.sound_path.clone(), config.alert_duration())
        {
            Ok(p) => p,
            Err(e) => {
                error!("Failed to open alert playback: {:?}", e);
                std::process::exit(1);
            }
        };
        let alert = AlertTrigger::new(playback, config.alert_duration());

        // The synthetic stream stands in for a camera; real devices live
        // behind the MediaStream seam.
        let stream = SyntheticStream::new(config.chunk_interval(), config.capture.chunk_bytes);
        let recorder = SegmentRecorder::new(stream);

        let store = TelemetryStore::new();
        let (command_tx, command_rx) = mpsc::channel(32);
        let (status_tx, status_rx) = watch::channel(MonitorStatus::initial());

        let monitor = Monitor::new(
            config.monitor_settings(),
            recorder,
            classifier,
            alert,
            store.clone(),
            command_rx,
            status_tx,
        );

        let app = App {
            monitor_tx: command_tx,
            status_rx,
            store,
        };

        tokio::join!(
            async {
                if let Err(e) = app.run().await {
                    error!(error = ?e, "Console error");
                }
            },
            async {
                if let Err(e) = monitor.run().await {
                    error!(error = ?e, "Monitor error");
                }
            }
        );
    });

    // The stdin forwarder may still be blocked on a read; do not wait for
    // it when tearing the runtime down.
    rt.shutdown_timeout(Duration::from_secs(1));
}
