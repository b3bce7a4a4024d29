//! Drowse-Guard Core Library
//!
//! Continuous driver-drowsiness monitoring: fixed-duration camera segments
//! are captured, uploaded to a remote classification service, plotted as a
//! time series, and alerted on: an explicitly modeled
//! capture → classify → evaluate → wait cycle that is safely stoppable at
//! any point.
//!
//! # Example
//!
//! ```no_run
//! use drowse_guard_core::{
//!     AlertTrigger, HttpClassifier, Monitor, MonitorCommand, MonitorSettings, MonitorStatus,
//!     RodioPlayback, SegmentRecorder, SyntheticStream, TelemetryStore,
//! };
//!
//! use std::time::Duration;
//!
//! use tokio::sync::{mpsc, watch};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let recorder = SegmentRecorder::new(SyntheticStream::new(Duration::from_millis(250), 4096));
//!     let classifier = HttpClassifier::new("http://127.0.0.1:8000", Duration::from_secs(30))?;
//!     let playback = RodioPlayback::new(None, Duration::from_millis(2000))?;
//!     let alert = AlertTrigger::new(playback, Duration::from_millis(2000));
//!
//!     let (command_tx, command_rx) = mpsc::channel(32);
//!     let (status_tx, _status_rx) = watch::channel(MonitorStatus::initial());
//!
//!     let monitor = Monitor::new(
//!         MonitorSettings::default(),
//!         recorder,
//!         classifier,
//!         alert,
//!         TelemetryStore::new(),
//!         command_rx,
//!         status_tx,
//!     );
//!
//!     command_tx.send(MonitorCommand::Start).await?;
//!     monitor.run().await?;
//!     Ok(())
//! }
//! ```

mod alert;
mod capture;
mod classify;
mod error;
mod monitor;
mod telemetry;

pub use {
    alert::{AlertPlayback, AlertTrigger, RodioPlayback},
    capture::{CaptureSegment, ChunkSink, MediaStream, SegmentRecorder, SyntheticStream},
    classify::{ClassificationResult, HttpClassifier, Label, SegmentClassifier},
    error::{MonitorError, Result as CoreResult},
    monitor::{
        Monitor, MonitorCommand, MonitorPhase, MonitorSettings, MonitorStatus, MonitoringSession,
    },
    telemetry::{ColorTag, TelemetryStore, TimeseriesPoint},
};

#[cfg(test)]
mod tests;
