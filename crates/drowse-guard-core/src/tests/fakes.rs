//! Fake implementations of the device, classifier, and playback seams.

#![allow(clippy::unwrap_used)]

use crate::{
    AlertPlayback, ChunkSink, ClassificationResult, CoreResult, Label, MediaStream, MonitorError,
    SegmentClassifier, capture::CaptureSegment,
};

use std::{
    collections::VecDeque,
    panic::Location,
    sync::{Arc, Mutex},
    time::Duration,
};

use error_location::ErrorLocation;

/// Shared, inspectable state of a [`FakeStream`].
#[derive(Default)]
pub(crate) struct FakeStreamState {
    pub ready: bool,
    pub reject_start: bool,
    pub chunks: Vec<Vec<u8>>,
    pub opened: usize,
    pub closed: usize,
}

/// Scripted media stream: delivers its configured chunks synchronously on
/// session start and counts session opens/closes.
pub(crate) struct FakeStream {
    state: Arc<Mutex<FakeStreamState>>,
}

impl FakeStream {
    pub(crate) fn ready_with_chunks(
        chunks: Vec<Vec<u8>>,
    ) -> (Self, Arc<Mutex<FakeStreamState>>) {
        let state = Arc::new(Mutex::new(FakeStreamState {
            ready: true,
            chunks,
            ..FakeStreamState::default()
        }));
        (
            Self {
                state: Arc::clone(&state),
            },
            state,
        )
    }

    pub(crate) fn unready() -> (Self, Arc<Mutex<FakeStreamState>>) {
        let state = Arc::new(Mutex::new(FakeStreamState::default()));
        (
            Self {
                state: Arc::clone(&state),
            },
            state,
        )
    }

    pub(crate) fn rejecting() -> (Self, Arc<Mutex<FakeStreamState>>) {
        let state = Arc::new(Mutex::new(FakeStreamState {
            ready: true,
            reject_start: true,
            ..FakeStreamState::default()
        }));
        (
            Self {
                state: Arc::clone(&state),
            },
            state,
        )
    }
}

impl MediaStream for FakeStream {
    fn is_ready(&self) -> bool {
        self.state.lock().unwrap().ready
    }

    fn start_recording(&mut self, chunks: ChunkSink) -> CoreResult<()> {
        let mut state = self.state.lock().unwrap();

        if state.reject_start {
            return Err(MonitorError::CaptureFailed {
                reason: "fake device rejected the recording request".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        state.opened += 1;
        for chunk in &state.chunks {
            let _ = chunks.send(chunk.clone());
        }

        Ok(())
    }

    fn stop_recording(&mut self) -> CoreResult<()> {
        self.state.lock().unwrap().closed += 1;
        Ok(())
    }
}

/// Scripted classifier: pops one pre-loaded result per call, optionally
/// after a fixed delay, and pends forever once the script runs out.
pub(crate) struct FakeClassifier {
    results: Arc<Mutex<VecDeque<CoreResult<ClassificationResult>>>>,
    delay: Option<Duration>,
    calls: Arc<Mutex<usize>>,
}

impl FakeClassifier {
    pub(crate) fn with_results(
        results: Vec<CoreResult<ClassificationResult>>,
    ) -> (Self, Arc<Mutex<usize>>) {
        let calls = Arc::new(Mutex::new(0));
        (
            Self {
                results: Arc::new(Mutex::new(results.into())),
                delay: None,
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }

    pub(crate) fn with_delayed_results(
        delay: Duration,
        results: Vec<CoreResult<ClassificationResult>>,
    ) -> (Self, Arc<Mutex<usize>>) {
        let (mut classifier, calls) = Self::with_results(results);
        classifier.delay = Some(delay);
        (classifier, calls)
    }
}

impl SegmentClassifier for FakeClassifier {
    async fn classify(&self, _segment: CaptureSegment) -> CoreResult<ClassificationResult> {
        *self.calls.lock().unwrap() += 1;

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let next = self.results.lock().unwrap().pop_front();
        match next {
            Some(result) => result,
            None => std::future::pending().await,
        }
    }
}

/// Call log shared between a [`FakePlayback`] and the test.
#[derive(Default)]
pub(crate) struct PlaybackLog {
    pub restarts: usize,
    pub stops: usize,
}

/// Playback backend that only counts calls.
pub(crate) struct FakePlayback {
    log: Arc<Mutex<PlaybackLog>>,
}

impl FakePlayback {
    pub(crate) fn new() -> (Self, Arc<Mutex<PlaybackLog>>) {
        let log = Arc::new(Mutex::new(PlaybackLog::default()));
        (
            Self {
                log: Arc::clone(&log),
            },
            log,
        )
    }
}

impl AlertPlayback for FakePlayback {
    fn restart(&mut self) {
        self.log.lock().unwrap().restarts += 1;
    }

    fn stop(&mut self) {
        self.log.lock().unwrap().stops += 1;
    }
}

/// A focused result with the given probability.
pub(crate) fn focused(probability: f64) -> ClassificationResult {
    ClassificationResult {
        label: Label::Focused,
        probability,
        text: "focused".to_string(),
    }
}

/// A drowsy result with the given probability.
pub(crate) fn drowsy(probability: f64) -> ClassificationResult {
    ClassificationResult {
        label: Label::Drowsy,
        probability,
        text: "drowsy".to_string(),
    }
}

/// An upload failure for scripting classifier errors.
#[track_caller]
pub(crate) fn upload_failed() -> MonitorError {
    MonitorError::UploadFailed {
        reason: "connection refused".to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
