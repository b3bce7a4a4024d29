use crate::{CoreResult, MonitorError, capture::MediaStream};

use std::{panic::Location, time::Duration};

use error_location::ErrorLocation;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// One fixed-duration video segment, submitted as a unit for
/// classification and discarded afterwards.
#[derive(Debug)]
pub struct CaptureSegment {
    /// Raw encoded media, chunks concatenated in arrival order.
    pub media: Vec<u8>,
    /// The fixed duration this segment was recorded for.
    pub duration: Duration,
}

/// An open recording session: the receiving end of the device's chunk
/// stream. Wrapped in an `Option` on the recorder so session state, not a
/// bare flag, guards against overlapping recordings.
struct OpenSession {
    chunks: mpsc::UnboundedReceiver<Vec<u8>>,
}

/// Owns the media stream and the lifecycle of a single fixed-duration
/// recording at a time.
///
/// Exactly one recording session may be live for the whole system; the
/// recorder refuses to open a second one and [`abort`](Self::abort) always
/// leaves the session closed, so no recording handle can leak across
/// cycles.
pub struct SegmentRecorder<S> {
    stream: S,
    session: Option<OpenSession>,
}

impl<S: MediaStream> SegmentRecorder<S> {
    /// Wrap a media stream. No recording session is opened yet.
    pub fn new(stream: S) -> Self {
        Self {
            stream,
            session: None,
        }
    }

    /// Whether the underlying stream can start a recording right now.
    pub fn is_ready(&self) -> bool {
        self.stream.is_ready()
    }

    /// Record one segment of the given fixed duration.
    ///
    /// Suspends until the duration elapses, then closes the session and
    /// assembles the collected chunks. If this future is dropped early the
    /// session stays open until [`abort`](Self::abort) closes it.
    ///
    /// # Errors
    ///
    /// `DeviceUnavailable` if the stream is not ready, `CaptureFailed` if a
    /// session is already open or the device rejects the recording request.
    #[instrument(skip(self))]
    pub async fn record(&mut self, duration: Duration) -> CoreResult<CaptureSegment> {
        if self.session.is_some() {
            return Err(MonitorError::CaptureFailed {
                reason: "a recording session is already open".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if !self.stream.is_ready() {
            return Err(MonitorError::DeviceUnavailable {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let (chunk_tx, chunk_rx) = mpsc::unbounded_channel();
        self.stream.start_recording(chunk_tx)?;
        self.session = Some(OpenSession { chunks: chunk_rx });
        debug!(duration_ms = duration.as_millis(), "Recording session opened");

        tokio::time::sleep(duration).await;

        let media = self.close_session()?;
        info!(segment_bytes = media.len(), "Segment finalized");

        Ok(CaptureSegment { media, duration })
    }

    /// Force-close an open recording session and discard its chunks.
    ///
    /// No-op when no session is open. Used by the stop and failure paths,
    /// which converge here with normal completion on the same close
    /// routine.
    pub fn abort(&mut self) {
        if self.session.is_none() {
            return;
        }

        match self.close_session() {
            Ok(media) => debug!(
                discarded_bytes = media.len(),
                "Recording session aborted"
            ),
            Err(e) => warn!(error = ?e, "Recording session closed uncleanly"),
        }
    }

    /// End the recording session and drain whatever chunks were collected,
    /// in arrival order.
    #[track_caller]
    fn close_session(&mut self) -> CoreResult<Vec<u8>> {
        let Some(mut session) = self.session.take() else {
            return Err(MonitorError::CaptureFailed {
                reason: "no recording session open".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        };

        self.stream.stop_recording()?;

        let mut media = Vec::new();
        while let Ok(chunk) = session.chunks.try_recv() {
            media.extend_from_slice(&chunk);
        }

        Ok(media)
    }
}
