use crate::{CoreResult, MonitorError, capture::{ChunkSink, MediaStream}};

use std::{
    panic::Location,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use error_location::ErrorLocation;
use tracing::{debug, instrument};

/// Deterministic stand-in for a camera stream.
///
/// Real capture devices are external collaborators behind the
/// [`MediaStream`] seam; this implementation emits a fixed-size chunk of
/// sequence-stamped bytes on a fixed interval so the rest of the pipeline
/// can run without hardware. The first chunk is emitted immediately on
/// session start.
///
/// Requires a running tokio runtime: the chunk generator is a spawned task.
pub struct SyntheticStream {
    chunk_interval: Duration,
    chunk_len: usize,
    running: Option<Arc<AtomicBool>>,
}

impl SyntheticStream {
    /// A stream emitting `chunk_len` bytes every `chunk_interval`.
    pub fn new(chunk_interval: Duration, chunk_len: usize) -> Self {
        Self {
            chunk_interval,
            chunk_len,
            running: None,
        }
    }
}

impl MediaStream for SyntheticStream {
    fn is_ready(&self) -> bool {
        true
    }

    #[instrument(skip(self, chunks))]
    fn start_recording(&mut self, chunks: ChunkSink) -> CoreResult<()> {
        if self.running.is_some() {
            return Err(MonitorError::CaptureFailed {
                reason: "synthetic stream is already recording".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let running = Arc::new(AtomicBool::new(true));
        self.running = Some(Arc::clone(&running));

        let interval = self.chunk_interval;
        let chunk_len = self.chunk_len;

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            let mut sequence: u8 = 0;

            loop {
                ticker.tick().await;
                if !running.load(Ordering::Acquire) {
                    break;
                }
                // Receiver dropped means the session was closed out from
                // under us; stop producing.
                if chunks.send(vec![sequence; chunk_len]).is_err() {
                    break;
                }
                sequence = sequence.wrapping_add(1);
            }
        });

        debug!("Synthetic recording started");

        Ok(())
    }

    #[instrument(skip(self))]
    fn stop_recording(&mut self) -> CoreResult<()> {
        let Some(running) = self.running.take() else {
            return Err(MonitorError::CaptureFailed {
                reason: "synthetic stream is not recording".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        };

        running.store(false, Ordering::Release);
        debug!("Synthetic recording stopped");

        Ok(())
    }
}
