//! Alert sound playback backends.

use crate::{CoreResult, MonitorError};

use std::{io::Cursor, panic::Location, path::PathBuf, sync::mpsc, time::Duration};

use error_location::ErrorLocation;
use rodio::{Decoder, OutputStream, Sink, Source, source::SineWave};
use tracing::{debug, error, info, warn};

/// Frequency of the generated fallback tone.
const TONE_FREQUENCY_HZ: f32 = 880.0;

const TONE_AMPLITUDE: f32 = 0.3;

/// Playback surface the alert trigger drives.
///
/// Implementations must never stack sounds: `restart` interrupts whatever
/// is currently playing and begins again from the start.
pub trait AlertPlayback: Send + 'static {
    /// Begin playback from the start, interrupting any current playback.
    fn restart(&mut self);

    /// Halt playback and reset to the beginning.
    fn stop(&mut self);
}

enum PlaybackCommand {
    Restart,
    Stop,
}

/// Rodio-backed playback on a dedicated audio thread.
///
/// Rodio's output stream handle is not `Send`, so the stream and sink live
/// on their own thread; commands cross over a std channel, mirroring how
/// other blocking endpoints in this codebase are bridged to async code.
pub struct RodioPlayback {
    command_tx: mpsc::Sender<PlaybackCommand>,
}

impl RodioPlayback {
    /// Open the default audio output and start the playback thread.
    ///
    /// Plays the WAV file at `sound_path` when configured, otherwise a
    /// generated tone capped at `tone_duration`.
    ///
    /// # Errors
    ///
    /// `AudioUnavailable` if the sound file cannot be read, the playback
    /// thread cannot be spawned, or the output device cannot be opened.
    #[track_caller]
    pub fn new(sound_path: Option<PathBuf>, tone_duration: Duration) -> CoreResult<Self> {
        let clip = match &sound_path {
            Some(path) => {
                Some(
                    std::fs::read(path).map_err(|e| MonitorError::AudioUnavailable {
                        reason: format!("Failed to read alert sound {:?}: {}", path, e),
                        location: ErrorLocation::from(Location::caller()),
                    })?,
                )
            }
            None => None,
        };

        let (command_tx, command_rx) = mpsc::channel();
        let (ready_tx, ready_rx) = mpsc::channel();

        std::thread::Builder::new()
            .name("alert-playback".to_string())
            .spawn(move || playback_thread(clip, tone_duration, command_rx, ready_tx))
            .map_err(|e| MonitorError::AudioUnavailable {
                reason: format!("Failed to spawn playback thread: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        // The thread reports whether the output device opened before any
        // command is accepted.
        match ready_rx.recv() {
            Ok(Ok(())) => {
                info!(has_clip = sound_path.is_some(), "Alert playback initialized");
                Ok(Self { command_tx })
            }
            Ok(Err(reason)) => Err(MonitorError::AudioUnavailable {
                reason,
                location: ErrorLocation::from(Location::caller()),
            }),
            Err(_) => Err(MonitorError::AudioUnavailable {
                reason: "Playback thread exited before reporting readiness".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl AlertPlayback for RodioPlayback {
    fn restart(&mut self) {
        if self.command_tx.send(PlaybackCommand::Restart).is_err() {
            warn!("Playback thread gone, alert dropped");
        }
    }

    fn stop(&mut self) {
        let _ = self.command_tx.send(PlaybackCommand::Stop);
    }
}

fn playback_thread(
    clip: Option<Vec<u8>>,
    tone_duration: Duration,
    command_rx: mpsc::Receiver<PlaybackCommand>,
    ready_tx: mpsc::Sender<Result<(), String>>,
) {
    // _stream must outlive the sinks; dropping it silences the device.
    let (_stream, handle) = match OutputStream::try_default() {
        Ok(pair) => pair,
        Err(e) => {
            let _ = ready_tx.send(Err(format!("Failed to open audio output: {}", e)));
            return;
        }
    };

    let _ = ready_tx.send(Ok(()));

    let mut sink: Option<Sink> = None;

    while let Ok(command) = command_rx.recv() {
        match command {
            PlaybackCommand::Restart => {
                if let Some(current) = sink.take() {
                    current.stop();
                }

                let fresh = match Sink::try_new(&handle) {
                    Ok(s) => s,
                    Err(e) => {
                        error!(error = %e, "Failed to open playback sink");
                        continue;
                    }
                };

                match &clip {
                    Some(bytes) => match Decoder::new(Cursor::new(bytes.clone())) {
                        Ok(source) => fresh.append(source),
                        Err(e) => {
                            warn!(error = %e, "Failed to decode alert clip");
                            continue;
                        }
                    },
                    None => fresh.append(
                        SineWave::new(TONE_FREQUENCY_HZ)
                            .amplify(TONE_AMPLITUDE)
                            .take_duration(tone_duration),
                    ),
                }

                sink = Some(fresh);
                debug!("Alert playback restarted");
            }
            PlaybackCommand::Stop => {
                if let Some(current) = sink.take() {
                    current.stop();
                }
                debug!("Alert playback stopped");
            }
        }
    }

    // Command sender dropped: silence and let the thread exit.
    if let Some(current) = sink.take() {
        current.stop();
    }
}
