//! Continuous monitoring cycle controller.
//!
//! One dispatch loop drives capture → classify → evaluate → wait as an
//! explicit state machine. A stop command wins from any state: it closes
//! an in-flight recording session, drops the pending inter-cycle timer,
//! and discards a classification that completes after the fact. Failure
//! paths converge on the same cleanup routine as stop.

use crate::{
    CoreResult,
    alert::{AlertPlayback, AlertTrigger},
    capture::{CaptureSegment, MediaStream, SegmentRecorder},
    classify::{ClassificationResult, SegmentClassifier},
    monitor::{MonitorCommand, MonitorPhase, MonitorSettings, MonitorStatus, MonitoringSession},
    telemetry::{ColorTag, TelemetryStore, TimeseriesPoint},
};

use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, instrument, warn};

const STATUS_RECORDING: &str = "Recording...";
const STATUS_CLASSIFYING: &str = "Classifying...";
const STATUS_STOPPED: &str = "Stopped";
const STATUS_ERROR: &str = "Error occurred";
const STATUS_DEVICE_NOT_READY: &str = "Camera not ready";

/// Machine state with per-state payloads. The segment and the result ride
/// the transitions, so each is consumed exactly once.
enum State {
    Idle,
    Capturing,
    Classifying(CaptureSegment),
    Evaluating(ClassificationResult),
    AwaitingNextCycle,
    Stopped,
}

/// Outcome of racing in-flight work against the command channel.
enum Raced<T> {
    Done(T),
    Stop,
    Closed,
}

/// The cycle scheduler: owns the recorder, the classifier seam, the alert
/// trigger, and the session, and serializes cycle completion so the
/// telemetry cycle numbering is gapless.
///
/// Externally driven by exactly two commands, start and stop; closing the
/// command channel shuts the controller down cleanly.
pub struct Monitor<S, C, P: AlertPlayback> {
    settings: MonitorSettings,
    recorder: SegmentRecorder<S>,
    classifier: C,
    alert: AlertTrigger<P>,
    store: TelemetryStore,
    session: MonitoringSession,
    command_rx: mpsc::Receiver<MonitorCommand>,
    status_tx: watch::Sender<MonitorStatus>,
}

impl<S, C, P> Monitor<S, C, P>
where
    S: MediaStream,
    C: SegmentClassifier,
    P: AlertPlayback,
{
    /// Assemble a controller. Nothing runs until [`run`](Self::run).
    pub fn new(
        settings: MonitorSettings,
        recorder: SegmentRecorder<S>,
        classifier: C,
        alert: AlertTrigger<P>,
        store: TelemetryStore,
        command_rx: mpsc::Receiver<MonitorCommand>,
        status_tx: watch::Sender<MonitorStatus>,
    ) -> Self {
        Self {
            settings,
            recorder,
            classifier,
            alert,
            store,
            session: MonitoringSession::new(),
            command_rx,
            status_tx,
        }
    }

    /// Run the monitoring loop until the command channel closes.
    #[instrument(skip(self))]
    pub async fn run(mut self) -> CoreResult<()> {
        info!("Monitor loop starting");

        let mut state = State::Idle;

        loop {
            state = match state {
                State::Idle => match self.await_start(MonitorPhase::Idle).await {
                    Some(next) => next,
                    None => break,
                },
                State::Capturing => match self.capture().await {
                    Some(next) => next,
                    None => break,
                },
                State::Classifying(segment) => match self.classify(segment).await {
                    Some(next) => next,
                    None => break,
                },
                State::Evaluating(result) => self.evaluate(result).await,
                State::AwaitingNextCycle => match self.await_next_cycle().await {
                    Some(next) => next,
                    None => break,
                },
                State::Stopped => match self.await_start(MonitorPhase::Stopped).await {
                    Some(next) => next,
                    None => break,
                },
            };
        }

        // Command channel closed: release the recording session and the
        // alert before returning, same as any stop.
        self.recorder.abort();
        self.alert.silence().await;
        info!("Monitor loop shut down");

        Ok(())
    }

    /// Idle/Stopped: wait for a start command. Returns `None` when the
    /// command channel closes.
    async fn await_start(&mut self, phase: MonitorPhase) -> Option<State> {
        loop {
            match self.command_rx.recv().await? {
                MonitorCommand::Start => {
                    if !self.recorder.is_ready() {
                        warn!("Start rejected: capture device not ready");
                        self.publish(phase, STATUS_DEVICE_NOT_READY);
                        continue;
                    }

                    let session_id = self.session.begin();
                    info!(session_id = %session_id, "Monitoring started");
                    return Some(State::Capturing);
                }
                MonitorCommand::Stop => {
                    debug!("Stop ignored: monitoring not active");
                }
            }
        }
    }

    /// Capturing: record one fixed-duration segment while listening for
    /// stop.
    #[instrument(skip(self), fields(session_id = %self.session.session_id()))]
    async fn capture(&mut self) -> Option<State> {
        self.publish(MonitorPhase::Capturing, STATUS_RECORDING);

        let outcome = {
            let segment = self.recorder.record(self.settings.segment_duration);
            tokio::pin!(segment);

            loop {
                tokio::select! {
                    result = &mut segment => break Raced::Done(result),
                    command = self.command_rx.recv() => match command {
                        Some(MonitorCommand::Stop) => break Raced::Stop,
                        Some(MonitorCommand::Start) => {
                            debug!("Start ignored: monitoring already active");
                        }
                        None => break Raced::Closed,
                    },
                }
            }
        };

        match outcome {
            Raced::Done(Ok(segment)) => Some(State::Classifying(segment)),
            Raced::Done(Err(e)) => {
                error!(error = ?e, "Capture failed, stopping monitoring");
                Some(self.enter_stopped(STATUS_ERROR))
            }
            Raced::Stop => {
                info!("Stop during capture, segment discarded");
                Some(self.enter_stopped(STATUS_STOPPED))
            }
            Raced::Closed => None,
        }
    }

    /// Classifying: submit the segment while listening for stop. A stop
    /// here only deactivates the session; the in-flight call is allowed
    /// to finish (bounded by the client timeout) and its result is
    /// discarded in Evaluating, never mutating state after stop.
    #[instrument(skip(self, segment), fields(session_id = %self.session.session_id()))]
    async fn classify(&mut self, segment: CaptureSegment) -> Option<State> {
        self.publish(MonitorPhase::Classifying, STATUS_CLASSIFYING);

        let outcome = {
            let classification = self.classifier.classify(segment);
            tokio::pin!(classification);

            loop {
                tokio::select! {
                    result = &mut classification => break Some(result),
                    command = self.command_rx.recv() => match command {
                        Some(MonitorCommand::Stop) => {
                            info!("Stop during classification, result will be discarded");
                            self.session.deactivate();
                        }
                        Some(MonitorCommand::Start) => {
                            debug!("Start ignored: monitoring already active");
                        }
                        None => break None,
                    },
                }
            }
        };

        match outcome {
            Some(Ok(result)) => Some(State::Evaluating(result)),
            Some(Err(e)) => {
                error!(error = ?e, "Classification failed, stopping monitoring");
                Some(self.enter_stopped(STATUS_ERROR))
            }
            None => None,
        }
    }

    /// Evaluating: apply one result to status, telemetry, and the alert,
    /// synchronously with respect to cycle ordering.
    #[instrument(skip(self, result), fields(session_id = %self.session.session_id()))]
    async fn evaluate(&mut self, result: ClassificationResult) -> State {
        if !self.session.is_active() {
            info!("Discarding classification completed after stop");
            return self.enter_stopped(STATUS_STOPPED);
        }

        let cycle = self.session.next_cycle();
        self.store.append(TimeseriesPoint {
            cycle,
            probability: result.probability,
            color: ColorTag::for_label(result.label),
        });

        self.publish(MonitorPhase::Evaluating, &result.text);
        self.alert.fire_if_drowsy(&result).await;

        info!(
            cycle,
            label = ?result.label,
            probability = result.probability,
            "Cycle evaluated"
        );

        State::AwaitingNextCycle
    }

    /// AwaitingNextCycle: run the inter-cycle delay while listening for
    /// stop. The timer is a local future; dropping it on stop is the
    /// cancellation.
    async fn await_next_cycle(&mut self) -> Option<State> {
        let text = self.status_tx.borrow().text.clone();
        self.publish(MonitorPhase::AwaitingNextCycle, &text);

        let outcome = {
            let delay = tokio::time::sleep(self.settings.cycle_delay);
            tokio::pin!(delay);

            loop {
                tokio::select! {
                    _ = &mut delay => break Raced::Done(()),
                    command = self.command_rx.recv() => match command {
                        Some(MonitorCommand::Stop) => break Raced::Stop,
                        Some(MonitorCommand::Start) => {
                            debug!("Start ignored: monitoring already active");
                        }
                        None => break Raced::Closed,
                    },
                }
            }
        };

        match outcome {
            // The session must still be active at the moment the delay
            // elapses for the next capture to begin.
            Raced::Done(()) if self.session.is_active() => Some(State::Capturing),
            Raced::Done(()) => Some(self.enter_stopped(STATUS_STOPPED)),
            Raced::Stop => {
                info!("Stop during inter-cycle delay");
                Some(self.enter_stopped(STATUS_STOPPED))
            }
            Raced::Closed => None,
        }
    }

    /// Shared cleanup for stop and failure paths: close any open recording
    /// session, end the session, publish the final status.
    fn enter_stopped(&mut self, text: &str) -> State {
        self.recorder.abort();
        self.session.deactivate();
        self.publish(MonitorPhase::Stopped, text);
        State::Stopped
    }

    /// Publish a status update; display consumers may come and go.
    fn publish(&self, phase: MonitorPhase, text: &str) {
        let _ = self.status_tx.send(MonitorStatus::new(phase, text));
    }
}
