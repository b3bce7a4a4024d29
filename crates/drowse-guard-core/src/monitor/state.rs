use std::time::Duration;

use uuid::Uuid;

/// Default fixed duration of each recorded segment.
pub(crate) const DEFAULT_SEGMENT_MS: u64 = 4000;

/// Default delay between a completed cycle and the next capture.
pub(crate) const DEFAULT_CYCLE_DELAY_MS: u64 = 1000;

/// Lifecycle phase of the monitoring loop, published with every status
/// update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorPhase {
    /// Never started.
    Idle,
    /// A recording session is open.
    Capturing,
    /// A segment upload is in flight.
    Classifying,
    /// A result is being applied to status, telemetry, and the alert.
    Evaluating,
    /// The inter-cycle delay is running.
    AwaitingNextCycle,
    /// Monitoring ended; a new start command begins a fresh session.
    Stopped,
}

/// Commands accepted by the monitoring controller.
#[derive(Debug, Clone, Copy)]
pub enum MonitorCommand {
    /// Begin monitoring. Rejected with a visible error if the capture
    /// device is not ready.
    Start,
    /// End monitoring. Always wins, from any state.
    Stop,
}

/// Status published to display collaborators over the watch channel.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorStatus {
    /// Current controller phase.
    pub phase: MonitorPhase,
    /// Human-readable status line.
    pub text: String,
}

impl MonitorStatus {
    pub(crate) fn new(phase: MonitorPhase, text: &str) -> Self {
        Self {
            phase,
            text: text.to_string(),
        }
    }

    /// The status before any monitoring has happened.
    pub fn initial() -> Self {
        Self::new(MonitorPhase::Idle, "Waiting...")
    }
}

/// Timing parameters for the capture cycle.
#[derive(Debug, Clone, Copy)]
pub struct MonitorSettings {
    /// Fixed duration of each recorded segment.
    pub segment_duration: Duration,
    /// Delay between a completed cycle and the next capture.
    pub cycle_delay: Duration,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            segment_duration: Duration::from_millis(DEFAULT_SEGMENT_MS),
            cycle_delay: Duration::from_millis(DEFAULT_CYCLE_DELAY_MS),
        }
    }
}

/// One monitoring session, exclusively owned and mutated by the
/// controller.
///
/// The cycle counter is deliberately preserved across stop/restart so the
/// time series stays strictly increasing for the process lifetime; each
/// start gets a fresh `session_id` for log correlation.
#[derive(Debug, Clone, Copy)]
pub struct MonitoringSession {
    active: bool,
    cycle_index: u64,
    session_id: Uuid,
}

impl MonitoringSession {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            cycle_index: 0,
            session_id: Uuid::nil(),
        }
    }

    /// Begin a fresh session and return its id.
    pub(crate) fn begin(&mut self) -> Uuid {
        self.active = true;
        self.session_id = Uuid::new_v4();
        self.session_id
    }

    pub(crate) fn deactivate(&mut self) {
        self.active = false;
    }

    /// Whether a stop command has not yet ended the session.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Advance to the next cycle and return its 1-based index.
    pub(crate) fn next_cycle(&mut self) -> u64 {
        self.cycle_index += 1;
        self.cycle_index
    }

    /// Index of the most recently completed cycle (0 before the first).
    pub fn cycle_index(&self) -> u64 {
        self.cycle_index
    }

    /// Id of the current (or most recent) session.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }
}
