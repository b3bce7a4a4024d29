//! Append-only classification time series for display.

use crate::classify::Label;

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Chart color derived from the classification label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorTag {
    /// Drowsy.
    Red,
    /// Focused.
    Green,
    /// Anything else.
    Amber,
}

impl ColorTag {
    /// Pure, total mapping from label to chart color.
    pub fn for_label(label: Label) -> ColorTag {
        match label {
            Label::Drowsy => ColorTag::Red,
            Label::Focused => ColorTag::Green,
            Label::Other => ColorTag::Amber,
        }
    }
}

/// One plotted classification outcome. Appended once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeseriesPoint {
    /// 1-based cycle number, strictly increasing with no gaps.
    pub cycle: u64,
    /// Classifier confidence for the cycle.
    pub probability: f64,
    /// Chart color for the point.
    pub color: ColorTag,
}

/// Cloneable handle over the shared, append-only point series.
///
/// The controller appends; display collaborators read snapshots. The
/// series survives a plain stop and is cleared only by an explicit
/// [`reset`](Self::reset).
#[derive(Clone, Default)]
pub struct TelemetryStore {
    points: Arc<Mutex<Vec<TimeseriesPoint>>>,
}

impl TelemetryStore {
    /// An empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one point in cycle order.
    pub fn append(&self, point: TimeseriesPoint) {
        debug!(
            cycle = point.cycle,
            probability = point.probability,
            "Timeseries point appended"
        );
        // Recover from lock poison rather than losing the series; the Vec
        // contents remain valid.
        self.points
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(point);
    }

    /// Ordered read-only copy for rendering.
    pub fn snapshot(&self) -> Vec<TimeseriesPoint> {
        self.points
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Clear the series. Explicit full reset only; a plain stop never
    /// calls this.
    pub fn reset(&self) {
        let mut points = self.points.lock().unwrap_or_else(|e| e.into_inner());
        let discarded = points.len();
        points.clear();
        info!(discarded, "Telemetry series reset");
    }
}
