//! Console rendering of monitor status and the telemetry series.
//!
//! The repository's stand-in for the status text and chart sinks: plain
//! lines, one per plotted point, with a probability bar and the point's
//! color tag.

use drowse_guard_core::{ColorTag, MonitorStatus, TimeseriesPoint};

/// Width of the probability bar at probability 1.0.
const BAR_WIDTH: usize = 40;

/// One status line, e.g. `[Evaluating] drowsy`.
pub fn status_line(status: &MonitorStatus) -> String {
    format!("[{:?}] {}", status.phase, status.text)
}

/// Render the whole series, one line per cycle in cycle order.
pub fn render_series(points: &[TimeseriesPoint]) -> String {
    if points.is_empty() {
        return "(no cycles completed yet)".to_string();
    }

    points
        .iter()
        .map(render_point)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_point(point: &TimeseriesPoint) -> String {
    let filled = (point.probability.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    format!(
        "{:>5}  {:<width$}  {:.3}  {}",
        point.cycle,
        "#".repeat(filled),
        point.probability,
        color_name(point.color),
        width = BAR_WIDTH,
    )
}

fn color_name(color: ColorTag) -> &'static str {
    match color {
        ColorTag::Red => "red",
        ColorTag::Green => "green",
        ColorTag::Amber => "amber",
    }
}
