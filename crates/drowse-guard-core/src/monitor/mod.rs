mod controller;
mod state;

pub use {
    controller::Monitor,
    state::{MonitorCommand, MonitorPhase, MonitorSettings, MonitorStatus, MonitoringSession},
};
