//! Text summary of the telemetry state for the display collaborator.

use core::fmt::Write;
use heapless::String;
use osd_core::telemetry::HomeState;
use osd_core::{ConnectionState, TelemetryState};

/// Width of one summary line.
pub const LINE_LEN: usize = 48;

pub type Line = String<LINE_LEN>;

fn connection_label(state: ConnectionState) -> &'static str {
    match state {
        ConnectionState::Disconnected => "NO LINK",
        ConnectionState::Establishing => "WAIT",
        ConnectionState::Connected => "LINK",
    }
}

/// Link, arming and flight time.
pub fn status_line(state: &TelemetryState) -> Line {
    let mut line = Line::new();
    let status = &state.status;
    let _ = write!(
        line,
        "{} {} M{} {:02}:{:02}",
        connection_label(status.connection),
        if status.armed { "ARMED" } else { "DISARMED" },
        status.flight_mode,
        status.flight_time / 60,
        status.flight_time % 60,
    );
    line
}

/// Attitude and altitude.
pub fn flight_line(state: &TelemetryState) -> Line {
    let mut line = Line::new();
    let _ = write!(
        line,
        "R{:.0} P{:.0} Y{:.0} ALT{:.1} VS{:.1}",
        state.attitude.roll,
        state.attitude.pitch,
        state.attitude.yaw,
        state.stable.altitude,
        state.stable.climb,
    );
    line
}

/// GPS fix and home offset.
pub fn gps_line(state: &TelemetryState) -> Line {
    let mut line = Line::new();
    let gps = &state.gps;
    let _ = write!(line, "{:?} {}SAT {:.1}m/s", gps.state, gps.satellites, gps.speed);
    if state.home.state == HomeState::Fixed {
        let _ = write!(line, " H{:+.0}", state.home.altitude_delta);
    }
    line
}

/// Battery and input warnings.
pub fn battery_line(state: &TelemetryState) -> Line {
    let mut line = Line::new();
    let battery = &state.battery;
    let _ = write!(
        line,
        "{:.1}V {}S {}% {:.1}A {}mAh",
        battery.voltage, battery.cells, battery.level, battery.current, battery.consumed,
    );
    if state.messages.rssi_low {
        let _ = line.push_str(" RSSI!");
    }
    line
}
