//! UAVTalk OSD telemetry firmware for RP2040.
//!
//! Receives UAVTalk telemetry from a flight controller over UART, keeps the
//! link handshake alive and publishes telemetry snapshots for the display.
//!
//! # Hardware Configuration
//!
//! | Function | GPIO | Description |
//! |----------|------|-------------|
//! | UART1 TX | 8    | To flight controller telemetry RX |
//! | UART1 RX | 9    | From flight controller telemetry TX |
//! | LED      | 25   | On-board LED (lit while the link is connected) |
//!
//! # Architecture
//!
//! The firmware uses the Embassy async runtime with two tasks:
//!
//! - **Telemetry Task**: Polls the UART, runs the UAVTalk link state machine
//!   and signals a snapshot whenever telemetry changes
//! - **Display Task**: Waits for snapshots and renders the summary lines
//!
//! Communication between tasks uses Embassy's [`Signal`](embassy_sync::signal::Signal)
//! with "latest value wins" semantics, so the display never lags behind.
//!
//! # Features
//!
//! - **`dev-panic`** (default): Use `panic-probe` for development (prints panic info via RTT)
//! - **`prod-panic`**: Use `panic-reset` for production (silent watchdog reset)
//! - **`board-revo`**: Flight controller is a Revolution-class board
//! - **`battery-sensor`**, **`baro-sensor`**, **`rssi-sensor`**: Local sensors
//!   replace the matching flight controller objects
//! - **`fake-gps`**: Replace GPS fixes with a fixed coordinate loop

#![no_std]

#[cfg(all(feature = "dev-panic", feature = "prod-panic"))]
compile_error!("Cannot enable both `dev-panic` and `prod-panic` features");

// Re-export core types for convenience
pub use osd_core::{
    BoardVariant, Config, ConnectionState, IoTransport, Settings, SettingsStore, TelemetryLink,
    TelemetryState,
};

pub mod display;
pub mod settings;

pub use settings::{build_config, load_config, RamSettings, SETTINGS_OFFSET};

/// UAVTalk baud rate used by OpenPilot-family flight controllers.
pub const TELEMETRY_BAUDRATE: u32 = 57_600;
