#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::UART1;
use embassy_rp::uart::{
    BufferedInterruptHandler, BufferedUart, BufferedUartRx, BufferedUartTx, Config as UartConfig,
};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Instant, Timer};
use static_cell::StaticCell;
use uavtalk_osd::{
    display, load_config, ConnectionState, IoTransport, RamSettings, TelemetryLink, TelemetryState,
    TELEMETRY_BAUDRATE,
};

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

bind_interrupts!(struct Irqs {
    UART1_IRQ => BufferedInterruptHandler<UART1>;
});

/// Poll period of the telemetry loop. At 57600 baud this is under six bytes
/// per iteration, well below one frame.
const POLL_INTERVAL_MS: u64 = 1;

type UartTransport = IoTransport<BufferedUartRx, BufferedUartTx>;

/// Signal for passing telemetry snapshots from the link to the display task.
/// Using Signal instead of Channel provides "latest value wins" semantics:
/// the display only ever needs the newest state.
static TELEMETRY_SIGNAL: StaticCell<Signal<CriticalSectionRawMutex, TelemetryState>> =
    StaticCell::new();

/// UART ring buffers.
static TX_BUF: StaticCell<[u8; 128]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 512]> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("UAVTalk OSD starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    let signal = TELEMETRY_SIGNAL.init(Signal::new());

    // --- Configuration ---
    let mut store = RamSettings::<16>::new();
    let config = load_config(&mut store);
    info!("board: {:?}, home calc: {}", config.board, config.computes_home());

    // --- UART Setup ---
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = TELEMETRY_BAUDRATE;

    let uart = BufferedUart::new(
        p.UART1,
        p.PIN_8, // TX
        p.PIN_9, // RX
        Irqs,
        TX_BUF.init([0; 128]),
        RX_BUF.init([0; 512]),
        uart_config,
    );
    let (tx, rx) = uart.split();
    let link = TelemetryLink::new(IoTransport::new(rx, tx), config);

    // On-board LED mirrors the link state
    let led = Output::new(p.PIN_25, Level::Low);

    spawner.spawn(telemetry_task(link, signal, led).unwrap());
    spawner.spawn(display_task(signal).unwrap());

    info!("UAVTalk OSD initialized, waiting for telemetry...");
}

/// Telemetry task - drives the UAVTalk link and signals changed telemetry.
#[embassy_executor::task]
async fn telemetry_task(
    mut link: TelemetryLink<UartTransport>,
    signal: &'static Signal<CriticalSectionRawMutex, TelemetryState>,
    mut led: Output<'static>,
) {
    let mut connection = link.connection();

    loop {
        // Tick counter wraps every ~49 days; deadlines compare wrap-safely.
        let now = Instant::now().as_millis() as u32;
        if link.update(now) {
            signal.signal(*link.telemetry());
        }

        if link.connection() != connection {
            connection = link.connection();
            led.set_level(if connection == ConnectionState::Connected {
                Level::High
            } else {
                Level::Low
            });
        }

        Timer::after_millis(POLL_INTERVAL_MS).await;
    }
}

/// Display task - waits for telemetry snapshots and renders them.
#[embassy_executor::task]
async fn display_task(signal: &'static Signal<CriticalSectionRawMutex, TelemetryState>) {
    loop {
        let state = signal.wait().await;
        for line in [
            display::status_line(&state),
            display::flight_line(&state),
            display::gps_line(&state),
            display::battery_line(&state),
        ] {
            info!("{}", line.as_str());
        }
    }
}
