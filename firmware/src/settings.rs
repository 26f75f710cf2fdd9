//! Settings storage and build-time board configuration.

use osd_core::{BoardVariant, Config, Settings, SettingsStore};

/// Offset of the telemetry settings block in the store.
pub const SETTINGS_OFFSET: u16 = 0;

const ERASED: u8 = 0xFF;

/// Settings store backed by RAM.
///
/// Starts erased, so the build-time configuration applies until a settings
/// block is written.
pub struct RamSettings<const N: usize> {
    cells: [u8; N],
}

impl<const N: usize> RamSettings<N> {
    pub const fn new() -> Self {
        Self { cells: [ERASED; N] }
    }
}

impl<const N: usize> Default for RamSettings<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> SettingsStore for RamSettings<N> {
    fn read_byte(&mut self, address: u16) -> u8 {
        self.cells.get(usize::from(address)).copied().unwrap_or(ERASED)
    }

    fn update_byte(&mut self, address: u16, value: u8) {
        if let Some(cell) = self.cells.get_mut(usize::from(address)) {
            *cell = value;
        }
    }
}

/// Configuration selected by Cargo features.
#[must_use]
pub fn build_config() -> Config {
    let board = if cfg!(feature = "board-revo") {
        BoardVariant::Revo
    } else {
        BoardVariant::Cc3d
    };
    let mut config = Config::new(board);
    config.battery_sensor = cfg!(feature = "battery-sensor");
    config.baro_sensor = cfg!(feature = "baro-sensor");
    config.rssi_sensor = cfg!(feature = "rssi-sensor");
    config
}

/// Build-time configuration overlaid with any stored settings.
pub fn load_config<S: SettingsStore>(store: &mut S) -> Config {
    let mut config = build_config();
    if store.read_byte(SETTINGS_OFFSET) != ERASED {
        let settings = Settings::load(store, SETTINGS_OFFSET);
        defmt::info!("stored settings: {:?}", settings);
        settings.apply(&mut config);
    }
    config
}
