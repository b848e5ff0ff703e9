// librc522/src/config.rs
//! Reader configuration: chip timer programming and host-side wait budgets.

use std::time::Duration;

/// Upper bound on a host-side busy-wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WaitBudget {
    /// Give up after this many register polls.
    Polls(u32),
    /// Give up once this much wall-clock time has elapsed.
    Elapsed(Duration),
}

/// Default poll budget of the transceive wait (roughly 25 ms on an 8 MHz MCU)
pub const DEFAULT_TRANSCEIVE_POLLS: u32 = 2000;

/// Default poll budget of the CRC coprocessor wait
pub const DEFAULT_CRC_POLLS: u32 = 255;

/// TModeReg: TAuto=1, prescaler high nibble 0xD
pub const DEFAULT_TIMER_MODE: u8 = 0x8D;

/// TPrescalerReg: prescaler low byte
pub const DEFAULT_TIMER_PRESCALER: u8 = 0x3E;

/// Timer reload value; with the default prescaler ≈ 15.5 ms
pub const DEFAULT_TIMER_RELOAD: u16 = 30;

/// Configuration applied by [`Reader::initialize`](crate::device::Reader) and
/// consulted by every poll loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReaderConfig {
    pub timer_mode: u8,
    pub timer_prescaler: u8,
    pub timer_reload: u16,
    pub transceive_wait: WaitBudget,
    pub crc_wait: WaitBudget,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            timer_mode: DEFAULT_TIMER_MODE,
            timer_prescaler: DEFAULT_TIMER_PRESCALER,
            timer_reload: DEFAULT_TIMER_RELOAD,
            transceive_wait: WaitBudget::Polls(DEFAULT_TRANSCEIVE_POLLS),
            crc_wait: WaitBudget::Polls(DEFAULT_CRC_POLLS),
        }
    }
}

impl ReaderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transceive_wait(mut self, wait: WaitBudget) -> Self {
        self.transceive_wait = wait;
        self
    }

    pub fn with_crc_wait(mut self, wait: WaitBudget) -> Self {
        self.crc_wait = wait;
        self
    }

    /// Program the chip timer. `mode` carries TAuto and the prescaler high
    /// nibble, `prescaler` the low byte.
    pub fn with_timer(mut self, mode: u8, prescaler: u8, reload: u16) -> Self {
        self.timer_mode = mode;
        self.timer_prescaler = prescaler;
        self.timer_reload = reload;
        self
    }

    /// Chip timer period implied by the timer settings, from the datasheet
    /// formula `(2 * prescaler + 1) * (reload + 1) / 13.56 MHz`.
    pub fn timer_period(&self) -> Duration {
        let prescaler = (((self.timer_mode & 0x0F) as u64) << 8) | self.timer_prescaler as u64;
        let ticks = (2 * prescaler + 1) * (self.timer_reload as u64 + 1);
        Duration::from_nanos(ticks * 1_000_000_000 / 13_560_000)
    }
}
