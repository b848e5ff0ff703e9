// librc522/src/device/handle.rs

use std::marker::PhantomData;

use crate::config::ReaderConfig;
use crate::protocol::commands::PcdCommand;
use crate::protocol::registers::{MODE_CRC_PRESET_6363, Register, TX_ASK_FORCE_100, tx_control};
use crate::transport::Transport;
use crate::types::ChipVersion;
use crate::Result;

/// Type-state markers
pub struct Uninitialized;
pub struct Initialized;

/// Reader handle that enforces initialization state at compile time.
///
/// The handle exclusively owns its transport, so register read-modify-write
/// sequences cannot interleave with another user of the same chip.
pub struct Reader<State = Uninitialized> {
    pub(crate) transport: Box<dyn Transport>,
    pub(crate) config: ReaderConfig,
    _state: PhantomData<State>,
}

impl<State> Reader<State> {
    /// Configuration the handle was built with.
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Read VersionReg and classify the silicon.
    pub fn version(&mut self) -> Result<ChipVersion> {
        let raw = self.read_register(Register::Version)?;
        Ok(ChipVersion::from_register(raw))
    }

    /// Switch the RF field on. Leaves TxControlReg untouched when either
    /// driver pin is already enabled.
    pub fn antenna_on(&mut self) -> Result<()> {
        let current = self.read_register(Register::TxControl)?;
        if current & tx_control::ANTENNA == 0 {
            self.set_bits(Register::TxControl, tx_control::ANTENNA)?;
        }
        Ok(())
    }

    /// Switch the RF field off.
    pub fn antenna_off(&mut self) -> Result<()> {
        self.clear_bits(Register::TxControl, tx_control::ANTENNA)
    }

    pub fn antenna_enabled(&mut self) -> Result<bool> {
        Ok(self.read_register(Register::TxControl)? & tx_control::ANTENNA != 0)
    }

    /// SoftReset, timer and modulation setup, antenna on.
    fn run_init_sequence(&mut self) -> Result<()> {
        log::debug!("initializing reader: {:?}", self.config);
        self.write_register(Register::Command, PcdCommand::SoftReset.code())?;

        let cfg = self.config;
        let [reload_high, reload_low] = cfg.timer_reload.to_be_bytes();
        self.write_register(Register::TMode, cfg.timer_mode)?;
        self.write_register(Register::TPrescaler, cfg.timer_prescaler)?;
        self.write_register(Register::TReloadLow, reload_low)?;
        self.write_register(Register::TReloadHigh, reload_high)?;

        self.write_register(Register::TxAsk, TX_ASK_FORCE_100)?;
        self.write_register(Register::Mode, MODE_CRC_PRESET_6363)?;

        self.antenna_on()
    }

    fn into_state<Next>(self) -> Reader<Next> {
        Reader {
            transport: self.transport,
            config: self.config,
            _state: PhantomData,
        }
    }
}

impl Reader<Uninitialized> {
    /// Create a Reader from an existing Transport instance with the default
    /// configuration.
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Self {
        Self::with_config(transport, ReaderConfig::default())
    }

    pub fn with_config(transport: Box<dyn Transport>, config: ReaderConfig) -> Self {
        Self {
            transport,
            config,
            _state: PhantomData,
        }
    }

    /// Reset and configure the chip. Returns an initialized Reader on
    /// success; on failure the chip state is unspecified and the handle is
    /// dropped.
    pub fn initialize(mut self) -> Result<Reader<Initialized>> {
        self.run_init_sequence()?;
        Ok(self.into_state())
    }
}

impl Reader<Initialized> {
    /// Re-run the initialization sequence on a live reader.
    pub fn reinitialize(&mut self) -> Result<()> {
        self.run_init_sequence()
    }

    /// Give back the transport, e.g. to hand the bus to another driver.
    pub fn release(self) -> Box<dyn Transport> {
        self.transport
    }
}
