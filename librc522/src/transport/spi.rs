// librc522/src/transport/spi.rs

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;
use log::trace;

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// SPI transport over an embedded-hal 1.0 bus with a manually driven
/// chip-select line (active low).
pub struct SpiTransport<SPI, CS> {
    spi: SPI,
    cs: CS,
}

impl<SPI, CS> SpiTransport<SPI, CS>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
{
    pub fn new(spi: SPI, mut cs: CS) -> Result<Self> {
        cs.set_high()
            .map_err(|e| Error::Transport(format!("chip select init failed: {:?}", e)))?;
        Ok(Self { spi, cs })
    }

    /// Give back the bus and pin.
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }
}

impl<SPI, CS> Transport for SpiTransport<SPI, CS>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
{
    fn select(&mut self) -> Result<()> {
        self.cs
            .set_low()
            .map_err(|e| Error::Transport(format!("chip select failed: {:?}", e)))
    }

    fn exchange(&mut self, byte: u8) -> Result<u8> {
        let mut buf = [byte];
        self.spi
            .transfer_in_place(&mut buf)
            .map_err(|e| Error::Transport(format!("spi transfer failed: {:?}", e)))?;
        trace!("spi: {:02X} -> {:02X}", byte, buf[0]);
        Ok(buf[0])
    }

    fn deselect(&mut self) -> Result<()> {
        // release CS even when the flush failed
        let flushed = self
            .spi
            .flush()
            .map_err(|e| Error::Transport(format!("spi flush failed: {:?}", e)));
        self.cs
            .set_high()
            .map_err(|e| Error::Transport(format!("chip select release failed: {:?}", e)))?;
        flushed
    }
}
