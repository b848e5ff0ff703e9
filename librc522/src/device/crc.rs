// librc522/src/device/crc.rs

use log::warn;

use crate::device::handle::Reader;
use crate::protocol::commands::PcdCommand;
use crate::protocol::registers::{Register, div_irq, fifo_level};
use crate::utils::Deadline;
use crate::Result;

impl<State> Reader<State> {
    /// Compute CRC_A over `data` on the chip's coprocessor.
    ///
    /// Returns `[low, high]`, the order the bytes are appended to a frame.
    /// If the coprocessor does not signal completion within the configured
    /// budget the result registers are returned as they are, after a warning.
    pub fn calculate_crc(&mut self, data: &[u8]) -> Result<[u8; 2]> {
        // Set2 bit clear: writing the CRCIRq bit clears it
        self.write_register(Register::DivIrq, div_irq::CRC)?;
        self.write_register(Register::FifoLevel, fifo_level::FLUSH)?;
        self.write_fifo(data)?;
        self.write_register(Register::Command, PcdCommand::CalcCrc.code())?;

        let mut deadline = Deadline::start(self.config.crc_wait);
        loop {
            let flags = self.read_register(Register::DivIrq)?;
            if flags & div_irq::CRC != 0 {
                break;
            }
            if deadline.tick() {
                warn!(
                    "CRC coprocessor did not finish after {} polls; using stale result",
                    deadline.polls()
                );
                break;
            }
        }

        let low = self.read_register(Register::CrcResultLow)?;
        let high = self.read_register(Register::CrcResultHigh)?;
        Ok([low, high])
    }
}
