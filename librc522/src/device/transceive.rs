// librc522/src/device/transceive.rs
//! Bounded-wait command executor.
//!
//! Every card operation is one call into [`Reader::transceive`]: load the
//! FIFO, start the chip command, busy-poll the interrupt flags, then sort the
//! outcome into no response, chip error, no tag, or a received frame.

use log::{debug, trace};

use crate::device::handle::{Initialized, Reader};
use crate::error::ChipFault;
use crate::protocol::commands::PcdCommand;
use crate::protocol::frame::{FrameBuffer, bytes_to_read, received_bits};
use crate::protocol::registers::{Register, bit_framing, control, error, fifo_level, irq};
use crate::utils::Deadline;
use crate::{Error, Result};

impl Reader<Initialized> {
    /// Execute `command` with `send` staged in the FIFO.
    ///
    /// Returns the received length in bits (0 for commands that do not
    /// receive). For [`PcdCommand::Transceive`], up to
    /// [`FRAME_CAPACITY`](crate::constants::FRAME_CAPACITY) received bytes are
    /// copied into `recv`.
    pub fn transceive(
        &mut self,
        command: PcdCommand,
        send: &[u8],
        recv: &mut FrameBuffer,
    ) -> Result<usize> {
        let masks = command.irq_masks();
        recv.clear();
        trace!("{:?} out {:02X?}", command, send);

        self.write_register(Register::ComIEn, masks.enable | irq::SET)?;
        self.clear_bits(Register::ComIrq, irq::SET)?;
        self.write_register(Register::FifoLevel, fifo_level::FLUSH)?;
        self.write_register(Register::Command, PcdCommand::Idle.code())?;

        self.write_fifo(send)?;

        self.write_register(Register::Command, command.code())?;
        if command.needs_start_send() {
            self.set_bits(Register::BitFraming, bit_framing::START_SEND)?;
        }

        let mut deadline = Deadline::start(self.config.transceive_wait);
        let (flags, expired) = loop {
            let flags = self.read_register(Register::ComIrq)?;
            if flags & (irq::TIMER | masks.wait) != 0 {
                break (flags, false);
            }
            if deadline.tick() {
                break (flags, true);
            }
        };

        self.clear_bits(Register::BitFraming, bit_framing::START_SEND)?;

        if expired {
            debug!(
                "{:?}: no completion interrupt after {} polls",
                command,
                deadline.polls()
            );
            return Err(Error::NoResponse);
        }

        let errors = self.read_register(Register::Error)? & error::FATAL;
        if let Some(fault) = ChipFault::from_error_reg(errors) {
            debug!("{:?}: chip error {} (ErrorReg={:#04x})", command, fault, errors);
            return Err(Error::Chip {
                fault,
                bits: errors,
            });
        }

        if flags & masks.enable & irq::TIMER != 0 {
            trace!("{:?}: timer expired, no tag", command);
            return Err(Error::NoTag);
        }

        if !command.receives() {
            return Ok(0);
        }

        let level = (self.read_register(Register::FifoLevel)? & fifo_level::LEVEL_MASK) as usize;
        let last_bits = self.read_register(Register::Control)? & control::RX_LAST_BITS;
        let bits = received_bits(level, last_bits);
        for _ in 0..bytes_to_read(level) {
            let b = self.read_register(Register::FifoData)?;
            recv.push(b);
        }
        recv.set_bit_len(bits);
        trace!("{:?} in {:02X?} ({} bits)", command, recv.as_bytes(), bits);
        Ok(bits)
    }
}
