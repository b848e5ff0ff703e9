// librc522/src/device/bus.rs
//! Register access over the transport.

use log::trace;

use crate::constants::FIFO_CAPACITY;
use crate::device::handle::Reader;
use crate::protocol::registers::Register;
use crate::transport::Transport;
use crate::{Error, Result};

impl<State> Reader<State> {
    /// Run `f` inside one select/deselect pair. Deselect is attempted even
    /// when `f` fails; the first error wins.
    fn transaction<T>(&mut self, f: impl FnOnce(&mut dyn Transport) -> Result<T>) -> Result<T> {
        self.transport.select()?;
        let result = f(&mut *self.transport);
        let released = self.transport.deselect();
        let value = result?;
        released?;
        Ok(value)
    }

    /// Write one register.
    pub fn write_register(&mut self, reg: Register, value: u8) -> Result<()> {
        trace!("write {:?} <- {:#04x}", reg, value);
        self.transaction(|t| t.write_all(&[reg.write_address(), value]))
    }

    /// Read one register.
    pub fn read_register(&mut self, reg: Register) -> Result<u8> {
        let value = self.transaction(|t| {
            t.exchange(reg.read_address())?;
            t.exchange(0x00)
        })?;
        trace!("read {:?} -> {:#04x}", reg, value);
        Ok(value)
    }

    /// Read-modify-write: OR `mask` into the register.
    pub fn set_bits(&mut self, reg: Register, mask: u8) -> Result<()> {
        let current = self.read_register(reg)?;
        self.write_register(reg, current | mask)
    }

    /// Read-modify-write: clear `mask` in the register.
    pub fn clear_bits(&mut self, reg: Register, mask: u8) -> Result<()> {
        let current = self.read_register(reg)?;
        self.write_register(reg, current & !mask)
    }

    /// Push `data` into the FIFO, one register write per byte.
    pub(crate) fn write_fifo(&mut self, data: &[u8]) -> Result<()> {
        if data.len() > FIFO_CAPACITY {
            return Err(Error::FrameTooLong {
                len: data.len(),
                capacity: FIFO_CAPACITY,
            });
        }
        for &b in data {
            self.write_register(Register::FifoData, b)?;
        }
        Ok(())
    }
}
