// librc522/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts the SPI link away from register and card logic.
///
/// One register access is a transaction: `select`, then one `exchange` for
/// the address byte and one per data byte, then `deselect`.
pub trait Transport {
    /// Assert chip select and begin a transaction
    fn select(&mut self) -> Result<()>;

    /// Clock one byte out and return the byte clocked in
    fn exchange(&mut self, byte: u8) -> Result<u8>;

    /// Release chip select and end the transaction
    fn deselect(&mut self) -> Result<()>;

    /// Write every byte in `data`, discarding what comes back.
    fn write_all(&mut self, data: &[u8]) -> Result<()> {
        for &b in data {
            self.exchange(b)?;
        }
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn select(&mut self) -> Result<()> {
        (**self).select()
    }

    fn exchange(&mut self, byte: u8) -> Result<u8> {
        (**self).exchange(byte)
    }

    fn deselect(&mut self) -> Result<()> {
        (**self).deselect()
    }
}
