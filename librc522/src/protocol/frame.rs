// librc522/src/protocol/frame.rs

use crate::constants::FRAME_CAPACITY;

/// Receive buffer for one transceive.
///
/// Holds at most [`FRAME_CAPACITY`] bytes copied out of the chip FIFO plus the
/// number of bits the chip reported receiving. The bit count is the card's
/// answer as measured by the chip and may describe more bytes than the buffer
/// kept (a READ answers 18 bytes; only the 16 data bytes are stored).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    bytes: [u8; FRAME_CAPACITY],
    len: usize,
    bits: usize,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self {
            bytes: [0u8; FRAME_CAPACITY],
            len: 0,
            bits: 0,
        }
    }

    pub fn clear(&mut self) {
        self.len = 0;
        self.bits = 0;
    }

    /// Bytes stored by the last exchange.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        FRAME_CAPACITY
    }

    /// Received length in bits.
    pub fn bit_len(&self) -> usize {
        self.bits
    }

    /// Valid bits in the final received byte; 0 means all 8.
    pub fn last_bits(&self) -> u8 {
        (self.bits % 8) as u8
    }

    /// Byte at `index`, if stored.
    pub fn get(&self, index: usize) -> Option<u8> {
        self.as_bytes().get(index).copied()
    }

    /// Append a received byte. Returns false once the buffer is full.
    pub(crate) fn push(&mut self, byte: u8) -> bool {
        if self.len >= FRAME_CAPACITY {
            return false;
        }
        self.bytes[self.len] = byte;
        self.len += 1;
        true
    }

    pub(crate) fn set_bit_len(&mut self, bits: usize) {
        self.bits = bits;
    }
}

/// Received bit length from the FIFO byte count and ControlReg.RxLastBits.
pub fn received_bits(fifo_level: usize, last_bits: u8) -> usize {
    if last_bits != 0 {
        fifo_level.saturating_sub(1) * 8 + last_bits as usize
    } else {
        fifo_level * 8
    }
}

/// Number of bytes to copy out of the FIFO: at least one, at most capacity.
pub fn bytes_to_read(fifo_level: usize) -> usize {
    fifo_level.clamp(1, FRAME_CAPACITY)
}
