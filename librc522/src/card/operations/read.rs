// librc522/src/card/operations/read.rs

use crate::constants::BLOCK_LEN;
use crate::device::{Initialized, Reader};
use crate::protocol::commands::{PcdCommand, PiccCommand};
use crate::protocol::frame::FrameBuffer;
use crate::types::{BlockAddress, BlockData};
use crate::{Error, Result};

/// READ one 16-byte block. The card answers 16 data bytes plus CRC_A; the
/// CRC is counted in the bit length but not verified here.
pub fn read_block(reader: &mut Reader<Initialized>, block: BlockAddress) -> Result<BlockData> {
    let cmd = PiccCommand::Read;
    let mut buf = [cmd.code(), block.as_u8(), 0, 0];
    let crc = reader.calculate_crc(&buf[..2])?;
    buf[2..].copy_from_slice(&crc);

    let mut frame = FrameBuffer::new();
    let bits = reader.transceive(PcdCommand::Transceive, &buf, &mut frame)?;

    let shape = cmd.response_shape();
    if !shape.accepts(bits) {
        return Err(Error::UnexpectedBits {
            expected: shape.expected_bits(),
            actual: bits,
        });
    }
    let data = frame
        .as_bytes()
        .get(..BLOCK_LEN)
        .ok_or(Error::InvalidLength {
            expected: BLOCK_LEN,
            actual: frame.len(),
        })?;
    BlockData::try_from(data)
}
