// librc522/src/card/operations/write.rs

use log::debug;

use crate::constants::{BLOCK_LEN, MIFARE_ACK};
use crate::device::{Initialized, Reader};
use crate::protocol::commands::{PcdCommand, PiccCommand};
use crate::protocol::frame::FrameBuffer;
use crate::types::{BlockAddress, BlockData, SectorTrailer};
use crate::{Error, Result};

/// WRITE one data block. Sector trailers are refused; use [`write_trailer`].
pub fn write_block(
    reader: &mut Reader<Initialized>,
    block: BlockAddress,
    data: &BlockData,
) -> Result<()> {
    if block.is_trailer() {
        return Err(Error::SectorTrailer(block.as_u8()));
    }
    two_phase_write(reader, block, data)
}

/// WRITE a sector trailer (keys and access bits).
///
/// Refuses access bits whose inverted copies disagree: the card would lock
/// the sector permanently.
pub fn write_trailer(
    reader: &mut Reader<Initialized>,
    block: BlockAddress,
    trailer: &SectorTrailer,
) -> Result<()> {
    if !block.is_trailer() {
        return Err(Error::NotSectorTrailer(block.as_u8()));
    }
    if !trailer.access_bits.is_consistent() {
        let [b6, b7, b8, _] = *trailer.access_bits.as_bytes();
        return Err(Error::InvalidAccessBits([b6, b7, b8]));
    }
    two_phase_write(reader, block, &trailer.encode())
}

fn two_phase_write(
    reader: &mut Reader<Initialized>,
    block: BlockAddress,
    data: &BlockData,
) -> Result<()> {
    let mut frame = FrameBuffer::new();

    let mut cmd = [PiccCommand::Write.code(), block.as_u8(), 0, 0];
    let crc = reader.calculate_crc(&cmd[..2])?;
    cmd[2..].copy_from_slice(&crc);
    let bits = reader.transceive(PcdCommand::Transceive, &cmd, &mut frame)?;
    check_ack(bits, &frame)?;

    let mut payload = [0u8; BLOCK_LEN + 2];
    payload[..BLOCK_LEN].copy_from_slice(data.as_bytes());
    let crc = reader.calculate_crc(&payload[..BLOCK_LEN])?;
    payload[BLOCK_LEN..].copy_from_slice(&crc);
    let bits = reader.transceive(PcdCommand::Transceive, &payload, &mut frame)?;
    check_ack(bits, &frame)
}

fn check_ack(bits: usize, frame: &FrameBuffer) -> Result<()> {
    let response = frame.get(0).unwrap_or(0);
    if !PiccCommand::Write.response_shape().accepts(bits) || response & 0x0F != MIFARE_ACK {
        debug!("write: {}-bit answer {:#04x}", bits, response);
        return Err(Error::Nak { response });
    }
    Ok(())
}
