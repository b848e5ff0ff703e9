// librc522/src/card/operations/halt.rs

use log::trace;

use crate::device::{Initialized, Reader};
use crate::protocol::commands::{PcdCommand, PiccCommand};
use crate::protocol::frame::FrameBuffer;
use crate::protocol::registers::{Register, status2};
use crate::{Error, Result};

/// HLTA. The card does not answer a successful halt, so silence and
/// card-side errors are ignored; only transport failures are returned.
/// Also switches off the chip's Crypto1 unit.
pub fn halt(reader: &mut Reader<Initialized>) -> Result<()> {
    let mut buf = [PiccCommand::HaltA.code(), 0x00, 0, 0];
    let crc = reader.calculate_crc(&buf[..2])?;
    buf[2..].copy_from_slice(&crc);

    let mut frame = FrameBuffer::new();
    match reader.transceive(PcdCommand::Transceive, &buf, &mut frame) {
        Ok(_) | Err(Error::NoTag) | Err(Error::NoResponse) | Err(Error::Chip { .. }) => {}
        Err(e) => return Err(e),
    }
    trace!("halt sent");
    reader.clear_bits(Register::Status2, status2::MF_CRYPTO1_ON)
}
