// librc522/src/card/operations/anticoll.rs

use crate::constants::{NVB_ANTICOLLISION, UID_LEN};
use crate::device::{Initialized, Reader};
use crate::protocol::commands::{PcdCommand, PiccCommand};
use crate::protocol::frame::FrameBuffer;
use crate::protocol::registers::Register;
use crate::types::Uid;
use crate::{Error, Result};

/// Cascade level 1 anticollision. Returns the UID after checking its BCC.
pub fn anticollision(reader: &mut Reader<Initialized>) -> Result<Uid> {
    let cmd = PiccCommand::SelCl1;
    let mut frame = FrameBuffer::new();

    reader.write_register(Register::BitFraming, 0x00)?;
    let bits = reader.transceive(
        PcdCommand::Transceive,
        &[cmd.code(), NVB_ANTICOLLISION],
        &mut frame,
    )?;

    let shape = cmd.response_shape();
    if !shape.accepts(bits) {
        return Err(Error::UnexpectedBits {
            expected: shape.expected_bits(),
            actual: bits,
        });
    }
    let bytes: [u8; UID_LEN + 1] = frame
        .as_bytes()
        .get(..UID_LEN + 1)
        .and_then(|s| s.try_into().ok())
        .ok_or(Error::InvalidLength {
            expected: UID_LEN + 1,
            actual: frame.len(),
        })?;
    Uid::from_anticollision(bytes)
}
