// librc522/src/card/operations/request.rs

use crate::device::{Initialized, Reader};
use crate::protocol::commands::{PcdCommand, PiccCommand};
use crate::protocol::frame::FrameBuffer;
use crate::protocol::registers::{Register, bit_framing};
use crate::types::{Atqa, RequestMode};
use crate::{Error, Result};

/// REQA / WUPA as a 7-bit short frame. Returns the card's ATQA.
pub fn request(reader: &mut Reader<Initialized>, mode: RequestMode) -> Result<Atqa> {
    let cmd = PiccCommand::request(mode);
    let mut frame = FrameBuffer::new();

    reader.write_register(Register::BitFraming, bit_framing::SHORT_FRAME)?;
    let result = reader.transceive(PcdCommand::Transceive, &[cmd.code()], &mut frame);
    reader.write_register(Register::BitFraming, 0x00)?;
    let bits = result?;

    let shape = cmd.response_shape();
    if !shape.accepts(bits) {
        return Err(Error::UnexpectedBits {
            expected: shape.expected_bits(),
            actual: bits,
        });
    }
    let bytes = frame.as_bytes();
    Ok(Atqa::from_bytes([bytes[0], bytes[1]]))
}
