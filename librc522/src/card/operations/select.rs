// librc522/src/card/operations/select.rs

use log::debug;

use crate::constants::NVB_SELECT;
use crate::device::{Initialized, Reader};
use crate::protocol::commands::{PcdCommand, PiccCommand};
use crate::protocol::frame::FrameBuffer;
use crate::types::Uid;
use crate::{Error, Result};

/// SELECT the card with `uid`. Returns its SAK, or 0 when no card answered
/// as expected. Only transport failures are reported as errors.
pub fn select(reader: &mut Reader<Initialized>, uid: &Uid) -> Result<u8> {
    let mut buf = [0u8; 9];
    buf[0] = PiccCommand::SelCl1.code();
    buf[1] = NVB_SELECT;
    buf[2..7].copy_from_slice(uid.as_bytes());
    let crc = reader.calculate_crc(&buf[..7])?;
    buf[7..].copy_from_slice(&crc);

    let mut frame = FrameBuffer::new();
    match reader.transceive(PcdCommand::Transceive, &buf, &mut frame) {
        Ok(bits) if PiccCommand::select_shape().accepts(bits) => Ok(frame.get(0).unwrap_or(0)),
        Ok(bits) => {
            debug!("select {}: unexpected {}-bit answer", uid, bits);
            Ok(0)
        }
        Err(e @ Error::Transport(_)) => Err(e),
        Err(e) => {
            debug!("select {}: {}", uid, e);
            Ok(0)
        }
    }
}
