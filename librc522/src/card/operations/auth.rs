// librc522/src/card/operations/auth.rs

use log::debug;

use crate::constants::{KEY_LEN, UID_LEN};
use crate::device::{Initialized, Reader};
use crate::protocol::commands::{PcdCommand, PiccCommand};
use crate::protocol::frame::FrameBuffer;
use crate::protocol::registers::{Register, status2};
use crate::types::{BlockAddress, KeyType, SectorKey, Uid};
use crate::{Error, Result};

/// Three-pass MIFARE authentication for the sector containing `block`.
///
/// Success is read back from Status2Reg.MFCrypto1On; the chip command itself
/// finishing is not enough.
pub fn authenticate(
    reader: &mut Reader<Initialized>,
    key_type: KeyType,
    block: BlockAddress,
    key: &SectorKey,
    uid: &Uid,
) -> Result<()> {
    let mut buf = [0u8; 2 + KEY_LEN + UID_LEN];
    buf[0] = PiccCommand::auth(key_type).code();
    buf[1] = block.as_u8();
    buf[2..2 + KEY_LEN].copy_from_slice(key.as_bytes());
    buf[2 + KEY_LEN..].copy_from_slice(uid.serial());

    let mut frame = FrameBuffer::new();
    reader.transceive(PcdCommand::MfAuthent, &buf, &mut frame)?;

    let status = reader.read_register(Register::Status2)?;
    if status & status2::MF_CRYPTO1_ON == 0 {
        debug!(
            "auth key {} block {}: MFCrypto1On not set (Status2={:#04x})",
            key_type, block, status
        );
        return Err(Error::AuthFailed {
            block: block.as_u8(),
        });
    }
    Ok(())
}
