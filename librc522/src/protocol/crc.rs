// librc522/src/protocol/crc.rs
//! Software reference for the checks the chip and card compute.
//!
//! The driver itself always offloads CRC_A to the chip coprocessor; these
//! functions back the simulated reader and let callers verify a block's
//! trailing CRC if they want to.

/// CRC_A preset (ISO/IEC 14443-3, 6.2.4)
pub const CRC_A_PRESET: u16 = 0x6363;

/// Compute CRC_A over `data`, returned low byte first as transmitted.
pub fn crc_a(data: &[u8]) -> [u8; 2] {
    let crc = data.iter().fold(CRC_A_PRESET, |crc, &b| {
        let mut ch = b ^ (crc & 0x00FF) as u8;
        ch ^= ch << 4;
        let ch = ch as u16;
        (crc >> 8) ^ (ch << 8) ^ (ch << 3) ^ (ch >> 4)
    });
    crc.to_le_bytes()
}

/// Block check character: XOR of the UID bytes.
pub fn bcc(uid: &[u8]) -> u8 {
    uid.iter().fold(0u8, |acc, &b| acc ^ b)
}
