// fixtures.rs — provides commonly used card contents and keys

use librc522::types::{BlockAddress, BlockData, SectorKey, Uid};

pub fn sample_uid_bytes() -> [u8; 4] {
    [0x12, 0x34, 0x56, 0x78]
}

pub fn sample_uid() -> Uid {
    Uid::new(sample_uid_bytes())
}

/// Raw anticollision answer: serial bytes followed by their BCC.
pub fn anticollision_answer() -> Vec<u8> {
    hex::decode("1234567808").unwrap()
}

pub fn license_payload() -> BlockData {
    BlockData::from_bytes(*b"License permit:B")
}

pub fn sample_blockdata(fill: u8) -> BlockData {
    BlockData::from_bytes([fill; 16])
}

pub fn block(n: u8) -> BlockAddress {
    BlockAddress::new(n).unwrap()
}

pub fn default_key() -> SectorKey {
    SectorKey::DEFAULT
}

pub fn custom_key() -> SectorKey {
    SectorKey::from_hex("a0 a1 a2 a3 a4 a5").unwrap()
}
