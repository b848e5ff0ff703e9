// librc522/src/types.rs

use crate::constants::{
    BLOCK_COUNT, BLOCK_LEN, BLOCKS_PER_SECTOR, DEFAULT_ACCESS_BITS, DEFAULT_KEY, KEY_LEN, UID_LEN,
};
use crate::protocol::crc::bcc;
use crate::{Error, Result};
use std::fmt;

/// Card UID - 4 serial bytes followed by their check byte (BCC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid([u8; UID_LEN + 1]);

impl Uid {
    /// Build a UID from its serial bytes, computing the check byte.
    pub fn new(serial: [u8; UID_LEN]) -> Self {
        let mut bytes = [0u8; UID_LEN + 1];
        bytes[..UID_LEN].copy_from_slice(&serial);
        bytes[UID_LEN] = bcc(&serial);
        Self(bytes)
    }

    /// Accept 5 raw anticollision bytes, verifying the check byte.
    pub fn from_anticollision(bytes: [u8; UID_LEN + 1]) -> Result<Self> {
        let expected = bcc(&bytes[..UID_LEN]);
        let actual = bytes[UID_LEN];
        if expected != actual {
            return Err(Error::BccMismatch { expected, actual });
        }
        Ok(Self(bytes))
    }

    /// The 4 serial bytes.
    pub fn serial(&self) -> &[u8] {
        &self.0[..UID_LEN]
    }

    pub fn check_byte(&self) -> u8 {
        self.0[UID_LEN]
    }

    /// Serial bytes plus check byte, as sent in a SELECT frame.
    pub fn as_bytes(&self) -> &[u8; UID_LEN + 1] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.serial())
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        match bytes.len() {
            UID_LEN => {
                let mut serial = [0u8; UID_LEN];
                serial.copy_from_slice(bytes);
                Ok(Self::new(serial))
            }
            n if n == UID_LEN + 1 => {
                let mut raw = [0u8; UID_LEN + 1];
                raw.copy_from_slice(bytes);
                Self::from_anticollision(raw)
            }
            n => Err(Error::InvalidLength {
                expected: UID_LEN + 1,
                actual: n,
            }),
        }
    }
}

/// ATQA - 16-bit answer to a REQA/WUPA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Atqa([u8; 2]);

impl Atqa {
    pub fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    /// ATQA as transmitted, LSB first.
    pub fn as_u16(&self) -> u16 {
        u16::from_le_bytes(self.0)
    }
}

/// Which of the two sector keys to authenticate with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyType {
    #[display(fmt = "key A")]
    A,
    #[display(fmt = "key B")]
    B,
}

/// Sector key - 6 secret bytes. Debug output is redacted.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SectorKey([u8; KEY_LEN]);

impl SectorKey {
    /// The factory transport key (all 0xFF).
    pub const DEFAULT: Self = Self(DEFAULT_KEY);

    pub const fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Parse a key typed as hex, e.g. `"ff ff ff ff ff ff"`.
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = crate::utils::parse_hex(s).map_err(Error::InvalidHex)?;
        let key: [u8; KEY_LEN] = bytes.as_slice().try_into().map_err(|_| Error::InvalidLength {
            expected: KEY_LEN,
            actual: bytes.len(),
        })?;
        Ok(Self(key))
    }
}

impl Default for SectorKey {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Debug for SectorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SectorKey(******)")
    }
}

/// Block address on a 1K card: 0..=63, 16 sectors of 4 blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockAddress(u8);

impl BlockAddress {
    pub fn new(block: u8) -> Result<Self> {
        if block >= BLOCK_COUNT {
            return Err(Error::InvalidBlock(block));
        }
        Ok(Self(block))
    }

    /// First block of `sector`.
    pub fn first_of_sector(sector: u8) -> Result<Self> {
        Self::new(sector.saturating_mul(BLOCKS_PER_SECTOR))
    }

    /// Trailer block of `sector`.
    pub fn trailer_of_sector(sector: u8) -> Result<Self> {
        Self::new(
            sector
                .saturating_mul(BLOCKS_PER_SECTOR)
                .saturating_add(BLOCKS_PER_SECTOR - 1),
        )
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    pub fn sector(&self) -> u8 {
        self.0 / BLOCKS_PER_SECTOR
    }

    pub fn is_trailer(&self) -> bool {
        self.0 % BLOCKS_PER_SECTOR == BLOCKS_PER_SECTOR - 1
    }

    /// All 64 addresses in ascending order.
    pub fn all() -> impl Iterator<Item = BlockAddress> {
        (0..BLOCK_COUNT).map(BlockAddress)
    }
}

impl TryFrom<u8> for BlockAddress {
    type Error = Error;

    fn try_from(block: u8) -> Result<Self> {
        Self::new(block)
    }
}

/// BlockData (16 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockData([u8; BLOCK_LEN]);

impl BlockData {
    pub fn from_bytes(bytes: [u8; BLOCK_LEN]) -> Self {
        Self(bytes)
    }

    pub fn zeroed() -> Self {
        Self([0u8; BLOCK_LEN])
    }

    pub fn as_bytes(&self) -> &[u8; BLOCK_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }

    pub fn to_ascii_safe(&self) -> String {
        self.0
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            })
            .collect()
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != BLOCK_LEN {
            return Err(Error::InvalidLength {
                expected: BLOCK_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; BLOCK_LEN];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

impl From<[u8; BLOCK_LEN]> for BlockData {
    fn from(bytes: [u8; BLOCK_LEN]) -> Self {
        Self(bytes)
    }
}

/// Access condition bytes 6..=9 of a sector trailer.
///
/// Bytes 6..=8 hold the C1/C2/C3 bits for the four blocks together with their
/// inverted copies; byte 9 is general purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessBits([u8; 4]);

impl AccessBits {
    /// Transport configuration: keys A/B readable/writable with key A.
    pub const TRANSPORT: Self = Self(DEFAULT_ACCESS_BITS);

    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Every condition nibble must match the complement stored next to it.
    /// A card with inconsistent access bits permanently locks the sector.
    pub fn is_consistent(&self) -> bool {
        let [b6, b7, b8, _] = self.0;
        let c1 = b7 >> 4;
        let c2 = b8 & 0x0F;
        let c3 = b8 >> 4;
        let not_c1 = b6 & 0x0F;
        let not_c2 = b6 >> 4;
        let not_c3 = b7 & 0x0F;
        c1 ^ not_c1 == 0x0F && c2 ^ not_c2 == 0x0F && c3 ^ not_c3 == 0x0F
    }
}

impl Default for AccessBits {
    fn default() -> Self {
        Self::TRANSPORT
    }
}

/// Sector trailer contents: key A, access bits, key B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectorTrailer {
    pub key_a: SectorKey,
    pub access_bits: AccessBits,
    pub key_b: SectorKey,
}

impl SectorTrailer {
    pub fn new(key_a: SectorKey, access_bits: AccessBits, key_b: SectorKey) -> Self {
        Self {
            key_a,
            access_bits,
            key_b,
        }
    }

    pub fn encode(&self) -> BlockData {
        let mut out = [0u8; BLOCK_LEN];
        out[..6].copy_from_slice(self.key_a.as_bytes());
        out[6..10].copy_from_slice(self.access_bits.as_bytes());
        out[10..].copy_from_slice(self.key_b.as_bytes());
        BlockData::from_bytes(out)
    }
}

/// Request flavour: REQA wakes only idle cards, WUPA also wakes halted ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RequestMode {
    #[display(fmt = "REQA")]
    Idle,
    #[display(fmt = "WUPA")]
    All,
}

/// Silicon revision reported by VersionReg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipVersion {
    /// NXP MFRC522 version 0.0
    V0_0,
    /// NXP MFRC522 version 1.0
    V1_0,
    /// NXP MFRC522 version 2.0
    V2_0,
    /// Fudan FM17522 clone
    Fm17522,
    Unknown(u8),
}

impl ChipVersion {
    pub fn from_register(value: u8) -> Self {
        match value {
            0x90 => Self::V0_0,
            0x91 => Self::V1_0,
            0x92 => Self::V2_0,
            0x88 => Self::Fm17522,
            other => Self::Unknown(other),
        }
    }
}
