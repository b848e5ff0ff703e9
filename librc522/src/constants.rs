// librc522/src/constants.rs
//! Common protocol constants used across the crate

/// Depth of the MFRC522 FIFO in bytes. Outgoing frames must fit in it.
pub const FIFO_CAPACITY: usize = 64;

/// Capacity of a receive [`FrameBuffer`](crate::protocol::FrameBuffer).
pub const FRAME_CAPACITY: usize = 16;

/// UID length for single-size MIFARE Classic cards (without BCC)
pub const UID_LEN: usize = 4;

/// Sector key length
pub const KEY_LEN: usize = 6;

/// Block payload length
pub const BLOCK_LEN: usize = 16;

/// Number of blocks on a MIFARE Classic 1K card
pub const BLOCK_COUNT: u8 = 64;

/// Blocks per sector on a MIFARE Classic 1K card
pub const BLOCKS_PER_SECTOR: u8 = 4;

/// Number of sectors on a MIFARE Classic 1K card
pub const SECTOR_COUNT: u8 = BLOCK_COUNT / BLOCKS_PER_SECTOR;

/// 4-bit MIFARE acknowledge
pub const MIFARE_ACK: u8 = 0x0A;

/// Number Of Valid Bits for a full anticollision request (2 bytes, 0 bits)
pub const NVB_ANTICOLLISION: u8 = 0x20;

/// Number Of Valid Bits for a SELECT carrying the full 40-bit UID + BCC
pub const NVB_SELECT: u8 = 0x70;

/// Factory transport key shipped on blank cards
pub const DEFAULT_KEY: [u8; KEY_LEN] = [0xFF; KEY_LEN];

/// Factory access condition bytes (transport configuration)
pub const DEFAULT_ACCESS_BITS: [u8; 4] = [0xFF, 0x07, 0x80, 0x69];

/// Expected response sizes in bits
pub const ATQA_BITS: usize = 16;
pub const SAK_BITS: usize = 24;
pub const READ_BITS: usize = 144;
pub const ACK_BITS: usize = 4;
