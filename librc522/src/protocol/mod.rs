// librc522/src/protocol/mod.rs

pub mod commands;
pub mod crc;
pub mod frame;
pub mod registers;

pub use commands::{IrqMasks, PcdCommand, PiccCommand, ResponseShape};
pub use crc::{bcc, crc_a};
pub use frame::FrameBuffer;
pub use registers::Register;
