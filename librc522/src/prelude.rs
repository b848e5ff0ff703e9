// librc522/src/prelude.rs

pub use crate::card::{Card, Session, SessionState};
pub use crate::config::{ReaderConfig, WaitBudget};
pub use crate::device::{Initialized, Reader, ReaderBuilder, Uninitialized};
pub use crate::protocol::{PcdCommand, PiccCommand, Register};
pub use crate::transport::{SimulatedReader, Transport};
pub use crate::{
    AccessBits, Atqa, BlockAddress, BlockData, ChipVersion, Error, KeyType, RequestMode, Result,
    SectorKey, SectorTrailer, Status, Uid,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, ms, parse_hex};
