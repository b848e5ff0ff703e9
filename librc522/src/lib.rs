// librc522/src/lib.rs

//! librc522
//!
//! Pure Rust driver for MFRC522 contactless readers: register access over a
//! pluggable transport, the chip's transceive engine and CRC coprocessor, and
//! the MIFARE Classic card session (request, anticollision, select,
//! authenticate, read, write, halt).
#![warn(missing_docs)]

pub mod card;
pub mod config;
pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
