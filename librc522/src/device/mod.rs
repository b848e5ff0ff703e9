// librc522/src/device/mod.rs

pub mod builder;
mod bus;
mod crc;
#[cfg(feature = "diagnostics")]
mod diagnostics;
pub mod handle;
mod transceive;

pub use builder::ReaderBuilder;
pub use handle::{Initialized, Reader, Uninitialized};
