//! Utilities for librc522: small, reusable helpers used across the crate.
//!
//! Hex rendering for UIDs and block contents, and the deadline tracker used by
//! the chip poll loops.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
