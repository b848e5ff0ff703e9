// librc522/src/error.rs

use thiserror::Error;

use crate::card::SessionState;

/// Which ErrorReg condition the chip raised during an exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ChipFault {
    #[display(fmt = "buffer overflow")]
    BufferOverflow,
    #[display(fmt = "bit collision")]
    Collision,
    #[display(fmt = "parity error")]
    Parity,
    #[display(fmt = "protocol error")]
    Protocol,
}

impl ChipFault {
    /// Pick the most significant fault from a masked ErrorReg value.
    pub fn from_error_reg(bits: u8) -> Option<Self> {
        use crate::protocol::registers::error;
        if bits & error::BUFFER_OVFL != 0 {
            Some(Self::BufferOverflow)
        } else if bits & error::COLL_ERR != 0 {
            Some(Self::Collision)
        } else if bits & error::PARITY_ERR != 0 {
            Some(Self::Parity)
        } else if bits & error::PROTOCOL_ERR != 0 {
            Some(Self::Protocol)
        } else {
            None
        }
    }
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("no tag answered before the chip timer expired")]
    NoTag,

    #[error("wait budget exhausted without a completion interrupt")]
    NoResponse,

    #[error("chip reported {fault} (ErrorReg={bits:#04x})")]
    Chip { fault: ChipFault, bits: u8 },

    #[error("unexpected response length: expected {expected} bits, got {actual}")]
    UnexpectedBits { expected: usize, actual: usize },

    #[error("uid check byte mismatch: expected {expected:#04x}, got {actual:#04x}")]
    BccMismatch { expected: u8, actual: u8 },

    #[error("card did not acknowledge: response {response:#04x}")]
    Nak { response: u8 },

    #[error("authentication failed for block {block}")]
    AuthFailed { block: u8 },

    #[error("operation requires {expected}, session is {actual}")]
    InvalidState {
        expected: &'static str,
        actual: SessionState,
    },

    #[error("block address {0} out of range (0..=63)")]
    InvalidBlock(u8),

    #[error("block {0} is a sector trailer; use write_trailer")]
    SectorTrailer(u8),

    #[error("block {0} is not a sector trailer")]
    NotSectorTrailer(u8),

    #[error("access bits {0:02x?} are inconsistent with their inverted copies")]
    InvalidAccessBits([u8; 3]),

    #[error("frame of {len} bytes does not fit the {capacity}-byte FIFO")]
    FrameTooLong { len: usize, capacity: usize },

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid hex: {0}")]
    InvalidHex(String),
}

/// Coarse three-valued outcome of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    #[display(fmt = "ok")]
    Ok,
    #[display(fmt = "no tag")]
    NoTag,
    #[display(fmt = "protocol error")]
    ProtocolError,
}

impl Error {
    /// Collapse the error into the three-valued status view.
    pub fn status(&self) -> Status {
        match self {
            Error::NoTag => Status::NoTag,
            _ => Status::ProtocolError,
        }
    }

    /// True for the authentication-specific protocol error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::AuthFailed { .. })
    }
}

impl<T> From<&Result<T>> for Status {
    fn from(result: &Result<T>) -> Self {
        match result {
            Ok(_) => Status::Ok,
            Err(e) => e.status(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
