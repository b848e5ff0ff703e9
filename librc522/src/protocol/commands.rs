// librc522/src/protocol/commands.rs
//! Chip (PCD) and card (PICC) command vocabularies.
//!
//! Each chip command carries the interrupt masks the transceive engine arms
//! for it, and each card command the response shape its operation validates.

use crate::constants::{ACK_BITS, ATQA_BITS, READ_BITS, SAK_BITS, UID_LEN};
use crate::protocol::registers::irq;
use crate::types::{KeyType, RequestMode};

/// Interrupt masks armed for one chip command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IrqMasks {
    /// Sources enabled in ComIEnReg
    pub enable: u8,
    /// ComIrqReg bits that end the wait successfully
    pub wait: u8,
}

/// Commands executed by the reader chip itself (CommandReg values).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PcdCommand {
    Idle = 0x00,
    Mem = 0x01,
    GenerateRandomId = 0x02,
    CalcCrc = 0x03,
    Transmit = 0x04,
    NoCmdChange = 0x07,
    Receive = 0x08,
    Transceive = 0x0C,
    MfAuthent = 0x0E,
    SoftReset = 0x0F,
}

impl PcdCommand {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Some(match code & 0x0F {
            0x00 => Self::Idle,
            0x01 => Self::Mem,
            0x02 => Self::GenerateRandomId,
            0x03 => Self::CalcCrc,
            0x04 => Self::Transmit,
            0x07 => Self::NoCmdChange,
            0x08 => Self::Receive,
            0x0C => Self::Transceive,
            0x0E => Self::MfAuthent,
            0x0F => Self::SoftReset,
            _ => return None,
        })
    }

    /// IRQ sources to enable and wait for while this command runs.
    pub fn irq_masks(self) -> IrqMasks {
        match self {
            // IdleIRq | ErrIRq, done on IdleIRq
            Self::MfAuthent => IrqMasks {
                enable: irq::IDLE | irq::ERR,
                wait: irq::IDLE,
            },
            // everything but HiAlert, done on RxIRq or IdleIRq
            Self::Transceive => IrqMasks {
                enable: irq::TX
                    | irq::RX
                    | irq::IDLE
                    | irq::LO_ALERT
                    | irq::ERR
                    | irq::TIMER,
                wait: irq::RX | irq::IDLE,
            },
            _ => IrqMasks::default(),
        }
    }

    /// Whether the command is started by StartSend rather than by the
    /// CommandReg write alone.
    pub fn needs_start_send(self) -> bool {
        self == Self::Transceive
    }

    /// Whether the command leaves response bytes in the FIFO.
    pub fn receives(self) -> bool {
        matches!(self, Self::Transceive | Self::Receive)
    }
}

/// What a card operation accepts as a well-formed reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// Exactly this many bits
    Bits(usize),
    /// Exactly this many bytes (bit count unchecked)
    Bytes(usize),
    /// A 4-bit ACK/NAK nibble
    Ack,
    /// The card does not answer
    Silent,
}

/// Commands sent over the air to the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PiccCommand {
    ReqA = 0x26,
    WupA = 0x52,
    /// Cascade level 1: anticollision and select share the code
    SelCl1 = 0x93,
    AuthKeyA = 0x60,
    AuthKeyB = 0x61,
    Read = 0x30,
    Write = 0xA0,
    Decrement = 0xC0,
    Increment = 0xC1,
    Restore = 0xC2,
    Transfer = 0xB0,
    HaltA = 0x50,
}

impl PiccCommand {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn request(mode: RequestMode) -> Self {
        match mode {
            RequestMode::Idle => Self::ReqA,
            RequestMode::All => Self::WupA,
        }
    }

    pub fn auth(key_type: KeyType) -> Self {
        match key_type {
            KeyType::A => Self::AuthKeyA,
            KeyType::B => Self::AuthKeyB,
        }
    }

    /// Expected reply shape. SelCl1 is reported for the anticollision use
    /// (NVB 0x20); a full SELECT answers with `select_shape()`.
    pub fn response_shape(self) -> ResponseShape {
        match self {
            Self::ReqA | Self::WupA => ResponseShape::Bits(ATQA_BITS),
            Self::SelCl1 => ResponseShape::Bytes(UID_LEN + 1),
            Self::AuthKeyA | Self::AuthKeyB => ResponseShape::Silent,
            Self::Read => ResponseShape::Bits(READ_BITS),
            Self::Write | Self::Decrement | Self::Increment | Self::Restore | Self::Transfer => {
                ResponseShape::Ack
            }
            Self::HaltA => ResponseShape::Silent,
        }
    }

    /// SAK + CRC_A
    pub fn select_shape() -> ResponseShape {
        ResponseShape::Bits(SAK_BITS)
    }
}

impl ResponseShape {
    /// Check a received bit length against the shape.
    pub fn accepts(self, bits: usize) -> bool {
        match self {
            Self::Bits(n) => bits == n,
            Self::Bytes(n) => bits.div_ceil(8) == n,
            Self::Ack => bits == ACK_BITS,
            Self::Silent => true,
        }
    }

    /// Bit count reported in errors.
    pub fn expected_bits(self) -> usize {
        match self {
            Self::Bits(n) => n,
            Self::Bytes(n) => n * 8,
            Self::Ack => ACK_BITS,
            Self::Silent => 0,
        }
    }
}
