// librc522/src/protocol/registers.rs
//! MFRC522 register map and the bit fields the driver touches.

/// Chip register address (6 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Register {
    // Page 0: command and status
    Command = 0x01,
    ComIEn = 0x02,
    DivIEn = 0x03,
    ComIrq = 0x04,
    DivIrq = 0x05,
    Error = 0x06,
    Status1 = 0x07,
    Status2 = 0x08,
    FifoData = 0x09,
    FifoLevel = 0x0A,
    WaterLevel = 0x0B,
    Control = 0x0C,
    BitFraming = 0x0D,
    Coll = 0x0E,
    // Page 1: command
    Mode = 0x11,
    TxMode = 0x12,
    RxMode = 0x13,
    TxControl = 0x14,
    TxAsk = 0x15,
    TxSel = 0x16,
    RxSel = 0x17,
    RxThreshold = 0x18,
    Demod = 0x19,
    MfTx = 0x1C,
    MfRx = 0x1D,
    SerialSpeed = 0x1F,
    // Page 2: configuration
    CrcResultHigh = 0x21,
    CrcResultLow = 0x22,
    ModWidth = 0x24,
    RfCfg = 0x26,
    GsN = 0x27,
    CwGsP = 0x28,
    ModGsP = 0x29,
    TMode = 0x2A,
    TPrescaler = 0x2B,
    TReloadHigh = 0x2C,
    TReloadLow = 0x2D,
    TCounterValHigh = 0x2E,
    TCounterValLow = 0x2F,
    // Page 3: test
    TestSel1 = 0x31,
    TestSel2 = 0x32,
    TestPinEn = 0x33,
    TestPinValue = 0x34,
    TestBus = 0x35,
    AutoTest = 0x36,
    Version = 0x37,
    AnalogTest = 0x38,
    TestDac1 = 0x39,
    TestDac2 = 0x3A,
    TestAdc = 0x3B,
}

impl Register {
    pub fn addr(self) -> u8 {
        self as u8
    }

    /// SPI address byte for a read: `1AAAAAA0`.
    pub fn read_address(self) -> u8 {
        ((self.addr() << 1) & 0x7E) | 0x80
    }

    /// SPI address byte for a write: `0AAAAAA0`.
    pub fn write_address(self) -> u8 {
        (self.addr() << 1) & 0x7E
    }

    /// Registers worth printing in a diagnostic dump.
    pub const DUMP_ORDER: &'static [Register] = &[
        Register::Command,
        Register::ComIEn,
        Register::DivIEn,
        Register::ComIrq,
        Register::DivIrq,
        Register::Error,
        Register::Status1,
        Register::Status2,
        Register::FifoLevel,
        Register::WaterLevel,
        Register::Control,
        Register::BitFraming,
        Register::Coll,
        Register::Mode,
        Register::TxMode,
        Register::RxMode,
        Register::TxControl,
        Register::TxAsk,
        Register::TxSel,
        Register::RxSel,
        Register::RxThreshold,
        Register::Demod,
        Register::MfTx,
        Register::MfRx,
        Register::SerialSpeed,
        Register::CrcResultHigh,
        Register::CrcResultLow,
        Register::ModWidth,
        Register::RfCfg,
        Register::GsN,
        Register::CwGsP,
        Register::ModGsP,
        Register::TMode,
        Register::TPrescaler,
        Register::TReloadHigh,
        Register::TReloadLow,
        Register::TCounterValHigh,
        Register::TCounterValLow,
        Register::Version,
    ];
}

/// ComIEnReg / ComIrqReg bits
pub mod irq {
    /// IRqInv in ComIEnReg, Set1 in ComIrqReg
    pub const SET: u8 = 0x80;
    pub const TX: u8 = 0x40;
    pub const RX: u8 = 0x20;
    pub const IDLE: u8 = 0x10;
    pub const HI_ALERT: u8 = 0x08;
    pub const LO_ALERT: u8 = 0x04;
    pub const ERR: u8 = 0x02;
    pub const TIMER: u8 = 0x01;
}

/// DivIrqReg bits
pub mod div_irq {
    pub const SET: u8 = 0x80;
    pub const CRC: u8 = 0x04;
}

/// ErrorReg bits
pub mod error {
    pub const WR_ERR: u8 = 0x80;
    pub const TEMP_ERR: u8 = 0x40;
    pub const BUFFER_OVFL: u8 = 0x10;
    pub const COLL_ERR: u8 = 0x08;
    pub const CRC_ERR: u8 = 0x04;
    pub const PARITY_ERR: u8 = 0x02;
    pub const PROTOCOL_ERR: u8 = 0x01;

    /// Conditions that fail a transceive outright
    pub const FATAL: u8 = BUFFER_OVFL | COLL_ERR | PARITY_ERR | PROTOCOL_ERR;
}

/// Status2Reg bits
pub mod status2 {
    pub const MF_CRYPTO1_ON: u8 = 0x08;
}

/// FIFOLevelReg bits
pub mod fifo_level {
    pub const FLUSH: u8 = 0x80;
    pub const LEVEL_MASK: u8 = 0x7F;
}

/// ControlReg bits
pub mod control {
    pub const RX_LAST_BITS: u8 = 0x07;
}

/// BitFramingReg bits
pub mod bit_framing {
    pub const START_SEND: u8 = 0x80;
    pub const TX_LAST_BITS: u8 = 0x07;
    /// REQA/WUPA are 7-bit short frames
    pub const SHORT_FRAME: u8 = 0x07;
}

/// TxControlReg bits
pub mod tx_control {
    /// Tx1RFEn | Tx2RFEn
    pub const ANTENNA: u8 = 0x03;
}

/// TxASKReg: Force100ASK
pub const TX_ASK_FORCE_100: u8 = 0x40;

/// ModeReg: TxWaitRF, MFIN active high, CRC preset 0x6363
pub const MODE_CRC_PRESET_6363: u8 = 0x3D;
