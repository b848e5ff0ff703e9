// librc522/src/transport/sim.rs
//! In-process MFRC522 model with an optional MIFARE Classic 1K tag in its
//! field.
//!
//! The model speaks the same register protocol as the real chip over the
//! [`Transport`] trait: the first byte of a transaction is the address byte,
//! every following byte reads or writes that register. Only the behaviour the
//! driver depends on is modelled: FIFO, interrupt flags, the CRC coprocessor,
//! Transceive/MFAuthent and the tag's ISO 14443-3 state machine. Crypto1 is
//! not modelled; authentication compares keys in the clear.
//!
//! [`SimulatedReader`] is a cheap handle; clones share the same chip, so a
//! test can keep one clone for inspection after handing another to a
//! [`Reader`](crate::device::Reader).

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use log::trace;

use crate::constants::{
    ACK_BITS, BLOCK_COUNT, BLOCK_LEN, BLOCKS_PER_SECTOR, DEFAULT_ACCESS_BITS, DEFAULT_KEY,
    FIFO_CAPACITY, KEY_LEN, MIFARE_ACK, NVB_ANTICOLLISION, NVB_SELECT, UID_LEN,
};
use crate::protocol::commands::{PcdCommand, PiccCommand};
use crate::protocol::crc::{bcc, crc_a};
use crate::protocol::registers::{Register, bit_framing, div_irq, error, irq, status2};
use crate::transport::traits::Transport;
use crate::Result;

/// 4-bit NAK: operation not allowed
pub const NAK_NOT_ALLOWED: u8 = 0x04;

const COMMAND: usize = Register::Command as usize;
const COM_IRQ: usize = Register::ComIrq as usize;
const DIV_IRQ: usize = Register::DivIrq as usize;
const ERROR: usize = Register::Error as usize;
const STATUS1: usize = Register::Status1 as usize;
const STATUS2: usize = Register::Status2 as usize;
const FIFO_DATA: usize = Register::FifoData as usize;
const FIFO_LEVEL: usize = Register::FifoLevel as usize;
const CONTROL: usize = Register::Control as usize;
const BIT_FRAMING: usize = Register::BitFraming as usize;
const CRC_HIGH: usize = Register::CrcResultHigh as usize;
const CRC_LOW: usize = Register::CrcResultLow as usize;
const VERSION: usize = Register::Version as usize;

/// ISO 14443-3 state of the simulated tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagState {
    Idle,
    Ready,
    Active,
    Authenticated { sector: u8 },
    Halt,
}

/// A MIFARE Classic 1K card.
#[derive(Debug, Clone)]
pub struct SimulatedTag {
    uid: [u8; UID_LEN],
    atqa: [u8; 2],
    sak: u8,
    blocks: [[u8; BLOCK_LEN]; BLOCK_COUNT as usize],
    state: TagState,
    pending_write: Option<u8>,
    corrupt_bcc: bool,
}

impl SimulatedTag {
    /// Factory-fresh card: transport keys and access bits in every trailer,
    /// manufacturer data in block 0, zeros elsewhere.
    pub fn classic_1k(uid: [u8; UID_LEN]) -> Self {
        let atqa = [0x04, 0x00];
        let sak = 0x08;
        let mut blocks = [[0u8; BLOCK_LEN]; BLOCK_COUNT as usize];

        blocks[0][..UID_LEN].copy_from_slice(&uid);
        blocks[0][UID_LEN] = bcc(&uid);
        blocks[0][5] = sak;
        blocks[0][6..8].copy_from_slice(&atqa);

        let mut trailer = [0u8; BLOCK_LEN];
        trailer[..KEY_LEN].copy_from_slice(&DEFAULT_KEY);
        trailer[6..10].copy_from_slice(&DEFAULT_ACCESS_BITS);
        trailer[10..].copy_from_slice(&DEFAULT_KEY);
        for sector in 0..(BLOCK_COUNT / BLOCKS_PER_SECTOR) {
            blocks[(sector * BLOCKS_PER_SECTOR + 3) as usize] = trailer;
        }

        Self {
            uid,
            atqa,
            sak,
            blocks,
            state: TagState::Idle,
            pending_write: None,
            corrupt_bcc: false,
        }
    }

    pub fn uid(&self) -> [u8; UID_LEN] {
        self.uid
    }

    pub fn state(&self) -> TagState {
        self.state
    }

    /// Put the tag in HALT as if it had received HLTA.
    pub fn set_halted(&mut self) {
        self.state = TagState::Halt;
    }

    pub fn block(&self, block: u8) -> Option<[u8; BLOCK_LEN]> {
        self.blocks.get(block as usize).copied()
    }

    pub fn set_block(&mut self, block: u8, data: [u8; BLOCK_LEN]) {
        if let Some(slot) = self.blocks.get_mut(block as usize) {
            *slot = data;
        }
    }

    /// Replace key A of `sector`, leaving access bits and key B untouched.
    pub fn set_key_a(&mut self, sector: u8, key: [u8; KEY_LEN]) {
        let trailer = (sector * BLOCKS_PER_SECTOR + 3) as usize;
        if let Some(block) = self.blocks.get_mut(trailer) {
            block[..KEY_LEN].copy_from_slice(&key);
        }
    }

    fn sector_keys(&self, sector: u8) -> ([u8; KEY_LEN], [u8; KEY_LEN]) {
        let trailer = &self.blocks[(sector * BLOCKS_PER_SECTOR + 3) as usize];
        let mut a = [0u8; KEY_LEN];
        let mut b = [0u8; KEY_LEN];
        a.copy_from_slice(&trailer[..KEY_LEN]);
        b.copy_from_slice(&trailer[10..]);
        (a, b)
    }

    /// MFAuthent against this tag. On failure the tag drops back to Idle.
    fn authenticate(&mut self, mode: u8, block: u8, key: &[u8], uid: &[u8]) -> bool {
        let selected = matches!(
            self.state,
            TagState::Active | TagState::Authenticated { .. }
        );
        if !selected || block >= BLOCK_COUNT || uid != self.uid {
            self.state = TagState::Idle;
            return false;
        }
        let sector = block / BLOCKS_PER_SECTOR;
        let (key_a, key_b) = self.sector_keys(sector);
        let expected = if mode == PiccCommand::AuthKeyB.code() {
            key_b
        } else {
            key_a
        };
        let known_mode = mode == PiccCommand::AuthKeyA.code() || mode == PiccCommand::AuthKeyB.code();
        if !known_mode || key != expected {
            self.state = TagState::Idle;
            return false;
        }
        self.state = TagState::Authenticated { sector };
        true
    }

    /// Answer one frame. Returns the reply bytes and the number of valid bits
    /// in the last reply byte (0 = all 8), or `None` when the tag stays silent.
    fn respond(&mut self, frame: &[u8], tx_last_bits: u8) -> Option<(Vec<u8>, u8)> {
        if tx_last_bits == bit_framing::SHORT_FRAME && frame.len() == 1 {
            return self.respond_short(frame[0]);
        }
        if tx_last_bits != 0 || frame.is_empty() {
            return None;
        }

        match self.state {
            TagState::Idle | TagState::Halt => None,
            TagState::Ready => self.respond_ready(frame),
            TagState::Active | TagState::Authenticated { .. } => self.respond_active(frame),
        }
    }

    fn respond_short(&mut self, code: u8) -> Option<(Vec<u8>, u8)> {
        let wakes = match self.state {
            TagState::Idle => code == PiccCommand::ReqA.code() || code == PiccCommand::WupA.code(),
            TagState::Halt => code == PiccCommand::WupA.code(),
            _ => {
                // out-of-sequence request: back to idle without answering
                self.state = TagState::Idle;
                false
            }
        };
        if !wakes {
            return None;
        }
        self.state = TagState::Ready;
        self.pending_write = None;
        Some((self.atqa.to_vec(), 0))
    }

    fn respond_ready(&mut self, frame: &[u8]) -> Option<(Vec<u8>, u8)> {
        if frame[0] != PiccCommand::SelCl1.code() || frame.len() < 2 {
            self.state = TagState::Idle;
            return None;
        }
        match frame[1] {
            NVB_ANTICOLLISION if frame.len() == 2 => {
                let mut reply = self.uid.to_vec();
                let check = bcc(&self.uid);
                reply.push(if self.corrupt_bcc { check ^ 0xFF } else { check });
                Some((reply, 0))
            }
            NVB_SELECT if frame.len() == 9 => {
                if crc_a(&frame[..7]) != [frame[7], frame[8]] {
                    self.state = TagState::Idle;
                    return None;
                }
                // another card's SELECT: stay ready, say nothing
                if frame[2..6] != self.uid || frame[6] != bcc(&self.uid) {
                    return None;
                }
                self.state = TagState::Active;
                let mut reply = vec![self.sak];
                reply.extend_from_slice(&crc_a(&[self.sak]));
                Some((reply, 0))
            }
            _ => {
                self.state = TagState::Idle;
                None
            }
        }
    }

    fn respond_active(&mut self, frame: &[u8]) -> Option<(Vec<u8>, u8)> {
        if frame.len() < 3 {
            return None;
        }
        let (body, crc) = frame.split_at(frame.len() - 2);
        if crc_a(body) != [crc[0], crc[1]] {
            return None;
        }

        if let Some(block) = self.pending_write.take() {
            if body.len() != BLOCK_LEN {
                return Some(self.nak());
            }
            self.blocks[block as usize].copy_from_slice(body);
            return Some(ack());
        }

        let code = body[0];
        if code == PiccCommand::HaltA.code() && body.len() == 2 {
            self.state = TagState::Halt;
            return None;
        }
        if body.len() != 2 {
            return Some(self.nak());
        }
        let block = body[1];
        let authorised = match self.state {
            TagState::Authenticated { sector } => {
                block < BLOCK_COUNT && block / BLOCKS_PER_SECTOR == sector
            }
            _ => false,
        };

        if code == PiccCommand::Read.code() {
            if !authorised {
                return Some(self.nak());
            }
            let mut reply = self.blocks[block as usize].to_vec();
            if block % BLOCKS_PER_SECTOR == BLOCKS_PER_SECTOR - 1 {
                // key A is never readable
                reply[..KEY_LEN].fill(0);
            }
            let crc = crc_a(&reply);
            reply.extend_from_slice(&crc);
            Some((reply, 0))
        } else if code == PiccCommand::Write.code() {
            // block 0 holds manufacturer data and is read-only
            if !authorised || block == 0 {
                return Some(self.nak());
            }
            self.pending_write = Some(block);
            Some(ack())
        } else {
            Some(self.nak())
        }
    }

    fn nak(&mut self) -> (Vec<u8>, u8) {
        self.state = TagState::Idle;
        (vec![NAK_NOT_ALLOWED], ACK_BITS as u8)
    }
}

fn ack() -> (Vec<u8>, u8) {
    (vec![MIFARE_ACK], ACK_BITS as u8)
}

#[derive(Debug)]
struct SimState {
    regs: [u8; 64],
    fifo: VecDeque<u8>,
    tag: Option<SimulatedTag>,
    stall: bool,
    pending_error: Option<u8>,
    pending_reply: Option<(Vec<u8>, u8)>,
    air_log: Vec<Vec<u8>>,
    address: Option<u8>,
    transactions: usize,
    soft_resets: usize,
}

impl SimState {
    fn new() -> Self {
        let mut state = Self {
            regs: [0u8; 64],
            fifo: VecDeque::with_capacity(FIFO_CAPACITY),
            tag: None,
            stall: false,
            pending_error: None,
            pending_reply: None,
            air_log: Vec::new(),
            address: None,
            transactions: 0,
            soft_resets: 0,
        };
        state.reset_registers();
        state
    }

    fn reset_registers(&mut self) {
        self.regs = [0u8; 64];
        self.regs[COMMAND] = 0x20;
        self.regs[Register::ComIEn as usize] = 0x80;
        self.regs[COM_IRQ] = irq::IDLE | irq::LO_ALERT;
        self.regs[Register::Mode as usize] = 0x3F;
        self.regs[Register::TxControl as usize] = 0x80;
        self.regs[Register::WaterLevel as usize] = 0x08;
        self.regs[VERSION] = 0x92;
        self.fifo.clear();
    }

    fn read(&mut self, reg: usize) -> u8 {
        match reg {
            FIFO_DATA => self.fifo.pop_front().unwrap_or(0),
            FIFO_LEVEL => (self.fifo.len() as u8) & 0x7F,
            COM_IRQ | DIV_IRQ => self.regs[reg] & 0x7F,
            _ => self.regs[reg],
        }
    }

    fn write(&mut self, reg: usize, value: u8) {
        match reg {
            COMMAND => self.execute(value),
            COM_IRQ | DIV_IRQ => {
                if value & irq::SET != 0 {
                    self.regs[reg] |= value & 0x7F;
                } else {
                    self.regs[reg] &= !(value & 0x7F);
                }
            }
            FIFO_DATA => {
                if self.fifo.len() < FIFO_CAPACITY {
                    self.fifo.push_back(value);
                } else {
                    self.regs[ERROR] |= error::BUFFER_OVFL;
                }
            }
            FIFO_LEVEL => {
                if value & 0x80 != 0 {
                    self.fifo.clear();
                    self.regs[ERROR] &= !error::BUFFER_OVFL;
                }
            }
            BIT_FRAMING => {
                self.regs[reg] = value;
                let transceiving =
                    self.regs[COMMAND] & 0x0F == PcdCommand::Transceive.code();
                if value & bit_framing::START_SEND != 0 && transceiving {
                    self.transceive(value & bit_framing::TX_LAST_BITS);
                }
            }
            // read-only
            ERROR | STATUS1 | VERSION | CRC_HIGH | CRC_LOW => {}
            _ => self.regs[reg] = value,
        }
    }

    fn execute(&mut self, value: u8) {
        let keep_power_bits = self.regs[COMMAND] & 0x30;
        self.regs[COMMAND] = keep_power_bits | (value & 0x0F);
        match PcdCommand::from_code(value) {
            Some(PcdCommand::SoftReset) => {
                self.soft_resets += 1;
                self.reset_registers();
            }
            Some(PcdCommand::CalcCrc) => {
                let data: Vec<u8> = self.fifo.drain(..).collect();
                if self.stall {
                    return;
                }
                let [low, high] = crc_a(&data);
                self.regs[CRC_LOW] = low;
                self.regs[CRC_HIGH] = high;
                self.regs[DIV_IRQ] |= div_irq::CRC;
            }
            Some(PcdCommand::MfAuthent) => self.authenticate(),
            _ => {}
        }
    }

    fn authenticate(&mut self) {
        let frame: Vec<u8> = self.fifo.drain(..).collect();
        trace!("sim: MFAuthent {:02X?}", frame);
        self.air_log.push(frame.clone());
        self.regs[ERROR] = 0;
        // the flag reports the outcome of the latest authentication only
        self.regs[STATUS2] &= !status2::MF_CRYPTO1_ON;
        if self.stall {
            return;
        }
        if let Some(bits) = self.pending_error.take() {
            self.regs[ERROR] = bits;
            self.regs[COM_IRQ] |= irq::ERR | irq::IDLE;
            return;
        }
        let ok = frame.len() == 2 + KEY_LEN + UID_LEN
            && self.tag.as_mut().is_some_and(|tag| {
                tag.authenticate(frame[0], frame[1], &frame[2..8], &frame[8..12])
            });
        if ok {
            self.regs[STATUS2] |= status2::MF_CRYPTO1_ON;
            self.regs[COM_IRQ] |= irq::IDLE;
        } else {
            self.regs[COM_IRQ] |= irq::TIMER;
        }
        self.regs[COMMAND] &= 0xF0;
    }

    fn transceive(&mut self, tx_last_bits: u8) {
        let frame: Vec<u8> = self.fifo.drain(..).collect();
        trace!("sim: air out {:02X?} (last bits {})", frame, tx_last_bits);
        self.air_log.push(frame.clone());
        self.regs[ERROR] = 0;
        if self.stall {
            return;
        }
        self.regs[COM_IRQ] |= irq::TX;
        if let Some(bits) = self.pending_error.take() {
            self.regs[ERROR] = bits;
            self.regs[COM_IRQ] |= irq::ERR | irq::RX | irq::IDLE;
            return;
        }

        let reply = self
            .tag
            .as_mut()
            .and_then(|tag| tag.respond(&frame, tx_last_bits));
        let reply = self.pending_reply.take().or(reply);
        match reply {
            Some((bytes, last_bits)) => {
                trace!("sim: air in {:02X?}", bytes);
                self.fifo.extend(bytes);
                self.regs[CONTROL] = (self.regs[CONTROL] & !0x07) | (last_bits & 0x07);
                self.regs[COM_IRQ] |= irq::RX | irq::IDLE;
            }
            None => {
                self.regs[CONTROL] &= !0x07;
                self.regs[COM_IRQ] |= irq::TIMER;
            }
        }
    }
}

/// Shared handle to a simulated MFRC522.
#[derive(Debug, Clone)]
pub struct SimulatedReader {
    state: Rc<RefCell<SimState>>,
}

impl Default for SimulatedReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedReader {
    /// A reader with an empty field.
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(SimState::new())),
        }
    }

    /// A reader with a factory-fresh MIFARE Classic 1K card in the field.
    pub fn with_card(uid: [u8; UID_LEN]) -> Self {
        let sim = Self::new();
        sim.insert_tag(SimulatedTag::classic_1k(uid));
        sim
    }

    pub fn insert_tag(&self, tag: SimulatedTag) {
        self.state.borrow_mut().tag = Some(tag);
    }

    pub fn remove_tag(&self) -> Option<SimulatedTag> {
        self.state.borrow_mut().tag.take()
    }

    /// Run `f` against the tag in the field, if any.
    pub fn with_tag<R>(&self, f: impl FnOnce(&mut SimulatedTag) -> R) -> Option<R> {
        self.state.borrow_mut().tag.as_mut().map(f)
    }

    pub fn tag_state(&self) -> Option<TagState> {
        self.with_tag(|tag| tag.state())
    }

    pub fn tag_block(&self, block: u8) -> Option<[u8; BLOCK_LEN]> {
        self.with_tag(|tag| tag.block(block)).flatten()
    }

    /// Make the tag answer anticollision with a wrong check byte.
    pub fn set_corrupt_bcc(&self, corrupt: bool) {
        self.with_tag(|tag| tag.corrupt_bcc = corrupt);
    }

    /// Never raise completion interrupts, so every wait runs out its budget.
    pub fn set_stall(&self, stall: bool) {
        self.state.borrow_mut().stall = stall;
    }

    /// Report `bits` in ErrorReg on the next Transceive or MFAuthent.
    pub fn inject_error(&self, bits: u8) {
        self.state.borrow_mut().pending_error = Some(bits);
    }

    /// Replace the next Transceive answer with `bytes`, `last_bits` valid
    /// bits in the final byte (0 = all 8). The tag still sees the frame.
    pub fn override_next_reply(&self, bytes: &[u8], last_bits: u8) {
        self.state.borrow_mut().pending_reply = Some((bytes.to_vec(), last_bits));
    }

    /// Raw register contents, bypassing read side effects.
    pub fn register(&self, reg: Register) -> u8 {
        self.state.borrow().regs[reg.addr() as usize]
    }

    /// Force a register value, bypassing write side effects.
    pub fn set_register(&self, reg: Register, value: u8) {
        self.state.borrow_mut().regs[reg.addr() as usize] = value;
    }

    /// Bytes still waiting in the FIFO.
    pub fn fifo_len(&self) -> usize {
        self.state.borrow().fifo.len()
    }

    /// Every frame handed to the radio (Transceive and MFAuthent), oldest
    /// first.
    pub fn air_frames(&self) -> Vec<Vec<u8>> {
        self.state.borrow().air_log.clone()
    }

    pub fn clear_air_frames(&self) {
        self.state.borrow_mut().air_log.clear();
    }

    pub fn soft_resets(&self) -> usize {
        self.state.borrow().soft_resets
    }

    /// Completed bus transactions (one per register access).
    pub fn transactions(&self) -> usize {
        self.state.borrow().transactions
    }
}

impl Transport for SimulatedReader {
    fn select(&mut self) -> Result<()> {
        self.state.borrow_mut().address = None;
        Ok(())
    }

    fn exchange(&mut self, byte: u8) -> Result<u8> {
        let mut state = self.state.borrow_mut();
        let Some(address) = state.address else {
            state.address = Some(byte);
            return Ok(0);
        };
        let reg = ((address >> 1) & 0x3F) as usize;
        if address & 0x80 != 0 {
            Ok(state.read(reg))
        } else {
            state.write(reg, byte);
            Ok(0)
        }
    }

    fn deselect(&mut self) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.address = None;
        state.transactions += 1;
        Ok(())
    }
}
