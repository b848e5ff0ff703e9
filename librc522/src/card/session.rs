// librc522/src/card/session.rs
//! Card session state machine.
//!
//! A [`Session`] borrows the reader for as long as it talks to one card and
//! checks every operation against the current [`SessionState`] before any
//! bus traffic. Failed operations drop the session back to `Idle`, mirroring
//! what the card itself does after an error.

use log::debug;

use crate::card::operations;
use crate::card::{Card, SessionState};
use crate::device::{Initialized, Reader};
use crate::types::{Atqa, BlockAddress, BlockData, KeyType, RequestMode, SectorKey, SectorTrailer, Uid};
use crate::{Error, Result};

pub struct Session<'a> {
    reader: &'a mut Reader<Initialized>,
    state: SessionState,
}

impl<'a> Session<'a> {
    pub fn new(reader: &'a mut Reader<Initialized>) -> Self {
        Self {
            reader,
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Underlying reader, e.g. for register diagnostics between operations.
    pub fn reader(&mut self) -> &mut Reader<Initialized> {
        self.reader
    }

    /// Request, anticollision and select in one go.
    pub fn connect(&mut self, mode: RequestMode) -> Result<Card> {
        let atqa = self.request(mode)?;
        let uid = self.anticollision()?;
        let sak = self.select()?;
        if sak == 0 {
            return Err(Error::NoTag);
        }
        Ok(Card::new(uid, atqa, sak))
    }

    /// Legal from any state; a fresh request restarts the session.
    pub fn request(&mut self, mode: RequestMode) -> Result<Atqa> {
        let result = operations::request(self.reader, mode);
        self.advance(result, SessionState::Requested)
    }

    pub fn anticollision(&mut self) -> Result<Uid> {
        if !matches!(self.state, SessionState::Requested(_)) {
            return Err(self.invalid("requested"));
        }
        let result = operations::anticollision(self.reader);
        self.advance(result, SessionState::Resolved)
    }

    /// Select the resolved card. A SAK of 0 means nothing was selected and
    /// leaves the session idle.
    pub fn select(&mut self) -> Result<u8> {
        let SessionState::Resolved(uid) = self.state else {
            return Err(self.invalid("resolved"));
        };
        let result = operations::select(self.reader, &uid);
        let sak = self.track(result)?;
        self.state = if sak == 0 {
            debug!("select {}: no card selected", uid);
            SessionState::Idle
        } else {
            SessionState::Selected { uid, sak }
        };
        Ok(sak)
    }

    /// Authenticate to the sector holding `block`. Also used to switch
    /// sectors while already authenticated.
    pub fn authenticate(
        &mut self,
        key_type: KeyType,
        block: BlockAddress,
        key: &SectorKey,
    ) -> Result<()> {
        let (uid, sak) = match self.state {
            SessionState::Selected { uid, sak } | SessionState::Authenticated { uid, sak, .. } => {
                (uid, sak)
            }
            _ => return Err(self.invalid("selected")),
        };
        let result = operations::authenticate(self.reader, key_type, block, key, &uid);
        self.track(result)?;
        self.state = SessionState::Authenticated {
            uid,
            sak,
            sector: block.sector(),
        };
        Ok(())
    }

    pub fn read_block(&mut self, block: BlockAddress) -> Result<BlockData> {
        self.require_sector(block)?;
        let result = operations::read_block(self.reader, block);
        self.track(result)
    }

    pub fn write_block(&mut self, block: BlockAddress, data: &BlockData) -> Result<()> {
        self.require_sector(block)?;
        let result = operations::write_block(self.reader, block, data);
        self.track(result)
    }

    pub fn write_trailer(&mut self, block: BlockAddress, trailer: &SectorTrailer) -> Result<()> {
        self.require_sector(block)?;
        let result = operations::write_trailer(self.reader, block, trailer);
        self.track(result)
    }

    /// Halt the card. The session is idle afterwards whatever the outcome.
    pub fn halt(&mut self) -> Result<()> {
        let result = operations::halt(self.reader);
        self.state = SessionState::Idle;
        result
    }

    fn require_sector(&self, block: BlockAddress) -> Result<()> {
        match self.state {
            SessionState::Authenticated { sector, .. } if sector == block.sector() => Ok(()),
            _ => Err(self.invalid(match self.state {
                SessionState::Authenticated { .. } => "authenticated to the block's sector",
                _ => "authenticated",
            })),
        }
    }

    fn invalid(&self, expected: &'static str) -> Error {
        Error::InvalidState {
            expected,
            actual: self.state,
        }
    }

    fn track<T>(&mut self, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            debug!("session reset to idle from {}: {}", self.state, e);
            self.state = SessionState::Idle;
        }
        result
    }

    fn advance<T: Copy>(&mut self, result: Result<T>, next: fn(T) -> SessionState) -> Result<T> {
        let value = self.track(result)?;
        self.state = next(value);
        Ok(value)
    }
}
