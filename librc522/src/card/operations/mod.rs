// librc522/src/card/operations/mod.rs
//! One function per card command, each a single transceive (two for WRITE)
//! with the command's framing and answer check. They carry no session state;
//! [`Session`](crate::card::Session) enforces ordering on top of them.

pub mod anticoll;
pub mod auth;
pub mod dump;
pub mod halt;
pub mod read;
pub mod request;
pub mod select;
pub mod write;

// Re-export the operations at the operations root so callers can use
// `crate::card::operations::read_block(...)`.
pub use anticoll::anticollision;
pub use auth::authenticate;
pub use dump::{BlockRead, BlockWrite, clear_data_blocks, dump};
pub use halt::halt;
pub use read::read_block;
pub use request::request;
pub use select::select;
pub use write::{write_block, write_trailer};

use crate::device::{Initialized, Reader};
use crate::types::{
    Atqa, BlockAddress, BlockData, KeyType, RequestMode, SectorKey, SectorTrailer, Uid,
};
use crate::Result;

/// Card commands as reader methods, for callers managing the session order
/// themselves.
impl Reader<Initialized> {
    pub fn request(&mut self, mode: RequestMode) -> Result<Atqa> {
        request(self, mode)
    }

    pub fn anticollision(&mut self) -> Result<Uid> {
        anticollision(self)
    }

    pub fn select(&mut self, uid: &Uid) -> Result<u8> {
        select(self, uid)
    }

    pub fn authenticate(
        &mut self,
        key_type: KeyType,
        block: BlockAddress,
        key: &SectorKey,
        uid: &Uid,
    ) -> Result<()> {
        authenticate(self, key_type, block, key, uid)
    }

    pub fn read_block(&mut self, block: BlockAddress) -> Result<BlockData> {
        read_block(self, block)
    }

    pub fn write_block(&mut self, block: BlockAddress, data: &BlockData) -> Result<()> {
        write_block(self, block, data)
    }

    pub fn write_trailer(&mut self, block: BlockAddress, trailer: &SectorTrailer) -> Result<()> {
        write_trailer(self, block, trailer)
    }

    pub fn halt(&mut self) -> Result<()> {
        halt(self)
    }
}
