// librc522/src/card/operations/dump.rs
//! Card-wide flows: read every block, clear every data block.
//!
//! Both walk the 16 sectors in order and never stop at a failing sector. A
//! failed authentication sends the card back to idle, so the walk wakes and
//! selects it again (WUPA) before the next sector.

use log::{debug, warn};

use crate::card::session::Session;
use crate::constants::{BLOCKS_PER_SECTOR, SECTOR_COUNT};
use crate::error::Status;
use crate::types::{BlockAddress, BlockData, KeyType, RequestMode, SectorKey};
use crate::{Error, Result};

/// Outcome of reading one block during [`dump`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockRead {
    pub address: BlockAddress,
    pub status: Status,
    pub data: Option<BlockData>,
}

/// Outcome of writing one block during [`clear_data_blocks`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockWrite {
    pub address: BlockAddress,
    pub status: Status,
}

/// Read all 64 blocks, sector by sector. Requires a selected card.
pub fn dump(session: &mut Session<'_>, key_type: KeyType, key: &SectorKey) -> Result<Vec<BlockRead>> {
    require_selected(session)?;
    let mut out = Vec::with_capacity(64);

    for sector in 0..SECTOR_COUNT {
        let blocks = sector_blocks(sector)?;
        if let Err(e) = open_sector(session, sector, key_type, key) {
            out.extend(blocks.map(|address| BlockRead {
                address,
                status: e.status(),
                data: None,
            }));
            continue;
        }
        for address in blocks {
            let read = match session.read_block(address) {
                Ok(data) => BlockRead {
                    address,
                    status: Status::Ok,
                    data: Some(data),
                },
                Err(e) => {
                    debug!("block {}: {}", address, e);
                    BlockRead {
                        address,
                        status: e.status(),
                        data: None,
                    }
                }
            };
            out.push(read);
        }
    }
    Ok(out)
}

/// Zero every data block except the manufacturer block. Trailers are left
/// alone. Requires a selected card.
pub fn clear_data_blocks(
    session: &mut Session<'_>,
    key_type: KeyType,
    key: &SectorKey,
) -> Result<Vec<BlockWrite>> {
    require_selected(session)?;
    let zero = BlockData::zeroed();
    let mut out = Vec::new();

    for sector in 0..SECTOR_COUNT {
        let targets: Vec<BlockAddress> = sector_blocks(sector)?
            .filter(|b| !b.is_trailer() && b.as_u8() != 0)
            .collect();
        if let Err(e) = open_sector(session, sector, key_type, key) {
            out.extend(targets.into_iter().map(|address| BlockWrite {
                address,
                status: e.status(),
            }));
            continue;
        }
        for address in targets {
            let status = match session.write_block(address, &zero) {
                Ok(()) => Status::Ok,
                Err(e) => {
                    debug!("block {}: {}", address, e);
                    e.status()
                }
            };
            out.push(BlockWrite { address, status });
        }
    }
    Ok(out)
}

fn require_selected(session: &Session<'_>) -> Result<()> {
    let state = session.state();
    if !state.is_selected() {
        return Err(Error::InvalidState {
            expected: "selected",
            actual: state,
        });
    }
    Ok(())
}

fn sector_blocks(sector: u8) -> Result<impl Iterator<Item = BlockAddress>> {
    let first = BlockAddress::first_of_sector(sector)?.as_u8();
    Ok((first..first + BLOCKS_PER_SECTOR).filter_map(|b| BlockAddress::new(b).ok()))
}

/// Authenticate to `sector`, waking and selecting the card again first if an
/// earlier failure left the session idle.
fn open_sector(
    session: &mut Session<'_>,
    sector: u8,
    key_type: KeyType,
    key: &SectorKey,
) -> Result<()> {
    if !session.state().is_selected() {
        session.connect(RequestMode::All)?;
    }
    let first = BlockAddress::first_of_sector(sector)?;
    session.authenticate(key_type, first, key).map_err(|e| {
        warn!("sector {}: {}", sector, e);
        e
    })
}
