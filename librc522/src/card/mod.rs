// librc522/src/card/mod.rs

use crate::types::{Atqa, Uid};

pub mod operations;
pub mod session;

pub use operations::{BlockRead, BlockWrite};
pub use session::Session;

/// A card brought to the selected state by [`Session::connect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    uid: Uid,
    atqa: Atqa,
    sak: u8,
}

impl Card {
    pub fn new(uid: Uid, atqa: Atqa, sak: u8) -> Self {
        Self { uid, atqa, sak }
    }

    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    pub fn atqa(&self) -> Atqa {
        self.atqa
    }

    /// SELECT acknowledge; the storage size code of the card.
    pub fn sak(&self) -> u8 {
        self.sak
    }
}

/// Where a card session stands. Every operation error returns the session to
/// `Idle`; only a fresh request leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display)]
pub enum SessionState {
    #[default]
    #[display(fmt = "idle")]
    Idle,
    #[display(fmt = "requested")]
    Requested(Atqa),
    #[display(fmt = "resolved ({})", _0)]
    Resolved(Uid),
    #[display(fmt = "selected ({})", uid)]
    Selected { uid: Uid, sak: u8 },
    #[display(fmt = "authenticated to sector {} ({})", sector, uid)]
    Authenticated { uid: Uid, sak: u8, sector: u8 },
}

impl SessionState {
    /// UID known to the session, if anticollision has completed.
    pub fn uid(&self) -> Option<&Uid> {
        match self {
            Self::Resolved(uid) | Self::Selected { uid, .. } | Self::Authenticated { uid, .. } => {
                Some(uid)
            }
            Self::Idle | Self::Requested(_) => None,
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, Self::Selected { .. } | Self::Authenticated { .. })
    }

    /// Sector the session is authenticated to.
    pub fn sector(&self) -> Option<u8> {
        match self {
            Self::Authenticated { sector, .. } => Some(*sector),
            _ => None,
        }
    }
}
