// librc522/src/transport/mod.rs

pub mod mock;
pub mod sim;
#[cfg(feature = "hal")]
pub mod spi;
pub mod traits;

pub use mock::MockTransport;
pub use sim::{SimulatedReader, SimulatedTag, TagState};
#[cfg(feature = "hal")]
pub use spi::SpiTransport;
pub use traits::Transport;
