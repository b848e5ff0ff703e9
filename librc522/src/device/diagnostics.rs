// librc522/src/device/diagnostics.rs

use crate::device::handle::Reader;
use crate::protocol::registers::Register;
use crate::Result;

impl<State> Reader<State> {
    /// Read every register in [`Register::DUMP_ORDER`]. FIFOData is skipped
    /// because reading it consumes a byte.
    pub fn dump_registers(&mut self) -> Result<Vec<(Register, u8)>> {
        Register::DUMP_ORDER
            .iter()
            .map(|&reg| Ok((reg, self.read_register(reg)?)))
            .collect()
    }
}
