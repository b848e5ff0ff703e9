//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common simulator and MockTransport setup so tests
//! across the crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::device::{Initialized, Reader, Uninitialized};
use crate::transport::{MockTransport, SimulatedReader, SimulatedTag, Transport};
use crate::types::{RequestMode, Uid};
use crate::{Error, Result};

/// Build a MockTransport pre-seeded with the given response bytes and return
/// it boxed as a Transport trait object.
#[doc(hidden)]
pub fn boxed_mock_with_responses(responses: &[u8]) -> Box<dyn Transport> {
    let mut mock = MockTransport::new();
    mock.push_responses(responses);
    Box::new(mock)
}

/// An uninitialized Reader over an empty simulated field, plus a handle to
/// the simulator for inspection.
#[doc(hidden)]
pub fn sim_reader() -> (Reader<Uninitialized>, SimulatedReader) {
    let sim = SimulatedReader::new();
    let reader = Reader::new_with_transport(Box::new(sim.clone()));
    (reader, sim)
}

/// Convenience: an initialized Reader over an empty simulated field.
#[doc(hidden)]
pub fn initialized_sim_reader() -> (Reader<Initialized>, SimulatedReader) {
    let (reader, sim) = sim_reader();
    match reader.initialize() {
        Ok(reader) => (reader, sim),
        Err(e) => panic!("simulated reader failed to initialize: {}", e),
    }
}

/// An initialized Reader with a factory-fresh card `uid` in the field.
#[doc(hidden)]
pub fn initialized_reader_with_card(uid: [u8; 4]) -> (Reader<Initialized>, SimulatedReader) {
    let (reader, sim) = initialized_sim_reader();
    sim.insert_tag(SimulatedTag::classic_1k(uid));
    (reader, sim)
}

/// REQA, anticollision and select without a session. Returns the UID.
#[doc(hidden)]
pub fn select_card(reader: &mut Reader<Initialized>) -> Result<Uid> {
    reader.request(RequestMode::Idle)?;
    let uid = reader.anticollision()?;
    match reader.select(&uid)? {
        0 => Err(Error::NoTag),
        _ => Ok(uid),
    }
}
