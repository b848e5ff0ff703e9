#[path = "../common/mod.rs"]
mod common;

use librc522::config::{ReaderConfig, WaitBudget};
use librc522::device::{Initialized, Reader, ReaderBuilder, Uninitialized};
use librc522::protocol::Register;
use librc522::transport::{SimulatedReader, Transport};
use librc522::{ChipVersion, ms};

#[test]
fn uninitialized_to_initialized_transition() {
    common::helpers::init_logging();
    let sim = SimulatedReader::new();
    let reader: Reader<Uninitialized> = ReaderBuilder::new()
        .with_transport(Box::new(sim.clone()))
        .build_uninitialized()
        .unwrap();
    assert_eq!(sim.soft_resets(), 0);

    let mut reader: Reader<Initialized> = reader.initialize().unwrap();
    assert_eq!(sim.soft_resets(), 1);
    assert!(reader.antenna_enabled().unwrap());
    assert_eq!(reader.version().unwrap(), ChipVersion::V2_0);
}

#[test]
fn config_travels_through_builder() {
    let sim = SimulatedReader::new();
    let cfg = ReaderConfig::new()
        .with_transceive_wait(WaitBudget::Elapsed(ms(25)))
        .with_timer(0x8D, 0x3E, 60);
    let reader = ReaderBuilder::new()
        .with_transport(Box::new(sim.clone()))
        .with_config(cfg)
        .build()
        .unwrap();
    assert_eq!(reader.config(), &cfg);
    assert_eq!(sim.register(Register::TReloadLow), 60);
}

#[test]
fn init_register_values() {
    let (_reader, sim) = common::helpers::reader_with_card(common::fixtures::sample_uid_bytes());
    assert_eq!(sim.register(Register::TMode), 0x8D);
    assert_eq!(sim.register(Register::TPrescaler), 0x3E);
    assert_eq!(sim.register(Register::TReloadHigh), 0x00);
    assert_eq!(sim.register(Register::TReloadLow), 0x1E);
    assert_eq!(sim.register(Register::TxAsk), 0x40);
    assert_eq!(sim.register(Register::Mode), 0x3D);
    assert_eq!(sim.register(Register::TxControl) & 0x03, 0x03);
}

#[test]
fn release_returns_transport() {
    let (reader, _sim) = common::helpers::reader_with_card(common::fixtures::sample_uid_bytes());
    let mut transport = reader.release();
    // the transport is still usable on its own
    transport.select().unwrap();
    transport.exchange(Register::Version.read_address()).unwrap();
    assert_eq!(transport.exchange(0).unwrap(), 0x92);
    transport.deselect().unwrap();
}
