#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{block, default_key, license_payload, sample_uid_bytes};
use common::helpers::reader_with_card;
use librc522::card::Session;
use librc522::{KeyType, RequestMode, Status};

#[test]
fn license_block_round_trip() {
    let (mut reader, sim) = reader_with_card(sample_uid_bytes());

    // raw command layer, step by step
    let atqa = reader.request(RequestMode::Idle).unwrap();
    assert_eq!(atqa.as_bytes(), &[0x04, 0x00]);

    let uid = reader.anticollision().unwrap();
    assert_eq!(uid.serial(), &[0x12, 0x34, 0x56, 0x78]);
    assert_eq!(uid.check_byte(), 0x08);

    let sak = reader.select(&uid).unwrap();
    assert_ne!(sak, 0);

    reader
        .authenticate(KeyType::A, block(4), &default_key(), &uid)
        .unwrap();
    reader.write_block(block(4), &license_payload()).unwrap();

    let data = reader.read_block(block(4)).unwrap();
    assert_eq!(data.as_bytes(), b"License permit:B");
    assert_eq!(sim.tag_block(4).unwrap(), *b"License permit:B");

    let auth_frame = &sim.air_frames()[3];
    assert_eq!(auth_frame[0], 0x60);
    assert_eq!(auth_frame[1], 4);
    assert_eq!(&auth_frame[2..8], &[0xFF; 6]);
    assert_eq!(&auth_frame[8..12], &[0x12, 0x34, 0x56, 0x78]);
}

#[test]
fn write_survives_halt_and_reconnect() {
    let (mut reader, _sim) = reader_with_card(sample_uid_bytes());
    let mut session = Session::new(&mut reader);

    session.connect(RequestMode::Idle).unwrap();
    session
        .authenticate(KeyType::A, block(4), &default_key())
        .unwrap();
    session.write_block(block(5), &license_payload()).unwrap();
    session.halt().unwrap();

    // halted card only answers WUPA
    assert_eq!(
        Status::from(&session.connect(RequestMode::Idle)),
        Status::NoTag
    );
    session.connect(RequestMode::All).unwrap();
    session
        .authenticate(KeyType::A, block(4), &default_key())
        .unwrap();
    assert_eq!(session.read_block(block(5)).unwrap(), license_payload());
}

#[test]
fn same_payload_written_in_two_sessions_is_acknowledged_twice() {
    let (mut reader, sim) = reader_with_card(sample_uid_bytes());
    let mut session = Session::new(&mut reader);

    session.connect(RequestMode::Idle).unwrap();
    session
        .authenticate(KeyType::A, block(4), &default_key())
        .unwrap();
    let first = session.write_block(block(6), &license_payload());
    session.halt().unwrap();

    session.connect(RequestMode::All).unwrap();
    session
        .authenticate(KeyType::A, block(4), &default_key())
        .unwrap();
    let second = session.write_block(block(6), &license_payload());

    assert!(first.is_ok());
    assert!(second.is_ok());
    assert_eq!(sim.tag_block(6).unwrap(), *license_payload().as_bytes());
}
