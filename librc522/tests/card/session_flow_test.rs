#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{block, custom_key, default_key, sample_uid_bytes};
use common::helpers::reader_with_card;
use librc522::card::{Session, SessionState};
use librc522::transport::TagState;
use librc522::{Error, KeyType, RequestMode, SectorTrailer, Status, Uid};

#[test]
fn halted_card_rejects_reads_and_writes() {
    let (mut reader, _sim) = reader_with_card(sample_uid_bytes());
    {
        let mut session = Session::new(&mut reader);
        session.connect(RequestMode::Idle).unwrap();
        session
            .authenticate(KeyType::A, block(4), &default_key())
            .unwrap();
        session.halt().unwrap();

        // the session refuses without touching the card
        assert!(matches!(
            session.read_block(block(4)),
            Err(Error::InvalidState { .. })
        ));
    }

    // the raw command layer reaches the card, which stays silent
    let read = reader.read_block(block(4));
    assert!(read.is_err());
    let write = reader.write_block(block(4), &librc522::BlockData::zeroed());
    assert!(write.is_err());
}

#[test]
fn select_with_foreign_uid_returns_zero() {
    let (mut reader, sim) = reader_with_card(sample_uid_bytes());
    reader.request(RequestMode::Idle).unwrap();
    reader.anticollision().unwrap();
    let other = Uid::new([0xDE, 0xAD, 0xBE, 0xEF]);
    assert_eq!(reader.select(&other).unwrap(), 0);
    assert_eq!(sim.tag_state(), Some(TagState::Ready));
}

#[test]
fn corrupted_check_byte_aborts_anticollision() {
    let (mut reader, sim) = reader_with_card(sample_uid_bytes());
    sim.set_corrupt_bcc(true);
    let mut session = Session::new(&mut reader);
    session.request(RequestMode::Idle).unwrap();
    let err = session.anticollision().unwrap_err();
    assert!(matches!(err, Error::BccMismatch { .. }));
    assert_eq!(err.status(), Status::ProtocolError);
    assert_eq!(session.state(), SessionState::Idle);
}

#[test]
fn request_rejects_answers_of_the_wrong_length() {
    let (mut reader, sim) = reader_with_card(sample_uid_bytes());
    sim.override_next_reply(&[0x04], 0);
    let err = reader.request(RequestMode::Idle).unwrap_err();
    assert!(matches!(
        err,
        Error::UnexpectedBits {
            expected: 16,
            actual: 8
        }
    ));
}

#[test]
fn wrong_key_then_recover() {
    let (mut reader, sim) = reader_with_card(sample_uid_bytes());
    sim.with_tag(|tag| tag.set_key_a(1, *custom_key().as_bytes()));
    let mut session = Session::new(&mut reader);
    session.connect(RequestMode::Idle).unwrap();

    let err = session
        .authenticate(KeyType::A, block(4), &default_key())
        .unwrap_err();
    assert!(err.is_auth_error());
    assert_eq!(session.state(), SessionState::Idle);

    session.connect(RequestMode::All).unwrap();
    session
        .authenticate(KeyType::A, block(4), &custom_key())
        .unwrap();
    assert!(session.read_block(block(4)).is_ok());
}

#[test]
fn data_write_to_trailer_is_refused() {
    let (mut reader, sim) = reader_with_card(sample_uid_bytes());
    let mut session = Session::new(&mut reader);
    session.connect(RequestMode::Idle).unwrap();
    session
        .authenticate(KeyType::A, block(4), &default_key())
        .unwrap();
    sim.clear_air_frames();

    let err = session
        .write_block(block(7), &librc522::BlockData::zeroed())
        .unwrap_err();
    assert!(matches!(err, Error::SectorTrailer(7)));
    assert!(sim.air_frames().is_empty());
}

#[test]
fn trailer_write_changes_key() {
    let (mut reader, _sim) = reader_with_card(sample_uid_bytes());
    let mut session = Session::new(&mut reader);
    session.connect(RequestMode::Idle).unwrap();
    session
        .authenticate(KeyType::A, block(4), &default_key())
        .unwrap();
    let trailer = SectorTrailer::new(custom_key(), Default::default(), default_key());
    session.write_trailer(block(7), &trailer).unwrap();
    session.halt().unwrap();

    session.connect(RequestMode::All).unwrap();
    assert!(
        session
            .authenticate(KeyType::A, block(4), &default_key())
            .is_err()
    );
    session.connect(RequestMode::All).unwrap();
    session
        .authenticate(KeyType::A, block(4), &custom_key())
        .unwrap();
}
