#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{custom_key, default_key, sample_uid_bytes};
use common::helpers::reader_with_card;
use librc522::card::Session;
use librc522::card::operations::{clear_data_blocks, dump};
use librc522::{BlockData, Error, KeyType, RequestMode, Status};

#[test]
fn dump_reads_all_blocks() {
    let (mut reader, _sim) = reader_with_card(sample_uid_bytes());
    let mut session = Session::new(&mut reader);
    session.connect(RequestMode::Idle).unwrap();

    let blocks = dump(&mut session, KeyType::A, &default_key()).unwrap();
    assert_eq!(blocks.len(), 64);
    assert!(blocks.iter().all(|b| b.status == Status::Ok));

    let manufacturer = blocks[0].data.unwrap();
    assert_eq!(&manufacturer.as_bytes()[..5], &[0x12, 0x34, 0x56, 0x78, 0x08]);
    // key A never reads back
    let trailer = blocks[3].data.unwrap();
    assert_eq!(&trailer.as_bytes()[..6], &[0u8; 6]);
}

#[test]
fn dump_continues_past_locked_sector() {
    let (mut reader, sim) = reader_with_card(sample_uid_bytes());
    sim.with_tag(|tag| tag.set_key_a(2, *custom_key().as_bytes()));
    let mut session = Session::new(&mut reader);
    session.connect(RequestMode::Idle).unwrap();

    let blocks = dump(&mut session, KeyType::A, &default_key()).unwrap();
    assert_eq!(blocks.len(), 64);
    for b in &blocks {
        if b.address.sector() == 2 {
            assert_eq!(b.status, Status::ProtocolError);
            assert!(b.data.is_none());
        } else {
            assert_eq!(b.status, Status::Ok, "block {}", b.address);
        }
    }
}

#[test]
fn dump_requires_selected_card() {
    let (mut reader, sim) = reader_with_card(sample_uid_bytes());
    let mut session = Session::new(&mut reader);
    let err = dump(&mut session, KeyType::A, &default_key()).unwrap_err();
    assert!(matches!(err, Error::InvalidState { .. }));
    assert!(sim.air_frames().is_empty());
}

#[test]
fn clear_skips_manufacturer_block_and_trailers() {
    let (mut reader, sim) = reader_with_card(sample_uid_bytes());
    for n in [1u8, 4, 62] {
        sim.with_tag(|tag| tag.set_block(n, [0x5A; 16]));
    }
    let mut session = Session::new(&mut reader);
    session.connect(RequestMode::Idle).unwrap();

    let written = clear_data_blocks(&mut session, KeyType::A, &default_key()).unwrap();
    assert_eq!(written.len(), 47);
    assert!(written.iter().all(|w| w.status == Status::Ok));
    assert!(written.iter().all(|w| !w.address.is_trailer() && w.address.as_u8() != 0));

    for n in [1u8, 4, 62] {
        assert_eq!(sim.tag_block(n).unwrap(), *BlockData::zeroed().as_bytes());
    }
    assert_eq!(sim.tag_block(0).unwrap()[..4], sample_uid_bytes());
    assert_eq!(sim.tag_block(7).unwrap()[6..10], [0xFF, 0x07, 0x80, 0x69]);
}
