#[path = "../common/mod.rs"]
mod common;

use librc522::config::{ReaderConfig, WaitBudget};
use librc522::device::{Initialized, Reader};
use librc522::error::ChipFault;
use librc522::protocol::{FrameBuffer, PcdCommand, Register};
use librc522::transport::SimulatedTag;
use librc522::{Error, Status, ms};

fn reqa(reader: &mut Reader<Initialized>) -> librc522::Result<(usize, FrameBuffer)> {
    let mut frame = FrameBuffer::new();
    reader.write_register(Register::BitFraming, 0x07)?;
    let bits = reader.transceive(PcdCommand::Transceive, &[0x26], &mut frame);
    reader.write_register(Register::BitFraming, 0x00)?;
    Ok((bits?, frame))
}

#[test]
fn transceive_reports_bit_length() {
    let (mut reader, _sim) = common::helpers::reader_with_card(common::fixtures::sample_uid_bytes());
    let (bits, frame) = reqa(&mut reader).unwrap();
    assert_eq!(bits, 16);
    assert_eq!(frame.bit_len(), 16);
    assert_eq!(frame.last_bits(), 0);
}

#[test]
fn partial_last_byte_counts_bits() {
    let (mut reader, sim) = common::helpers::reader_with_card(common::fixtures::sample_uid_bytes());
    sim.override_next_reply(&[0x04, 0x03], 3);
    let (bits, frame) = reqa(&mut reader).unwrap();
    assert_eq!(bits, 11);
    assert_eq!(frame.as_bytes(), &[0x04, 0x03]);
}

#[test]
fn oversized_answer_is_clamped_to_frame_capacity() {
    let (mut reader, sim) = common::helpers::reader_with_card(common::fixtures::sample_uid_bytes());
    sim.override_next_reply(&[0x5A; 20], 0);
    let (bits, frame) = reqa(&mut reader).unwrap();
    assert_eq!(bits, 160);
    assert_eq!(frame.len(), 16);
}

#[test]
fn elapsed_budget_gives_no_response() {
    let cfg = ReaderConfig::new().with_transceive_wait(WaitBudget::Elapsed(ms(5)));
    let (mut reader, sim) = common::helpers::reader_with_tag(SimulatedTag::classic_1k([1, 2, 3, 4]), cfg);
    sim.set_stall(true);
    let err = reqa(&mut reader).unwrap_err();
    assert!(matches!(err, Error::NoResponse));
    assert_eq!(err.status(), Status::ProtocolError);
}

#[test]
fn each_fatal_error_bit_maps_to_a_fault() {
    let cases = [
        (0x10, ChipFault::BufferOverflow),
        (0x08, ChipFault::Collision),
        (0x02, ChipFault::Parity),
        (0x01, ChipFault::Protocol),
    ];
    for (bits, expected) in cases {
        let (mut reader, sim) = common::helpers::reader_with_card([1, 2, 3, 4]);
        sim.inject_error(bits);
        match reqa(&mut reader) {
            Err(Error::Chip { fault, bits: raw }) => {
                assert_eq!(fault, expected);
                assert_eq!(raw, bits);
            }
            other => panic!("expected chip error for {:#04x}, got {:?}", bits, other),
        }
    }
}

#[test]
fn no_card_is_no_tag_status() {
    let (mut reader, sim) = common::helpers::reader_with_card([1, 2, 3, 4]);
    sim.remove_tag();
    let err = reqa(&mut reader).unwrap_err();
    assert_eq!(err.status(), Status::NoTag);
}
