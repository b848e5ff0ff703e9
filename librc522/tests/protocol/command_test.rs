use librc522::protocol::{PcdCommand, PiccCommand, Register, ResponseShape};
use librc522::{KeyType, RequestMode};

#[test]
fn picc_command_codes() {
    assert_eq!(PiccCommand::request(RequestMode::Idle).code(), 0x26);
    assert_eq!(PiccCommand::request(RequestMode::All).code(), 0x52);
    assert_eq!(PiccCommand::auth(KeyType::A).code(), 0x60);
    assert_eq!(PiccCommand::auth(KeyType::B).code(), 0x61);
    assert_eq!(PiccCommand::Read.code(), 0x30);
    assert_eq!(PiccCommand::Write.code(), 0xA0);
    assert_eq!(PiccCommand::HaltA.code(), 0x50);
}

#[test]
fn response_shapes() {
    assert!(PiccCommand::ReqA.response_shape().accepts(16));
    assert!(!PiccCommand::ReqA.response_shape().accepts(8));
    assert!(PiccCommand::SelCl1.response_shape().accepts(40));
    assert!(PiccCommand::select_shape().accepts(24));
    assert!(PiccCommand::Read.response_shape().accepts(144));
    assert_eq!(PiccCommand::Write.response_shape(), ResponseShape::Ack);
    assert!(ResponseShape::Ack.accepts(4));
    assert_eq!(ResponseShape::Bytes(5).expected_bits(), 40);
}

#[test]
fn pcd_command_round_trip_and_masks() {
    for cmd in [
        PcdCommand::Idle,
        PcdCommand::CalcCrc,
        PcdCommand::Transceive,
        PcdCommand::MfAuthent,
        PcdCommand::SoftReset,
    ] {
        assert_eq!(PcdCommand::from_code(cmd.code()), Some(cmd));
    }
    assert_eq!(PcdCommand::from_code(0x05), None);
    assert!(PcdCommand::Transceive.needs_start_send());
    assert!(!PcdCommand::MfAuthent.receives());
    assert_eq!(PcdCommand::Transceive.irq_masks().enable, 0x77);
    assert_eq!(PcdCommand::Transceive.irq_masks().wait, 0x30);
}

#[test]
fn register_addresses() {
    assert_eq!(Register::Command.addr(), 0x01);
    assert_eq!(Register::FifoData.write_address(), 0x12);
    assert_eq!(Register::Version.read_address(), 0xEE);
}
