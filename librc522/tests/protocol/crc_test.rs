#[path = "../common/mod.rs"]
mod common;

use librc522::protocol::crc_a;
use proptest::prelude::*;

#[test]
fn known_air_frames() {
    // HLTA and READ(0)
    assert_eq!(hex::encode(crc_a(&hex::decode("5000").unwrap())), "57cd");
    assert_eq!(hex::encode(crc_a(&hex::decode("3000").unwrap())), "02a8");
}

#[test]
fn chip_crc_agrees_with_software() {
    let (mut reader, _sim) = common::helpers::reader_with_card(common::fixtures::sample_uid_bytes());
    let payload = common::fixtures::license_payload();
    let mut frame = payload.as_bytes().to_vec();
    assert_eq!(reader.calculate_crc(&frame).unwrap(), crc_a(&frame));
    frame.insert(0, 0xA0);
    assert_eq!(reader.calculate_crc(&frame).unwrap(), crc_a(&frame));
}

proptest! {
    // appending the CRC yields a residue of zero
    #[test]
    fn crc_residue_is_zero(data in proptest::collection::vec(any::<u8>(), 0..64)) {
        let mut framed = data.clone();
        framed.extend_from_slice(&crc_a(&data));
        prop_assert_eq!(crc_a(&framed), [0, 0]);
    }
}
