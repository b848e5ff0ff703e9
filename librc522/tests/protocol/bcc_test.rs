use librc522::protocol::bcc;
use librc522::{Error, Uid};
use proptest::prelude::*;

#[test]
fn sample_uid_check_byte() {
    assert_eq!(bcc(&[0x12, 0x34, 0x56, 0x78]), 0x08);
    let uid = Uid::from_anticollision([0x12, 0x34, 0x56, 0x78, 0x08]).unwrap();
    assert_eq!(uid.to_string(), "12 34 56 78");
}

proptest! {
    #[test]
    fn uid_new_always_passes_anticollision_check(serial in any::<[u8; 4]>()) {
        let uid = Uid::new(serial);
        prop_assert_eq!(uid.check_byte(), bcc(&serial));
        prop_assert_eq!(Uid::from_anticollision(*uid.as_bytes()).unwrap(), uid);
    }

    #[test]
    fn flipped_check_byte_is_rejected(serial in any::<[u8; 4]>(), flip in 1u8..=255) {
        let mut raw = *Uid::new(serial).as_bytes();
        raw[4] ^= flip;
        let is_bcc_mismatch = matches!(
            Uid::from_anticollision(raw),
            Err(Error::BccMismatch { .. })
        );
        prop_assert!(is_bcc_mismatch);
    }
}
