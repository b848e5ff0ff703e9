use librc522::transport::{MockTransport, Transport};

#[test]
fn mock_records_transactions() {
    let mut mock = MockTransport::new();
    mock.push_responses(&[0x00, 0x92]);

    mock.select().unwrap();
    assert!(mock.is_selected());
    assert_eq!(mock.exchange(0xEE).unwrap(), 0x00);
    assert_eq!(mock.exchange(0x00).unwrap(), 0x92);
    mock.deselect().unwrap();

    assert!(!mock.is_selected());
    assert_eq!(mock.last_transaction(), Some(&[0xEE, 0x00][..]));
    assert_eq!(mock.selects, 1);
    assert_eq!(mock.deselects, 1);
}

#[test]
fn drained_queue_reads_zero() {
    let mut mock = MockTransport::new();
    mock.select().unwrap();
    assert_eq!(mock.exchange(0x80).unwrap(), 0x00);
    mock.deselect().unwrap();
}

#[test]
fn write_all_sends_every_byte() {
    let mut mock = MockTransport::new();
    mock.select().unwrap();
    mock.write_all(&[0x12, 0xAA, 0xBB]).unwrap();
    mock.deselect().unwrap();
    assert_eq!(mock.transactions, vec![vec![0x12, 0xAA, 0xBB]]);
}

#[test]
fn boxed_transport_delegates() {
    let mut boxed: Box<dyn Transport> = Box::new(MockTransport::new());
    boxed.select().unwrap();
    boxed.exchange(0x02).unwrap();
    boxed.deselect().unwrap();
}
