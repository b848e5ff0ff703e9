#[path = "../common/mod.rs"]
mod common;

use librc522::device::Reader;
use librc522::transport::MockTransport;
use librc522::{Error, Status};

#[test]
fn initialize_fails_on_dead_bus() {
    common::helpers::init_logging();
    let mut mock = MockTransport::new();
    mock.set_fail_after(0);
    let err = Reader::new_with_transport(Box::new(mock))
        .initialize()
        .err()
        .unwrap();
    assert!(matches!(err, Error::Transport(_)));
    assert_eq!(err.status(), Status::ProtocolError);
}

#[test]
fn failure_midway_through_init_propagates() {
    let mut mock = MockTransport::new();
    // SoftReset and two timer writes succeed
    mock.set_fail_after(6);
    let result = Reader::new_with_transport(Box::new(mock)).initialize();
    assert!(matches!(result, Err(Error::Transport(_))));
}

#[test]
fn error_messages_are_readable() {
    let err = Error::Transport("mock exchange failure".into());
    assert_eq!(err.to_string(), "transport error: mock exchange failure");
    assert_eq!(
        Error::FrameTooLong {
            len: 70,
            capacity: 64
        }
        .to_string(),
        "frame of 70 bytes does not fit the 64-byte FIFO"
    );
}
