#[path = "../common/mod.rs"]
mod common;

use std::cell::RefCell;
use std::rc::Rc;

use librc522::device::Reader;
use librc522::protocol::Register;
use librc522::transport::{MockTransport, Transport};
use librc522::{Error, Result};

// Transport wrapper that delegates into Rc<RefCell<MockTransport>>
struct SharedTransport {
    inner: Rc<RefCell<MockTransport>>,
}

impl Transport for SharedTransport {
    fn select(&mut self) -> Result<()> {
        self.inner.borrow_mut().select()
    }
    fn exchange(&mut self, byte: u8) -> Result<u8> {
        self.inner.borrow_mut().exchange(byte)
    }
    fn deselect(&mut self) -> Result<()> {
        self.inner.borrow_mut().deselect()
    }
}

fn shared() -> (Reader, Rc<RefCell<MockTransport>>) {
    let inner = Rc::new(RefCell::new(MockTransport::new()));
    let reader = Reader::new_with_transport(Box::new(SharedTransport {
        inner: inner.clone(),
    }));
    (reader, inner)
}

#[test]
fn address_bytes_for_every_register() {
    for reg in Register::DUMP_ORDER {
        assert_eq!(reg.write_address() & 0x81, 0, "{:?}", reg);
        assert_eq!(reg.read_address() & 0x81, 0x80, "{:?}", reg);
        assert_eq!((reg.write_address() >> 1) & 0x3F, reg.addr());
    }
}

#[test]
fn each_access_is_one_transaction() {
    let (mut reader, mock) = shared();
    reader.write_register(Register::TMode, 0x8D).unwrap();
    mock.borrow_mut().push_responses(&[0x00, 0x3E]);
    assert_eq!(reader.read_register(Register::TPrescaler).unwrap(), 0x3E);

    let m = mock.borrow();
    assert_eq!(m.transactions, vec![vec![0x54, 0x8D], vec![0xD6, 0x00]]);
    assert_eq!(m.selects, 2);
    assert_eq!(m.deselects, 2);
}

#[test]
fn antenna_on_writes_only_when_off() {
    let (mut reader, mock) = shared();
    // TxControl reads 0x80: antenna off -> read, read, write
    mock.borrow_mut().push_responses(&[0x00, 0x80, 0x00, 0x80]);
    reader.antenna_on().unwrap();
    assert_eq!(mock.borrow().transactions.last().unwrap(), &vec![0x28, 0x83]);

    // TxControl reads 0x83: antenna on -> single read
    let before = mock.borrow().transactions.len();
    mock.borrow_mut().push_responses(&[0x00, 0x83]);
    reader.antenna_on().unwrap();
    assert_eq!(mock.borrow().transactions.len(), before + 1);
}

#[test]
fn transport_failure_propagates_and_releases_bus() {
    let (mut reader, mock) = shared();
    mock.borrow_mut().set_fail_after(0);
    let err = reader.read_register(Register::Version).unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert!(!mock.borrow().is_selected());
}
