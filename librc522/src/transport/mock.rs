// librc522/src/transport/mock.rs

use std::collections::VecDeque;

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for unit tests. It records every transaction and answers
/// exchanges from a queue of bytes (0x00 once the queue is empty).
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Bytes clocked out, one entry per select/deselect pair
    pub transactions: Vec<Vec<u8>>,
    pub responses: VecDeque<u8>,
    pub selects: usize,
    pub deselects: usize,
    /// Testing hook: number of exchanges that succeed before every further
    /// exchange fails with a transport error
    pub fail_after: Option<usize>,
    exchanged: usize,
    open: bool,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&mut self, byte: u8) {
        self.responses.push_back(byte);
    }

    pub fn push_responses(&mut self, bytes: &[u8]) {
        self.responses.extend(bytes.iter().copied());
    }

    /// Make every exchange after the first `n` fail.
    pub fn set_fail_after(&mut self, n: usize) {
        self.fail_after = Some(n);
    }

    /// True while a transaction is open (selected and not yet deselected).
    pub fn is_selected(&self) -> bool {
        self.open
    }

    pub fn last_transaction(&self) -> Option<&[u8]> {
        self.transactions.last().map(Vec::as_slice)
    }
}

impl Transport for MockTransport {
    fn select(&mut self) -> Result<()> {
        self.selects += 1;
        self.open = true;
        self.transactions.push(Vec::new());
        Ok(())
    }

    fn exchange(&mut self, byte: u8) -> Result<u8> {
        if let Some(limit) = self.fail_after
            && self.exchanged >= limit
        {
            return Err(Error::Transport("mock exchange failure".into()));
        }
        self.exchanged += 1;
        if let Some(tx) = self.transactions.last_mut() {
            tx.push(byte);
        }
        Ok(self.responses.pop_front().unwrap_or(0x00))
    }

    fn deselect(&mut self) -> Result<()> {
        self.deselects += 1;
        self.open = false;
        Ok(())
    }
}
