//! Deterministic transport double for tests and demos.
//!
//! [`ReplayTransport`] replays pre-scripted receive bytes, one script per
//! transaction, and records everything the driver clocked out. It stands in
//! for the hardware in the integration tests and the `replay_scan` example.

use std::collections::VecDeque;

use pn532_protocol::{checksum, length_checksum, POSTAMBLE, RESPONSE_START};

use crate::transport::ByteTransport;

/// Byte returned once a transaction's script runs out: the idle level of
/// the link.
const IDLE_RX: u8 = 0x00;

/// A scripted [`ByteTransport`].
///
/// Each element of the script is the receive side of one transaction, in
/// order. A transaction that outlives its script (or one with no script at
/// all) reads [`IDLE_RX`], which is how a controller that never answers is
/// modelled. The ready line is a plain flag, asserted unless a test clears
/// it.
pub struct ReplayTransport {
    scripts: VecDeque<Vec<u8>>,
    current: VecDeque<u8>,
    stale: VecDeque<u8>,
    writes: Vec<Vec<u8>>,
    in_transaction: bool,
    ready_line: bool,
}

impl ReplayTransport {
    /// Create a transport replaying the given per-transaction rx scripts.
    pub fn new(scripts: Vec<Vec<u8>>) -> Self {
        ReplayTransport {
            scripts: scripts.into(),
            current: VecDeque::new(),
            stale: VecDeque::new(),
            writes: Vec::new(),
            in_transaction: false,
            ready_line: true,
        }
    }

    /// Seed pending rx bytes, as if a previous exchange left them behind.
    pub fn push_stale(&mut self, bytes: &[u8]) {
        self.stale.extend(bytes);
    }

    /// Set the ready/IRQ line state.
    pub fn set_ready_line(&mut self, asserted: bool) {
        self.ready_line = asserted;
    }

    /// The bytes clocked out so far, one `Vec` per transaction.
    pub fn writes(&self) -> &[Vec<u8>] {
        &self.writes
    }

    /// How many bytes each completed-or-open transaction exchanged.
    pub fn transaction_exchanges(&self) -> Vec<usize> {
        self.writes.iter().map(|w| w.len()).collect()
    }
}

impl ByteTransport for ReplayTransport {
    fn begin_transaction(&mut self) {
        assert!(!self.in_transaction, "transaction already open");
        self.in_transaction = true;
        self.current = self.scripts.pop_front().unwrap_or_default().into();
        self.writes.push(Vec::new());
    }

    fn end_transaction(&mut self) {
        assert!(self.in_transaction, "no transaction open");
        self.in_transaction = false;
    }

    fn exchange_byte(&mut self, tx: u8) -> u8 {
        assert!(self.in_transaction, "exchange outside a transaction");
        self.writes
            .last_mut()
            .expect("a transaction records its writes")
            .push(tx);
        self.current.pop_front().unwrap_or(IDLE_RX)
    }

    fn pending_rx(&self) -> usize {
        self.stale.len()
    }

    fn drain_rx(&mut self) -> usize {
        let dropped = self.stale.len();
        self.stale.clear();
        dropped
    }

    fn ready_line_asserted(&self) -> bool {
        self.ready_line
    }
}

/// Build the receive image of a response frame carrying `payload`.
pub fn response_frame(payload: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(payload.len() + RESPONSE_START.len() + 4);
    frame.extend_from_slice(&RESPONSE_START);
    frame.push(payload.len() as u8);
    frame.push(length_checksum(payload.len() as u8));
    frame.extend_from_slice(payload);
    frame.push(checksum(payload));
    frame.push(POSTAMBLE);
    frame
}
