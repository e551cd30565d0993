//! Ready-signal waits.
//!
//! The controller signals in two ways that it has data to shift out: the
//! ready/IRQ line, and the `0x01` status byte answered to a status-read
//! transaction. The original polling handshake had no bound; here every
//! wait carries a deadline and expires into
//! [`Pn532Error::TransportTimeout`], leaving retry policy to the caller.

use std::time::{Duration, Instant};

use log::trace;

use pn532_protocol::{SELECTOR_STATUS_READ, STATUS_READY};

use crate::error::Pn532Error;
use crate::transport::ByteTransport;

/// Poll the status byte until the controller reports ready.
///
/// Each iteration is one status-read transaction: clock out the selector,
/// drain whatever stale bytes are pending so leftover framing cannot read
/// as a false ready, then clock one more byte and inspect it.
///
/// Only call this when a command or response is actually pending; polling
/// an idle controller spins until the deadline.
pub(crate) fn wait_ready<T: ByteTransport>(
    transport: &mut T,
    timeout: Duration,
) -> Result<(), Pn532Error> {
    let start = Instant::now();
    loop {
        transport.begin_transaction();
        let _ = transport.exchange_byte(SELECTOR_STATUS_READ);
        transport.drain_rx();
        let status = transport.exchange_byte(0x00);
        transport.end_transaction();

        if status == STATUS_READY {
            transport.drain_rx();
            return Ok(());
        }
        trace!("status 0x{:02X}, not ready", status);

        let waited = start.elapsed();
        if waited >= timeout {
            return Err(Pn532Error::TransportTimeout { waited });
        }
        std::hint::spin_loop();
    }
}

/// Wait for the ready/IRQ line to assert.
pub(crate) fn wait_irq<T: ByteTransport>(
    transport: &mut T,
    timeout: Duration,
) -> Result<(), Pn532Error> {
    let start = Instant::now();
    while !transport.ready_line_asserted() {
        let waited = start.elapsed();
        if waited >= timeout {
            return Err(Pn532Error::TransportTimeout { waited });
        }
        std::hint::spin_loop();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ReplayTransport;

    #[test]
    fn test_wait_ready_accepts_first_ready_status() {
        let mut transport = ReplayTransport::new(vec![vec![0x00, STATUS_READY]]);
        wait_ready(&mut transport, Duration::from_millis(100)).unwrap();
        assert_eq!(transport.transaction_exchanges(), &[2]);
    }

    #[test]
    fn test_wait_ready_retries_until_ready() {
        let mut transport = ReplayTransport::new(vec![
            vec![0x00, 0x00],
            vec![0x00, 0x00],
            vec![0x00, STATUS_READY],
        ]);
        wait_ready(&mut transport, Duration::from_millis(100)).unwrap();
        assert_eq!(transport.transaction_exchanges().len(), 3);
    }

    #[test]
    fn test_wait_ready_drains_stale_bytes_before_status() {
        let mut transport = ReplayTransport::new(vec![vec![0x00, STATUS_READY]]);
        // Leftover framing from a previous exchange would otherwise be read
        // as the status byte.
        transport.push_stale(&[STATUS_READY, 0xFF]);
        wait_ready(&mut transport, Duration::from_millis(100)).unwrap();
        assert_eq!(transport.pending_rx(), 0);
    }

    #[test]
    fn test_wait_ready_times_out() {
        // A controller that never reports ready: every status poll reads 0x00.
        let mut transport = ReplayTransport::new(vec![]);
        let err = wait_ready(&mut transport, Duration::from_millis(5)).unwrap_err();
        assert!(matches!(err, Pn532Error::TransportTimeout { .. }));
    }

    #[test]
    fn test_wait_irq_times_out_when_line_never_asserts() {
        let mut transport = ReplayTransport::new(vec![]);
        transport.set_ready_line(false);
        let err = wait_irq(&mut transport, Duration::from_millis(5)).unwrap_err();
        assert!(matches!(err, Pn532Error::TransportTimeout { .. }));
    }

    #[test]
    fn test_wait_irq_returns_when_line_asserted() {
        let mut transport = ReplayTransport::new(vec![]);
        wait_irq(&mut transport, Duration::from_millis(5)).unwrap();
        assert_eq!(transport.transaction_exchanges().len(), 0);
    }
}
