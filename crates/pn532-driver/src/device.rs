//! The driver itself: command orchestration and tag scanning.

use std::time::Duration;

use log::{debug, trace};

use pn532_protocol::Packet;

use crate::commands::Command;
use crate::error::Pn532Result;
use crate::exchange;
use crate::poll;
use crate::transport::ByteTransport;

/// Offset of the target-count byte in an InListPassiveTarget response
/// payload (after the direction byte and the response code).
const TARGET_COUNT_OFFSET: usize = 2;
/// Offset of the first NFCID byte for a single type-A target.
const NFCID_OFFSET: usize = 8;
/// NFCID length extracted from the discovery response.
const NFCID_SIZE: usize = 4;

/// Driver tuning knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pn532Config {
    /// How long each ready wait (line or status poll) may last before the
    /// exchange fails with [`Pn532Error::TransportTimeout`](crate::Pn532Error::TransportTimeout).
    pub ready_timeout: Duration,
}

impl Default for Pn532Config {
    fn default() -> Self {
        Pn532Config {
            ready_timeout: Duration::from_millis(500),
        }
    }
}

/// A PN532 contactless-card controller on a byte transport.
///
/// All operations take `&mut self`: the transport is exclusively owned by
/// the exchange in progress, which is exactly the at-most-one-exchange
/// guarantee the protocol requires.
pub struct Pn532<T: ByteTransport> {
    transport: T,
    config: Pn532Config,
}

impl<T: ByteTransport> Pn532<T> {
    /// Create a driver with the default configuration.
    pub fn new(transport: T) -> Self {
        Pn532::with_config(transport, Pn532Config::default())
    }

    /// Create a driver with explicit timeouts.
    pub fn with_config(transport: T, config: Pn532Config) -> Self {
        Pn532 { transport, config }
    }

    /// Prepare the link for use.
    ///
    /// Clock, pin, and peripheral setup belong to the transport; what is
    /// left here is protocol state: any bytes a previous, possibly
    /// interrupted, session left pending are dropped.
    pub fn initialize(&mut self) {
        let dropped = self.transport.drain_rx();
        if dropped > 0 {
            trace!("dropped {} stale bytes", dropped);
        }
        debug!("link initialized");
    }

    /// Run one full command/response exchange.
    ///
    /// Sends the command frame, waits for the ready line, validates the
    /// acknowledge, waits again, and decodes the response into `response`
    /// (overwriting whatever it held). The first failure of any step aborts
    /// the exchange.
    pub fn send_command(&mut self, command: Command, response: &mut Packet) -> Pn532Result<()> {
        let packet = Packet::from_payload(command.payload())?;
        trace!("exchange: {:?}", command);
        exchange::send_command(&mut self.transport, &packet);
        poll::wait_irq(&mut self.transport, self.config.ready_timeout)?;
        exchange::read_ack(&mut self.transport, self.config.ready_timeout)?;
        poll::wait_irq(&mut self.transport, self.config.ready_timeout)?;
        exchange::read_response(&mut self.transport, response, self.config.ready_timeout)?;
        Ok(())
    }

    /// Scan for a passive tag and return its identifier.
    ///
    /// Configures the SAM (discarding that response), then lists passive
    /// targets. Returns `Ok(0)` when no single target was found. Note the
    /// ambiguity: a tag whose NFCID is genuinely zero is indistinguishable
    /// from an empty field. Communication failures are `Err`, never `0`.
    pub fn scan_for_card(&mut self) -> Pn532Result<u32> {
        let mut response = Packet::new();
        self.send_command(Command::SamConfiguration, &mut response)?;
        self.send_command(Command::ListPassiveTarget, &mut response)?;

        let id = extract_nfcid(response.payload());
        match id {
            0 => debug!("no card found"),
            id => debug!("card found: {:08X}", id),
        }
        Ok(id)
    }

    /// Consume the driver, returning the transport.
    pub fn into_transport(self) -> T {
        self.transport
    }
}

/// Extract the NFCID from an InListPassiveTarget response payload.
///
/// Returns the 4 bytes at offsets 8–11 as a big-endian identifier when
/// exactly one target was found, `0` otherwise (including payloads too
/// short to carry an identifier).
fn extract_nfcid(payload: &[u8]) -> u32 {
    if payload.len() < NFCID_OFFSET + NFCID_SIZE {
        return 0;
    }
    if payload[TARGET_COUNT_OFFSET] != 1 {
        return 0;
    }
    u32::from_be_bytes([
        payload[NFCID_OFFSET],
        payload[NFCID_OFFSET + 1],
        payload[NFCID_OFFSET + 2],
        payload[NFCID_OFFSET + 3],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_nfcid_single_target() {
        let payload = [
            0xD5, 0x4B, 0x01, 0x01, 0x00, 0x04, 0x08, 0x04, 0x12, 0x34, 0x56, 0x78,
        ];
        assert_eq!(extract_nfcid(&payload), 0x12345678);
    }

    #[test]
    fn test_extract_nfcid_no_target() {
        let payload = [
            0xD5, 0x4B, 0x00, 0x01, 0x00, 0x04, 0x08, 0x04, 0x12, 0x34, 0x56, 0x78,
        ];
        assert_eq!(extract_nfcid(&payload), 0);
    }

    #[test]
    fn test_extract_nfcid_two_targets_is_no_match() {
        let payload = [
            0xD5, 0x4B, 0x02, 0x01, 0x00, 0x04, 0x08, 0x04, 0x12, 0x34, 0x56, 0x78,
        ];
        assert_eq!(extract_nfcid(&payload), 0);
    }

    #[test]
    fn test_extract_nfcid_short_payload() {
        assert_eq!(extract_nfcid(&[0xD5, 0x4B, 0x01]), 0);
    }
}
