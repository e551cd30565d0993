//! Frame transmission, acknowledge validation, and response decoding.

use std::time::Duration;

use log::{trace, warn};

use pn532_protocol::{
    checksum, checksum_ok, encode_command, is_ack, length_checksum_ok, Packet,
    POSTAMBLE, RESPONSE_START, SELECTOR_DATA_READ,
};

use crate::error::Pn532Error;
use crate::poll;
use crate::transport::ByteTransport;

/// Number of bytes read before the payload of a response frame: the four
/// start bytes, LEN, and LCS.
const RESPONSE_HEADER_SIZE: usize = 6;

/// Transmit a command frame in a single transaction.
///
/// Success is assumed at this layer; a transport-level failure is the
/// transport's to surface. The bytes the full-duplex link clocked in
/// during the write are garbage and get drained afterwards.
pub(crate) fn send_command<T: ByteTransport>(transport: &mut T, command: &Packet) {
    let frame = encode_command(command);
    trace!("sending {:02X?}", frame);
    transport.begin_transaction();
    for &byte in &frame {
        let _ = transport.exchange_byte(byte);
    }
    transport.end_transaction();
    transport.drain_rx();
}

/// Read and validate the 7-byte acknowledge frame.
///
/// Waits for the controller to report ready, then reads exactly seven bytes
/// in one data-read transaction. Anything but an exact match, NACK frame
/// and garbage alike, is [`Pn532Error::AcknowledgeMismatch`].
pub(crate) fn read_ack<T: ByteTransport>(
    transport: &mut T,
    timeout: Duration,
) -> Result<(), Pn532Error> {
    poll::wait_ready(transport, timeout)?;

    let mut received = [0u8; 7];
    transport.begin_transaction();
    received[0] = transport.exchange_byte(SELECTOR_DATA_READ);
    for slot in received[1..].iter_mut() {
        *slot = transport.exchange_byte(0x00);
    }
    transport.end_transaction();

    if is_ack(&received) {
        Ok(())
    } else {
        warn!("acknowledge mismatch: {:02X?}", received);
        Err(Pn532Error::AcknowledgeMismatch { received })
    }
}

/// Read a response frame into `response`, validating as it goes.
///
/// The frame is always consumed to its declared length, failure or not:
/// a truncated read would leave frame bytes on the bus and desynchronize
/// the next exchange. Validation failures are recorded as they are found
/// and the first one is returned once the postamble has been read.
pub(crate) fn read_response<T: ByteTransport>(
    transport: &mut T,
    response: &mut Packet,
    timeout: Duration,
) -> Result<(), Pn532Error> {
    poll::wait_ready(transport, timeout)?;
    transport.drain_rx();

    let mut failure: Option<Pn532Error> = None;
    transport.begin_transaction();

    // Start bytes, LEN, and LCS. The first byte is clocked out together
    // with the data-read selector.
    for index in 0..RESPONSE_HEADER_SIZE {
        let tx = if index == 0 { SELECTOR_DATA_READ } else { 0x00 };
        let received = transport.exchange_byte(tx);
        match index {
            0..=3 => {
                if received != RESPONSE_START[index] && failure.is_none() {
                    failure = Some(Pn532Error::ResponseStartMismatch {
                        index,
                        expected: RESPONSE_START[index],
                        actual: received,
                    });
                }
            }
            4 => response.set_len(received),
            _ => {
                if !length_checksum_ok(response.len() as u8, received) && failure.is_none() {
                    failure = Some(Pn532Error::LengthChecksumError {
                        len: response.len() as u8,
                        lcs: received,
                    });
                }
            }
        }
    }

    // Payload is drained to the declared length no matter what the header
    // checks found, so the bus is consistent for the next exchange.
    for slot in response.payload_mut().iter_mut() {
        *slot = transport.exchange_byte(0x00);
    }

    let dcs = transport.exchange_byte(0x00);
    if !checksum_ok(response.payload(), dcs) && failure.is_none() {
        failure = Some(Pn532Error::DataChecksumError {
            expected: checksum(response.payload()),
            actual: dcs,
        });
    }

    let postamble = transport.exchange_byte(0x00);
    if postamble != POSTAMBLE && failure.is_none() {
        failure = Some(Pn532Error::PostambleError { actual: postamble });
    }
    transport.end_transaction();

    match failure {
        None => {
            trace!("received {:02X?}", response.payload());
            Ok(())
        }
        Some(error) => {
            warn!("response rejected: {}", error);
            Err(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{response_frame, ReplayTransport};
    use pn532_protocol::{ACK_FRAME, RESPONSE_OVERHEAD, STATUS_READY};

    const TIMEOUT: Duration = Duration::from_millis(100);

    fn ready() -> Vec<u8> {
        vec![0x00, STATUS_READY]
    }

    #[test]
    fn test_send_command_writes_full_frame() {
        let command = Packet::from_payload(&[0xD4, 0x14, 0x01]).unwrap();
        let mut transport = ReplayTransport::new(vec![]);
        send_command(&mut transport, &command);
        assert_eq!(transport.writes().len(), 1);
        assert_eq!(transport.writes()[0], encode_command(&command));
        assert_eq!(transport.pending_rx(), 0);
    }

    #[test]
    fn test_read_ack_accepts_ack_frame() {
        let mut transport = ReplayTransport::new(vec![ready(), ACK_FRAME.to_vec()]);
        read_ack(&mut transport, TIMEOUT).unwrap();
    }

    #[test]
    fn test_read_ack_rejects_any_flipped_byte() {
        for i in 0..ACK_FRAME.len() {
            let mut corrupted = ACK_FRAME.to_vec();
            corrupted[i] ^= 0x01;
            let mut transport = ReplayTransport::new(vec![ready(), corrupted.clone()]);
            let err = read_ack(&mut transport, TIMEOUT).unwrap_err();
            match err {
                Pn532Error::AcknowledgeMismatch { received } => {
                    assert_eq!(received.to_vec(), corrupted);
                }
                other => panic!("unexpected error: {:?}", other),
            }
        }
    }

    #[test]
    fn test_read_response_decodes_valid_frame() {
        let payload = [0xD5, 0x15];
        let mut transport = ReplayTransport::new(vec![ready(), response_frame(&payload)]);
        let mut response = Packet::new();
        read_response(&mut transport, &mut response, TIMEOUT).unwrap();
        assert_eq!(response.payload(), &payload);
    }

    #[test]
    fn test_read_response_consumes_len_plus_overhead() {
        let payload: Vec<u8> = (0..37u8).collect();
        let mut transport = ReplayTransport::new(vec![ready(), response_frame(&payload)]);
        let mut response = Packet::new();
        read_response(&mut transport, &mut response, TIMEOUT).unwrap();
        // Transaction 0 is the status poll; transaction 1 the data read.
        assert_eq!(
            transport.transaction_exchanges()[1],
            payload.len() + RESPONSE_OVERHEAD
        );
    }

    #[test]
    fn test_read_response_corrupt_lcs_still_drains_frame() {
        let payload = [0xD5, 0x4B, 0x00];
        let mut frame = response_frame(&payload);
        frame[5] ^= 0xFF; // corrupt the LCS
        let mut transport = ReplayTransport::new(vec![ready(), frame]);
        let mut response = Packet::new();
        let err = read_response(&mut transport, &mut response, TIMEOUT).unwrap_err();
        assert!(matches!(err, Pn532Error::LengthChecksumError { .. }));
        // The full declared payload was consumed regardless.
        assert_eq!(
            transport.transaction_exchanges()[1],
            payload.len() + RESPONSE_OVERHEAD
        );
    }

    #[test]
    fn test_read_response_corrupt_dcs() {
        let payload = [0xD5, 0x15];
        let mut frame = response_frame(&payload);
        let dcs_at = frame.len() - 2;
        frame[dcs_at] = frame[dcs_at].wrapping_add(1);
        let mut transport = ReplayTransport::new(vec![ready(), frame]);
        let mut response = Packet::new();
        let err = read_response(&mut transport, &mut response, TIMEOUT).unwrap_err();
        assert!(matches!(err, Pn532Error::DataChecksumError { .. }));
    }

    #[test]
    fn test_read_response_bad_postamble() {
        let payload = [0xD5, 0x15];
        let mut frame = response_frame(&payload);
        let last = frame.len() - 1;
        frame[last] = 0xAA;
        let mut transport = ReplayTransport::new(vec![ready(), frame]);
        let mut response = Packet::new();
        let err = read_response(&mut transport, &mut response, TIMEOUT).unwrap_err();
        assert_eq!(err, Pn532Error::PostambleError { actual: 0xAA });
    }

    #[test]
    fn test_read_response_bad_start_reports_first_failure() {
        let payload = [0xD5, 0x15];
        let mut frame = response_frame(&payload);
        frame[1] = 0x55; // preamble position
        let mut transport = ReplayTransport::new(vec![ready(), frame]);
        let mut response = Packet::new();
        let err = read_response(&mut transport, &mut response, TIMEOUT).unwrap_err();
        assert_eq!(
            err,
            Pn532Error::ResponseStartMismatch {
                index: 1,
                expected: 0x00,
                actual: 0x55,
            }
        );
    }
}
