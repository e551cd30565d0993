//! Driver error types.

use std::time::Duration;

use thiserror::Error;

use pn532_protocol::ProtocolError;

/// Errors that can occur during a command/response exchange.
///
/// Each frame-level validation has its own variant so callers can tell a
/// communication failure from an empty RF field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Pn532Error {
    /// The 7-byte acknowledge read did not match the acknowledge frame.
    /// Covers NACK frames and line garbage alike.
    #[error("acknowledge mismatch: received {received:02X?}")]
    AcknowledgeMismatch {
        /// The bytes actually read.
        received: [u8; 7],
    },

    /// A fixed byte of the response start sequence was wrong.
    #[error("response start mismatch at byte {index}: expected 0x{expected:02X}, got 0x{actual:02X}")]
    ResponseStartMismatch {
        /// Position within the 4-byte start sequence.
        index: usize,
        /// The byte the protocol requires at that position.
        expected: u8,
        /// The byte actually read.
        actual: u8,
    },

    /// The length checksum did not cancel the length byte.
    #[error("length checksum error: LEN 0x{len:02X} with LCS 0x{lcs:02X}")]
    LengthChecksumError {
        /// Declared payload length.
        len: u8,
        /// Received length checksum.
        lcs: u8,
    },

    /// The data checksum did not cancel the payload sum.
    #[error("data checksum error: expected 0x{expected:02X}, got 0x{actual:02X}")]
    DataChecksumError {
        /// Checksum computed over the received payload.
        expected: u8,
        /// Checksum byte actually read.
        actual: u8,
    },

    /// The frame did not close with the `0x00` postamble.
    #[error("postamble error: got 0x{actual:02X}")]
    PostambleError {
        /// The byte read where the postamble belongs.
        actual: u8,
    },

    /// The controller never reported ready within the configured timeout.
    #[error("timed out after {waited:?} waiting for the controller to report ready")]
    TransportTimeout {
        /// How long the driver polled before giving up.
        waited: Duration,
    },

    /// A wire structure could not be built.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

/// Result type alias for driver operations.
pub type Pn532Result<T> = Result<T, Pn532Error>;
