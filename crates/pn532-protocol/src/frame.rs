//! Information-frame encoding.
//!
//! An outgoing command frame is laid out as:
//!
//! | Field     | Size (bytes) | Description                                  |
//! |-----------|--------------|----------------------------------------------|
//! | selector  | 1            | `0x01`, the data-write transfer selector.    |
//! | preamble  | 1            | `0x00`.                                      |
//! | start     | 2            | `0x00 0xFF` start-of-packet code.            |
//! | LEN       | 1            | Payload length.                              |
//! | LCS       | 1            | Length checksum, `0 - LEN (mod 256)`.        |
//! | payload   | LEN          | Command data, starting with `0xD4`.          |
//! | DCS       | 1            | Data checksum, `0 - sum(payload) (mod 256)`. |
//! | postamble | 1            | `0x00`.                                      |

use bytes::BufMut;

use crate::checksum::{checksum, length_checksum};
use crate::constants::*;
use crate::packet::Packet;

/// Encode a command packet into its full wire image.
///
/// The result is transmitted byte-for-byte inside a single transaction;
/// success at this layer is assumed and any transport failure is the
/// transport's to surface.
pub fn encode_command(packet: &Packet) -> Vec<u8> {
    let len = packet.len() as u8;
    let mut buf = Vec::with_capacity(COMMAND_HEADER_SIZE + packet.len() + 2);
    buf.put_u8(SELECTOR_DATA_WRITE);
    buf.put_u8(PREAMBLE);
    buf.put_u8(START_CODE_1);
    buf.put_u8(START_CODE_2);
    buf.put_u8(len);
    buf.put_u8(length_checksum(len));
    buf.put_slice(packet.payload());
    buf.put_u8(checksum(packet.payload()));
    buf.put_u8(POSTAMBLE);
    buf
}

/// Whether a 7-byte read matches the acknowledge frame exactly.
///
/// Any single differing byte, a NACK frame as much as line garbage, fails
/// the match; there is no partial-match tolerance.
pub fn is_ack(received: &[u8; 7]) -> bool {
    *received == ACK_FRAME
}
