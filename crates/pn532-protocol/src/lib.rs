//! PN532 Host-Interface Framing
//!
//! This crate provides the wire-level types and utilities for talking to a
//! PN532-family contactless-card controller over its synchronous serial
//! host interface. It covers the information-frame format, the length and
//! data checksums, and the fixed acknowledge frame: everything that can be
//! computed without touching a transport.
//!
//! # Protocol Overview
//!
//! Every host command is wrapped in an information frame:
//!
//! ```text
//! +------+------+------+------+-----+-----+-------------+-----+------+
//! | 0x01 | 0x00 | 0x00 | 0xFF | LEN | LCS | payload...  | DCS | 0x00 |
//! +------+------+------+------+-----+-----+-------------+-----+------+
//! ```
//!
//! where `LCS` is the two's complement of `LEN` and `DCS` is the two's
//! complement of the byte sum of the payload. The leading `0x01` is the
//! data-write selector of the synchronous link; payloads themselves start
//! with the `0xD4` host-to-controller direction byte.
//!
//! After receiving a frame the controller answers with a fixed 7-byte
//! acknowledge, then (once ready) with an information frame of its own.
//! The transport-facing half of the exchange lives in the `pn532-driver`
//! crate; this crate stays pure.
//!
//! # Example
//!
//! ```rust
//! use pn532_protocol::{checksum, encode_command, Packet};
//!
//! let command = Packet::from_payload(&[0xD4, 0x14, 0x01]).unwrap();
//! let frame = encode_command(&command);
//!
//! assert_eq!(frame[4], 3); // LEN
//! assert_eq!(frame[frame.len() - 2], checksum(command.payload()));
//! ```

mod checksum;
mod constants;
mod error;
mod frame;
mod packet;

pub use checksum::*;
pub use constants::*;
pub use error::*;
pub use frame::*;
pub use packet::*;
