//! PN532 Contactless Reader Driver
//!
//! This crate drives a PN532-family contactless-card controller over an
//! abstract byte transport and reports the identifier of a passive tag in
//! the RF field. The wire-level framing itself lives in `pn532-protocol`;
//! this crate owns everything that needs the bus: the ready-signal polling
//! handshake, the acknowledge handshake, response decoding, and the
//! two-command tag-scan workflow.
//!
//! # Exchange Sequence
//!
//! One command/response exchange runs strictly top-down:
//!
//! 1. encode and transmit the command frame;
//! 2. wait for the ready line (the controller has produced an acknowledge);
//! 3. read and validate the 7-byte acknowledge;
//! 4. wait for the ready line again (the response is ready);
//! 5. read and validate the response frame.
//!
//! Every wait is bounded by the configured timeout; a controller that never
//! reports ready yields [`Pn532Error::TransportTimeout`] instead of hanging
//! the caller. The first validation failure of a step aborts the exchange
//! and propagates out as a typed error.
//!
//! # Example
//!
//! ```rust,ignore
//! use pn532_driver::Pn532;
//!
//! let mut reader = Pn532::new(transport);
//! reader.initialize();
//! match reader.scan_for_card()? {
//!     0 => println!("no card present"),
//!     id => println!("card {:08X}", id),
//! }
//! ```
//!
//! The transport is exclusively owned for the duration of an exchange;
//! `&mut self` on every operation is what guarantees at most one exchange
//! in flight.

mod commands;
mod device;
mod error;
mod exchange;
mod poll;
pub mod testing;
mod transport;

pub use commands::*;
pub use device::*;
pub use error::*;
pub use transport::*;
