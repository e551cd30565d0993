//! Command/response packet buffer.

use crate::constants::MAX_PAYLOAD_SIZE;
use crate::error::ProtocolError;

/// An owned frame payload: a fixed-capacity buffer plus a length.
///
/// A `Packet` is filled by the caller before a command is sent, and
/// overwritten in place when used to receive a response. The length can
/// never exceed the buffer capacity: it is a `u8` and the buffer holds
/// [`MAX_PAYLOAD_SIZE`] bytes.
#[derive(Clone)]
pub struct Packet {
    data: [u8; MAX_PAYLOAD_SIZE],
    len: u8,
}

impl Packet {
    /// Create an empty packet, ready to receive a response.
    pub fn new() -> Self {
        Packet {
            data: [0; MAX_PAYLOAD_SIZE],
            len: 0,
        }
    }

    /// Create a packet holding a command payload.
    ///
    /// The payload must be 1 to [`MAX_PAYLOAD_SIZE`] bytes long; commands
    /// always carry at least the direction byte.
    pub fn from_payload(payload: &[u8]) -> Result<Self, ProtocolError> {
        if payload.is_empty() {
            return Err(ProtocolError::PayloadEmpty);
        }
        if payload.len() > MAX_PAYLOAD_SIZE {
            return Err(ProtocolError::PayloadTooLarge {
                max: MAX_PAYLOAD_SIZE,
                actual: payload.len(),
            });
        }
        let mut packet = Packet::new();
        packet.data[..payload.len()].copy_from_slice(payload);
        packet.len = payload.len() as u8;
        Ok(packet)
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Whether the packet carries no payload.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The payload bytes.
    pub fn payload(&self) -> &[u8] {
        &self.data[..self.len as usize]
    }

    /// Set the payload length, as read from an incoming frame's LEN byte.
    /// Bytes beyond the previous length are whatever the buffer last held
    /// until overwritten through [`payload_mut`](Self::payload_mut).
    pub fn set_len(&mut self, len: u8) {
        self.len = len;
    }

    /// Mutable access to the payload region, for in-place receive.
    pub fn payload_mut(&mut self) -> &mut [u8] {
        &mut self.data[..self.len as usize]
    }
}

impl Default for Packet {
    fn default() -> Self {
        Packet::new()
    }
}

impl PartialEq for Packet {
    fn eq(&self, other: &Self) -> bool {
        self.payload() == other.payload()
    }
}

impl Eq for Packet {}

impl std::fmt::Debug for Packet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Packet(len={}, [", self.len)?;
        for (i, byte) in self.payload().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:02X}", byte)?;
        }
        write!(f, "])")
    }
}
