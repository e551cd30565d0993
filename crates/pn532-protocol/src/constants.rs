//! Protocol constants
//!
//! These constants define the transfer selectors, frame delimiters, command
//! codes, and size limits used on the PN532 host interface.

// ============================================================================
// Transfer Selectors (first byte clocked in every host transaction)
// ============================================================================

/// Host is writing a frame to the controller.
pub const SELECTOR_DATA_WRITE: u8 = 0x01;
/// Host is reading the controller's status byte.
pub const SELECTOR_STATUS_READ: u8 = 0x02;
/// Host is reading frame data from the controller.
pub const SELECTOR_DATA_READ: u8 = 0x03;

// ============================================================================
// Frame Delimiters
// ============================================================================

/// Preamble byte preceding the start code.
pub const PREAMBLE: u8 = 0x00;
/// First start-of-packet byte.
pub const START_CODE_1: u8 = 0x00;
/// Second start-of-packet byte.
pub const START_CODE_2: u8 = 0xFF;
/// Postamble byte closing every frame.
pub const POSTAMBLE: u8 = 0x00;

// ============================================================================
// Direction Prefixes (first payload byte)
// ============================================================================

/// Payload travels host → controller.
pub const HOST_TO_PN532: u8 = 0xD4;
/// Payload travels controller → host.
pub const PN532_TO_HOST: u8 = 0xD5;

// ============================================================================
// Command Codes
// ============================================================================

/// SAMConfiguration: select the secure-access-module operating mode.
pub const CMD_SAM_CONFIGURATION: u8 = 0x14;
/// InListPassiveTarget: enumerate passive targets in the RF field.
pub const CMD_IN_LIST_PASSIVE_TARGET: u8 = 0x4A;

// ============================================================================
// Status
// ============================================================================

/// Status byte reported while the controller has data to shift out.
pub const STATUS_READY: u8 = 0x01;

// ============================================================================
// Fixed Frames
// ============================================================================

/// The acknowledge frame as read back over the synchronous link.
pub const ACK_FRAME: [u8; 7] = [0x01, 0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// Expected first four bytes of a response frame. The leading `0x01` is the
/// ready marker the controller clocks out while the host sends the data-read
/// selector.
pub const RESPONSE_START: [u8; 4] = [0x01, 0x00, 0x00, 0xFF];

// ============================================================================
// Sizes
// ============================================================================

/// Maximum payload length of an information frame.
pub const MAX_PAYLOAD_SIZE: usize = 255;
/// Header bytes of an outgoing frame: selector, preamble, start code, LEN, LCS.
pub const COMMAND_HEADER_SIZE: usize = 6;
/// Bytes a response frame occupies beyond its payload: 4 start bytes, LEN,
/// LCS, DCS, and the postamble.
pub const RESPONSE_OVERHEAD: usize = 8;
