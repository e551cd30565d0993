//! Protocol error types.

use thiserror::Error;

/// Errors that can occur when constructing wire structures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// A command payload must carry at least the direction byte.
    #[error("command payload is empty")]
    PayloadEmpty,

    /// Payload does not fit in an information frame.
    #[error("payload too large: maximum {max} bytes, got {actual}")]
    PayloadTooLarge {
        /// Maximum allowed length.
        max: usize,
        /// Actual length supplied.
        actual: usize,
    },
}
