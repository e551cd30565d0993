//! The byte-transport capability.

/// Full-duplex byte exchange with transaction framing and a ready line.
///
/// This is the only hardware surface the driver touches. Implementations
/// wrap a synchronous serial link (an SPI peripheral, a bit-banged bus, a
/// simulation) and keep peripheral clock, pin, and register programming to
/// themselves.
///
/// # Transaction contract
///
/// Every burst of [`exchange_byte`](Self::exchange_byte) calls is bracketed
/// by [`begin_transaction`](Self::begin_transaction) and
/// [`end_transaction`](Self::end_transaction), the chip-select equivalent.
/// The controller interprets the first byte of each transaction as a
/// transfer selector, so a transaction boundary is protocol-visible, not a
/// performance hint.
pub trait ByteTransport {
    /// Open a transaction (assert chip select).
    fn begin_transaction(&mut self);

    /// Close the current transaction (release chip select).
    fn end_transaction(&mut self);

    /// Shift one byte out while shifting one byte in.
    fn exchange_byte(&mut self, tx: u8) -> u8;

    /// Number of received bytes sitting unread in the transport.
    fn pending_rx(&self) -> usize;

    /// Discard all pending received bytes, returning how many were dropped.
    ///
    /// Draining must not clock anything out of the device, which is why it
    /// cannot be expressed in terms of [`exchange_byte`](Self::exchange_byte).
    fn drain_rx(&mut self) -> usize;

    /// Whether the controller's ready/IRQ line is asserted.
    fn ready_line_asserted(&self) -> bool;
}
