// src/common/hal_traits.rs

use core::convert::Infallible;
use core::fmt::Debug;

/// Abstraction for a byte-oriented two-wire (I2C) controller.
///
/// The primitives mirror a buffered "Wire"-style bus driver: a write transmission is
/// opened, filled byte by byte and closed; a read is requested and then drained from
/// a receive buffer. Counts are reported back so the caller can detect partial
/// transfers at every step.
///
/// Only one owner per bus instance. Sharing a physical bus between drivers needs
/// an external lock held across a whole register transaction.
pub trait TwoWire {
    /// Associated error type for transport failures.
    type Error: Debug;

    /// Opens a write transmission to the 7-bit `address`.
    fn begin_transmission(&mut self, address: u8);

    /// Queues one byte. Returns the number of bytes accepted (0 or 1).
    fn write(&mut self, byte: u8) -> usize;

    /// Queues a block. Returns the number of bytes accepted.
    fn write_all(&mut self, data: &[u8]) -> usize;

    /// Closes the transmission.
    ///
    /// With `send_stop == false` the bus is held (repeated-start) so a read can follow
    /// without another full addressing phase.
    fn end_transmission(&mut self, send_stop: bool) -> Result<(), Self::Error>;

    /// Drops a transmission that must not complete.
    ///
    /// The default closes it, which is all a plain Wire-style driver can do.
    /// Buffered implementations should discard the queued bytes instead.
    fn abort_transmission(&mut self) {
        let _ = self.end_transmission(true);
    }

    /// Requests `len` bytes from `address`. Returns the number of bytes granted.
    fn request_from(&mut self, address: u8, len: usize) -> Result<usize, Self::Error>;

    /// Number of received bytes waiting to be read.
    fn available(&mut self) -> usize;

    /// Takes one received byte.
    ///
    /// Returns `Err(nb::Error::WouldBlock)` if the receive buffer is empty.
    fn read(&mut self) -> nb::Result<u8, Self::Error>;
}

impl<T: TwoWire + ?Sized> TwoWire for &mut T {
    type Error = T::Error;

    #[inline]
    fn begin_transmission(&mut self, address: u8) {
        T::begin_transmission(self, address)
    }

    #[inline]
    fn write(&mut self, byte: u8) -> usize {
        T::write(self, byte)
    }

    #[inline]
    fn write_all(&mut self, data: &[u8]) -> usize {
        T::write_all(self, data)
    }

    #[inline]
    fn end_transmission(&mut self, send_stop: bool) -> Result<(), Self::Error> {
        T::end_transmission(self, send_stop)
    }

    #[inline]
    fn abort_transmission(&mut self) {
        T::abort_transmission(self)
    }

    #[inline]
    fn request_from(&mut self, address: u8, len: usize) -> Result<usize, Self::Error> {
        T::request_from(self, address, len)
    }

    #[inline]
    fn available(&mut self) -> usize {
        T::available(self)
    }

    #[inline]
    fn read(&mut self) -> nb::Result<u8, Self::Error> {
        T::read(self)
    }
}

/// Stand-in for a board without a switchable sensor supply.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoPowerPin;

impl embedded_hal::digital::ErrorType for NoPowerPin {
    type Error = Infallible;
}

impl embedded_hal::digital::OutputPin for NoPowerPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
