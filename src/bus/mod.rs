// src/bus/mod.rs

//! Addressed register transactions over a two-wire bus.

mod transaction;

#[cfg(feature = "impl-native")]
pub mod native;

#[cfg(feature = "impl-native")]
pub use native::HalWire;

use crate::common::{address::I2cAddr, hal_traits::TwoWire};

/// A two-wire transport bound to one device address.
///
/// Owns the transport for its whole lifetime. Pass `&mut wire` instead of `wire`
/// to keep ownership outside; any other driver on the same physical bus must then
/// be serialized against this one by the caller, per whole transaction.
#[derive(Debug)]
pub struct RegisterBus<W>
where
    W: TwoWire,
{
    wire: W,
    address: I2cAddr,
}

impl<W> RegisterBus<W>
where
    W: TwoWire,
{
    pub fn new(wire: W, address: I2cAddr) -> Self {
        RegisterBus { wire, address }
    }

    #[inline]
    pub fn address(&self) -> I2cAddr {
        self.address
    }

    /// Direct access to the transport.
    pub fn wire(&mut self) -> &mut W {
        &mut self.wire
    }

    /// Gives the transport back.
    pub fn release(self) -> W {
        self.wire
    }
}
