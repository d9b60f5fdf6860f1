// src/common/address.rs

use super::error::ImuError;
use core::convert::TryFrom;
use core::fmt;

/// 7-bit I2C address of the sensor.
///
/// The LSM6DS3 answers on `0x6A` with SA0 tied low and on `0x6B` with SA0 tied high.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cAddr(u8);

impl I2cAddr {
    /// SA0 low.
    pub const PRIMARY: I2cAddr = I2cAddr(0x6A);
    /// SA0 high.
    pub const SECONDARY: I2cAddr = I2cAddr(0x6B);

    /// Creates a new `I2cAddr` if `address` fits in 7 bits.
    ///
    /// Returns `Result<Self, ImuError<()>>` because validation itself
    /// cannot cause a bus error.
    pub fn new(address: u8) -> Result<Self, ImuError<()>> {
        if Self::is_valid(address) {
            Ok(I2cAddr(address))
        } else {
            Err(ImuError::InvalidArgument)
        }
    }

    #[inline]
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_valid(address: u8) -> bool {
        address <= 0x7F
    }
}

impl Default for I2cAddr {
    fn default() -> Self {
        Self::PRIMARY
    }
}

impl TryFrom<u8> for I2cAddr {
    type Error = ImuError<()>;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<I2cAddr> for u8 {
    fn from(addr: I2cAddr) -> u8 {
        addr.0
    }
}

impl fmt::Display for I2cAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}
