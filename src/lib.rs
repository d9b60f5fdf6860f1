// src/lib.rs

#![no_std] // Specify no_std at the crate root

#[cfg(any(test, feature = "std"))]
extern crate std;

// Macros first, so every module below can use them
mod logging;

pub mod bus;
pub mod common;
pub mod sensor;

#[cfg(test)]
mod mock;

// Re-export key types for convenience
pub use bus::RegisterBus;
#[cfg(feature = "impl-native")]
pub use bus::HalWire;
pub use common::{DriverConfig, I2cAddr, ImuError, StatusCode, TwoWire};
pub use common::{FifoStatus, RawSample};
pub use sensor::{Lsm6ds3, Phase};
