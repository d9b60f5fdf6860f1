// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod address;
pub mod config;
pub mod error;
pub mod hal_traits;
pub mod register;
pub mod timing;
pub mod types;

// --- Re-export key types/traits for easier access ---

// From address.rs
pub use address::I2cAddr;

// From config.rs
pub use config::{AccelConfig, DriverConfig, FifoConfig, GyroConfig, InterruptRouting, SensorConfig};

// From error.rs
pub use error::{ImuError, StatusCode, TransferPhase};

// From hal_traits.rs
pub use hal_traits::{NoPowerPin, TwoWire};

// From register.rs (constants stay under common::register::*)
pub use register::{DeviceId, Reg};

// From types.rs
pub use types::{FifoStatus, RawSample};
