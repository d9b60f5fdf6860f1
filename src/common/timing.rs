// src/common/timing.rs

use core::time::Duration;

/// Settling time after the sensor supply is switched on, before WHO_AM_I is read.
pub const POWER_ON_SETTLE: Duration = Duration::from_millis(10);
