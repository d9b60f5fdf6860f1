// src/common/config.rs

//! Operating profile written by the driver.
//!
//! Each structure renders to the exact register block written in one transaction.
//! `Default` everywhere reproduces the profile the driver has always applied:
//! accelerometer at 6.66 kHz, ±8 g, 400 Hz anti-aliasing; gyroscope powered down;
//! FIFO overrun on INT1; accelerometer-only FIFO, decimated by 3, dynamic stream
//! mode at 6.6 kHz.

use super::address::I2cAddr;
use super::register::{
    AccelBandwidth, AccelFullScale, AccelOdr, FifoDecimation, FifoMode, FifoOdr, GyroFullScale,
    GyroOdr, INT1_FIFO_OVERRUN,
};
use super::timing;
use core::time::Duration;

/// CTRL1_XL contents.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelConfig {
    pub odr: AccelOdr,
    pub full_scale: AccelFullScale,
    pub bandwidth: AccelBandwidth,
}

impl Default for AccelConfig {
    fn default() -> Self {
        Self {
            odr: AccelOdr::Hz6660,
            full_scale: AccelFullScale::G8,
            bandwidth: AccelBandwidth::Hz400,
        }
    }
}

impl AccelConfig {
    pub const fn to_byte(&self) -> u8 {
        self.odr as u8 | self.full_scale as u8 | self.bandwidth as u8
    }
}

/// CTRL2_G contents.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroConfig {
    pub odr: GyroOdr,
    pub full_scale: GyroFullScale,
}

impl GyroConfig {
    pub const fn to_byte(&self) -> u8 {
        self.odr as u8 | self.full_scale as u8
    }
}

/// CTRL1_XL..CTRL2_G block.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorConfig {
    pub accel: AccelConfig,
    pub gyro: GyroConfig,
}

impl SensorConfig {
    pub const fn to_bytes(&self) -> [u8; 2] {
        [self.accel.to_byte(), self.gyro.to_byte()]
    }
}

/// INT1_CTRL..INT2_CTRL block, as raw routing masks.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptRouting {
    pub int1: u8,
    pub int2: u8,
}

impl Default for InterruptRouting {
    fn default() -> Self {
        Self {
            int1: INT1_FIFO_OVERRUN,
            int2: 0,
        }
    }
}

impl InterruptRouting {
    pub const fn to_bytes(&self) -> [u8; 2] {
        [self.int1, self.int2]
    }
}

/// FIFO_CTRL1..FIFO_CTRL5 block.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FifoConfig {
    /// Watermark in words, 12 bits.
    pub threshold: u16,
    pub accel_decimation: FifoDecimation,
    pub gyro_decimation: FifoDecimation,
    pub mode: FifoMode,
    pub odr: FifoOdr,
}

impl Default for FifoConfig {
    fn default() -> Self {
        Self {
            threshold: 0,
            accel_decimation: FifoDecimation::By3,
            gyro_decimation: FifoDecimation::NotInFifo,
            mode: FifoMode::DynamicStream2,
            odr: FifoOdr::Hz6600,
        }
    }
}

impl FifoConfig {
    pub const fn to_bytes(&self) -> [u8; 5] {
        let [th_l, th_h] = self.threshold.to_le_bytes();
        [
            th_l,
            th_h & 0x0F,
            (self.gyro_decimation as u8) << 3 | self.accel_decimation as u8,
            0,
            self.odr as u8 | self.mode as u8,
        ]
    }
}

/// Everything the controller needs besides its peripherals.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    pub address: I2cAddr,
    pub sensor: SensorConfig,
    pub interrupts: InterruptRouting,
    pub fifo: FifoConfig,
    /// Wait after switching the supply on, before the first transaction.
    pub power_on_delay: Duration,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            address: I2cAddr::default(),
            sensor: SensorConfig::default(),
            interrupts: InterruptRouting::default(),
            fifo: FifoConfig::default(),
            power_on_delay: timing::POWER_ON_SETTLE,
        }
    }
}

impl DriverConfig {
    pub fn with_address(mut self, address: I2cAddr) -> Self {
        self.address = address;
        self
    }

    pub fn with_fifo(mut self, fifo: FifoConfig) -> Self {
        self.fifo = fifo;
        self
    }
}
