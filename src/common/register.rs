// src/common/register.rs

//! LSM6DS3 register map.
//!
//! Addresses and bit-field values come from the LSM6DS3 / LSM6DS3TR-C register
//! tables. The driver treats the field values as opaque bytes; only the identifier
//! values and the FIFO status bits are interpreted.

/// Register addresses used by the driver.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reg {
    /// FIFO threshold, low byte.
    FifoCtrl1 = 0x06,
    /// FIFO threshold high bits, pedometer/timestamp batching.
    FifoCtrl2 = 0x07,
    /// Accelerometer and gyroscope FIFO decimation.
    FifoCtrl3 = 0x08,
    /// Third/fourth data set decimation, high-byte-only mode.
    FifoCtrl4 = 0x09,
    /// FIFO mode and FIFO output data rate.
    FifoCtrl5 = 0x0A,
    /// Events routed to the INT1 pin.
    Int1Ctrl = 0x0D,
    /// Events routed to the INT2 pin.
    Int2Ctrl = 0x0E,
    /// Device identification, read only.
    WhoAmI = 0x0F,
    /// Accelerometer output data rate, full scale and anti-aliasing bandwidth.
    Ctrl1Xl = 0x10,
    /// Gyroscope output data rate and full scale.
    Ctrl2G = 0x11,
    /// Unread word count, low byte.
    FifoStatus1 = 0x3A,
    /// Watermark, overrun, full and empty flags plus the unread word count high bits.
    FifoStatus2 = 0x3B,
    /// Pattern of the next word to be read, low byte.
    FifoStatus3 = 0x3C,
    /// Pattern, high bits.
    FifoStatus4 = 0x3D,
    /// FIFO data output, low byte.
    FifoDataOutL = 0x3E,
    /// FIFO data output, high byte.
    FifoDataOutH = 0x3F,
}

impl Reg {
    #[inline]
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

impl From<Reg> for u8 {
    fn from(r: Reg) -> u8 {
        r as u8
    }
}

// --- Identification ---

/// WHO_AM_I value of the original LSM6DS3.
pub const WHO_AM_I_LSM6DS3: u8 = 0x69;
/// WHO_AM_I value of the LSM6DS3TR-C revision.
pub const WHO_AM_I_LSM6DS3TR_C: u8 = 0x6A;

/// Hardware revisions accepted as this device.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceId {
    Lsm6ds3,
    Lsm6ds3TrC,
}

impl DeviceId {
    /// Maps a WHO_AM_I byte to a known revision.
    pub const fn from_who_am_i(value: u8) -> Option<Self> {
        match value {
            WHO_AM_I_LSM6DS3 => Some(DeviceId::Lsm6ds3),
            WHO_AM_I_LSM6DS3TR_C => Some(DeviceId::Lsm6ds3TrC),
            _ => None,
        }
    }

    pub const fn who_am_i(self) -> u8 {
        match self {
            DeviceId::Lsm6ds3 => WHO_AM_I_LSM6DS3,
            DeviceId::Lsm6ds3TrC => WHO_AM_I_LSM6DS3TR_C,
        }
    }
}

// --- CTRL1_XL ---

/// Accelerometer anti-aliasing filter bandwidth (BW_XL, bits 1:0).
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelBandwidth {
    #[default]
    Hz400 = 0x00,
    Hz200 = 0x01,
    Hz100 = 0x02,
    Hz50 = 0x03,
}

/// Accelerometer full scale (FS_XL, bits 3:2).
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelFullScale {
    #[default]
    G2 = 0x00,
    G16 = 0x04,
    G4 = 0x08,
    G8 = 0x0C,
}

/// Accelerometer output data rate (ODR_XL, bits 7:4).
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelOdr {
    #[default]
    PowerDown = 0x00,
    Hz13 = 0x10,
    Hz26 = 0x20,
    Hz52 = 0x30,
    Hz104 = 0x40,
    Hz208 = 0x50,
    Hz416 = 0x60,
    Hz833 = 0x70,
    Hz1660 = 0x80,
    Hz3330 = 0x90,
    Hz6660 = 0xA0,
}

// --- CTRL2_G ---

/// Gyroscope full scale (FS_G, bits 3:2).
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroFullScale {
    #[default]
    Dps245 = 0x00,
    Dps500 = 0x04,
    Dps1000 = 0x08,
    Dps2000 = 0x0C,
}

/// Gyroscope output data rate (ODR_G, bits 7:4).
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroOdr {
    #[default]
    PowerDown = 0x00,
    Hz13 = 0x10,
    Hz26 = 0x20,
    Hz52 = 0x30,
    Hz104 = 0x40,
    Hz208 = 0x50,
    Hz416 = 0x60,
    Hz833 = 0x70,
    Hz1660 = 0x80,
}

// --- INT1_CTRL / INT2_CTRL ---

pub const INT1_DRDY_XL: u8 = 0x01;
pub const INT1_DRDY_G: u8 = 0x02;
pub const INT1_BOOT: u8 = 0x04;
pub const INT1_FIFO_THRESHOLD: u8 = 0x08;
/// FIFO overrun routed to INT1.
pub const INT1_FIFO_OVERRUN: u8 = 0x10;
pub const INT1_FIFO_FULL: u8 = 0x20;
pub const INT1_SIGN_MOT: u8 = 0x40;
pub const INT1_STEP_DETECTOR: u8 = 0x80;

// --- FIFO_CTRL3 ---

/// FIFO decimation of a data set (DEC_FIFO_XL bits 2:0, DEC_FIFO_GYRO bits 5:3).
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FifoDecimation {
    #[default]
    NotInFifo = 0x00,
    NoDecimation = 0x01,
    By2 = 0x02,
    By3 = 0x03,
    By4 = 0x04,
    By8 = 0x05,
    By16 = 0x06,
    By32 = 0x07,
}

// --- FIFO_CTRL5 ---

/// FIFO operating mode (FIFO_MODE, bits 2:0).
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FifoMode {
    #[default]
    Bypass = 0x00,
    Fifo = 0x01,
    Stream = 0x02,
    StreamToFifo = 0x03,
    BypassToStream = 0x04,
    DynamicStream = 0x05,
    DynamicStream2 = 0x06,
    BypassToFifo = 0x07,
}

/// FIFO output data rate (ODR_FIFO, bits 6:3).
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FifoOdr {
    #[default]
    Disabled = 0x00,
    Hz10 = 0x08,
    Hz25 = 0x10,
    Hz50 = 0x18,
    Hz100 = 0x20,
    Hz200 = 0x28,
    Hz400 = 0x30,
    Hz800 = 0x38,
    Hz1600 = 0x40,
    Hz3300 = 0x48,
    Hz6600 = 0x50,
}

// --- FIFO_STATUS1..2 as one little-endian word ---

/// Unread words, 12 bits.
pub const FIFO_STATUS_DIFF_MASK: u16 = 0x0FFF;
pub const FIFO_STATUS_EMPTY: u16 = 0x1000;
pub const FIFO_STATUS_FULL: u16 = 0x2000;
pub const FIFO_STATUS_OVERRUN: u16 = 0x4000;
pub const FIFO_STATUS_WATERMARK: u16 = 0x8000;

/// Pattern of the next word, 10 bits of FIFO_STATUS3..4.
pub const FIFO_PATTERN_MASK: u16 = 0x03FF;
