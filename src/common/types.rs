// src/common/types.rs

use super::register::{
    FIFO_PATTERN_MASK, FIFO_STATUS_DIFF_MASK, FIFO_STATUS_EMPTY, FIFO_STATUS_FULL,
    FIFO_STATUS_OVERRUN, FIFO_STATUS_WATERMARK,
};

// --- FIFO entry ---

/// One FIFO entry: three raw signed 16-bit axis words, no scaling applied.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl RawSample {
    /// Size of one entry on the bus.
    pub const SIZE: usize = 6;

    /// Decodes the bytes of FIFO_DATA_OUT_L/H read three times in a row.
    pub fn from_le_bytes(bytes: [u8; Self::SIZE]) -> Self {
        Self {
            x: i16::from_le_bytes([bytes[0], bytes[1]]),
            y: i16::from_le_bytes([bytes[2], bytes[3]]),
            z: i16::from_le_bytes([bytes[4], bytes[5]]),
        }
    }

    pub fn to_le_bytes(self) -> [u8; Self::SIZE] {
        let [x0, x1] = self.x.to_le_bytes();
        let [y0, y1] = self.y.to_le_bytes();
        let [z0, z1] = self.z.to_le_bytes();
        [x0, x1, y0, y1, z0, z1]
    }
}

// --- FIFO status word ---

/// FIFO_STATUS1 (low byte) and FIFO_STATUS2 (high byte) as read in one transaction.
///
/// Only the empty flag drives driver behavior; the remaining accessors are for callers.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FifoStatus(u16);

impl FifoStatus {
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub const fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_le_bytes(bytes))
    }

    #[inline]
    pub const fn bits(&self) -> u16 {
        self.0
    }

    /// No unread data.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 & FIFO_STATUS_EMPTY != 0
    }

    #[inline]
    pub const fn is_full(&self) -> bool {
        self.0 & FIFO_STATUS_FULL != 0
    }

    /// At least one sample was overwritten before being read.
    #[inline]
    pub const fn is_overrun(&self) -> bool {
        self.0 & FIFO_STATUS_OVERRUN != 0
    }

    #[inline]
    pub const fn is_watermark(&self) -> bool {
        self.0 & FIFO_STATUS_WATERMARK != 0
    }

    /// Number of unread 16-bit words.
    #[inline]
    pub const fn unread_words(&self) -> u16 {
        self.0 & FIFO_STATUS_DIFF_MASK
    }
}

impl From<FifoStatus> for u16 {
    fn from(s: FifoStatus) -> u16 {
        s.0
    }
}

/// Index of the next word in the FIFO pattern, from FIFO_STATUS3..4.
#[inline]
pub const fn pattern_index(pattern: u16) -> u16 {
    pattern & FIFO_PATTERN_MASK
}
