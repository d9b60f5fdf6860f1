// src/common/error.rs

use core::fmt;

/// Protocol step of a register transaction at which a bus failure was observed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransferPhase {
    /// Writing the 1-byte register address after opening the transmission.
    Address,
    /// Writing the data block of a register write.
    Payload,
    /// Closing the transmission (stop or repeated-start).
    Release,
    /// Asking the device for the bytes of a register read.
    Request,
}

impl fmt::Display for TransferPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransferPhase::Address => "address",
            TransferPhase::Payload => "payload",
            TransferPhase::Release => "release",
            TransferPhase::Request => "request",
        };
        f.write_str(name)
    }
}

/// Driver errors.
///
/// Every variant collapses to exactly one [`StatusCode`] through [`ImuError::status`],
/// which is the flat view callers of the register-level API traditionally check.
#[derive(Debug, thiserror::Error)]
pub enum ImuError<E = ()>
where
    E: fmt::Debug,
{
    /// The transport accepted or granted a different byte count than requested.
    #[error("bus error during {phase} phase")]
    Bus { phase: TransferPhase },

    /// The transport itself reported a failure.
    #[error("transport error during {phase} phase: {error:?}")]
    Transport { phase: TransferPhase, error: E },

    /// The identification register returned an unknown device id.
    #[error("unsupported device id: {0:#04x}")]
    Unsupported(u8),

    /// The device granted the request but supplied fewer bytes than asked for.
    #[error("incomplete transfer: expected {expected} bytes, received {received}")]
    IncompleteTransfer { expected: usize, received: usize },

    /// Empty buffer, empty payload, or an out-of-range address.
    #[error("invalid argument")]
    InvalidArgument,

    /// A bounded operation ran out of iterations.
    #[error("out of bounds")]
    OutOfBounds,

    /// A read returned only set bits.
    #[error("all ones read back")]
    AllOnes,

    #[error("generic error")]
    Generic,
}

impl<E: fmt::Debug> ImuError<E> {
    /// Flat status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ImuError::Bus { .. } | ImuError::Transport { .. } => StatusCode::BusError,
            ImuError::Unsupported(_) => StatusCode::Unsupported,
            ImuError::IncompleteTransfer { .. } => StatusCode::IncompleteTransfer,
            ImuError::InvalidArgument => StatusCode::InvalidArgument,
            ImuError::OutOfBounds => StatusCode::OutOfBounds,
            ImuError::AllOnes => StatusCode::AllOnesWarning,
            ImuError::Generic => StatusCode::GenericError,
        }
    }

    /// Protocol phase of a bus-level failure, if this is one.
    pub fn phase(&self) -> Option<TransferPhase> {
        match self {
            ImuError::Bus { phase } | ImuError::Transport { phase, .. } => Some(*phase),
            _ => None,
        }
    }
}

/// Closed set of operation outcomes.
/// Discriminants are stable, `Success` is zero.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusCode {
    Success = 0,
    BusError = 1,
    Unsupported = 2,
    GenericError = 3,
    OutOfBounds = 4,
    AllOnesWarning = 5,
    InvalidArgument = 6,
    IncompleteTransfer = 7,
}

impl StatusCode {
    /// Collapses any driver result to its status code.
    pub fn of<T, E: fmt::Debug>(result: &Result<T, ImuError<E>>) -> Self {
        match result {
            Ok(_) => StatusCode::Success,
            Err(e) => e.status(),
        }
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, StatusCode::Success)
    }
}

impl<E: fmt::Debug> From<&ImuError<E>> for StatusCode {
    fn from(e: &ImuError<E>) -> Self {
        e.status()
    }
}
