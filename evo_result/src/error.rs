//! Failure-only view of the outcome vocabulary.
//!
//! In contrast to [`Outcome`] this does not feature a success case, which
//! makes it the natural error type for `Result`-returning code. Every
//! variant keeps the numeric code of its `Outcome` counterpart.

use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::outcome::Outcome;

/// Failure kinds of [`Outcome`], without the success sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u32)]
pub enum OutcomeError {
    /// A supplied argument failed validation.
    ArgumentInvalid = 1,
    /// Not enough memory (or other resource) to perform the operation.
    MemoryNotEnough = 2,
    /// The hardware failed to appear.
    HardwareNoDevice = 3,
    /// The hardware was busy.
    HardwareBusy = 4,
    /// A transmission error at the hardware boundary.
    HardwareIo = 5,
    /// Unclassified failure.
    Other = 6,
}

/// Result type for operations reporting an [`OutcomeError`].
pub type OutcomeResult<T> = Result<T, OutcomeError>;

/// A raw code outside the outcome range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid outcome code: {raw} (valid codes are 0..{count})", count = Outcome::COUNT)]
pub struct InvalidOutcome {
    /// The rejected code.
    pub raw: u32,
}

impl OutcomeError {
    /// Numeric code, identical to the matching [`Outcome`].
    #[inline]
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Human-readable description, identical to the matching [`Outcome`].
    #[inline]
    pub fn description(self) -> &'static str {
        Outcome::from(self).description()
    }
}

impl fmt::Display for OutcomeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl std::error::Error for OutcomeError {}

impl From<OutcomeError> for Outcome {
    fn from(err: OutcomeError) -> Outcome {
        match err {
            OutcomeError::ArgumentInvalid => Outcome::ArgumentInvalid,
            OutcomeError::MemoryNotEnough => Outcome::MemoryNotEnough,
            OutcomeError::HardwareNoDevice => Outcome::HardwareNoDevice,
            OutcomeError::HardwareBusy => Outcome::HardwareBusy,
            OutcomeError::HardwareIo => Outcome::HardwareIo,
            OutcomeError::Other => Outcome::Other,
        }
    }
}

impl TryFrom<Outcome> for OutcomeError {
    type Error = ();

    fn try_from(outcome: Outcome) -> Result<Self, Self::Error> {
        match outcome {
            Outcome::Ok => Err(()),
            Outcome::ArgumentInvalid => Ok(OutcomeError::ArgumentInvalid),
            Outcome::MemoryNotEnough => Ok(OutcomeError::MemoryNotEnough),
            Outcome::HardwareNoDevice => Ok(OutcomeError::HardwareNoDevice),
            Outcome::HardwareBusy => Ok(OutcomeError::HardwareBusy),
            Outcome::HardwareIo => Ok(OutcomeError::HardwareIo),
            Outcome::Other => Ok(OutcomeError::Other),
        }
    }
}

impl From<OutcomeError> for u32 {
    fn from(err: OutcomeError) -> u32 {
        err.code()
    }
}
