//! Outcome codes and description lookup.
//!
//! [`Outcome`] is the closed set of results a fallible operation reports.
//! Exactly one value, [`Outcome::Ok`], means success. The terminal marker
//! [`Outcome::COUNT`] bounds the code space and is never a valid outcome.
//!
//! Descriptions live in one static table indexed by the numeric code.
//! [`describe`] is the entry point for raw integers that bypassed the type
//! system; anything at or past `COUNT` yields `None`.

use core::fmt;

use serde::{Deserialize, Serialize};
use static_assertions::const_assert_eq;

use crate::error::{InvalidOutcome, OutcomeError, OutcomeResult};

/// Result code of a fallible operation.
///
/// Discriminants are stable and form the wire/ABI representation.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(u32)]
pub enum Outcome {
    /// The operation was successful.
    #[default]
    Ok = 0,
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

/// Description text, indexed by outcome code.
static DESCRIPTIONS: [&str; Outcome::COUNT] = [
    "Operation successful",
    "Provided argument is invalid",
    "Not enough memory to perform the operation",
    "Hardware device failed to appear",
    "Hardware is busy",
    "Hardware transmission error",
    "Undefined error",
];

// The table and the terminal marker must track the last variant.
const_assert_eq!(Outcome::Other as usize + 1, Outcome::COUNT);
const_assert_eq!(core::mem::size_of::<Outcome>(), 4);

impl Outcome {
    /// Number of outcome kinds. Reserved terminal marker for bounds checks.
    pub const COUNT: usize = 7;

    /// Every outcome kind in code order.
    pub const ALL: [Outcome; Outcome::COUNT] = [
        Outcome::Ok,
        Outcome::ArgumentInvalid,
        Outcome::MemoryNotEnough,
        Outcome::HardwareNoDevice,
        Outcome::HardwareBusy,
        Outcome::HardwareIo,
        Outcome::Other,
    ];

    /// Decode a raw code. Returns `None` for `COUNT` and above, which
    /// includes negative C codes cast with `as u32`.
    #[inline]
    pub fn from_raw(raw: u32) -> Option<Self> {
        usize::try_from(raw)
            .ok()
            .and_then(|idx| Self::ALL.get(idx))
            .copied()
    }

    /// Numeric code of this outcome.
    #[inline]
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Returns true for the success sentinel.
    #[inline]
    pub const fn is_ok(self) -> bool {
        matches!(self, Outcome::Ok)
    }

    /// Returns true for every failure kind.
    #[inline]
    pub const fn is_err(self) -> bool {
        !self.is_ok()
    }

    /// Human-readable description of this outcome.
    #[inline]
    pub fn description(self) -> &'static str {
        DESCRIPTIONS[self as usize]
    }

    /// Stable snake_case identifier, matching the serde representation.
    pub const fn name(self) -> &'static str {
        match self {
            Outcome::Ok => "ok",
            Outcome::ArgumentInvalid => "argument_invalid",
            Outcome::MemoryNotEnough => "memory_not_enough",
            Outcome::HardwareNoDevice => "hardware_no_device",
            Outcome::HardwareBusy => "hardware_busy",
            Outcome::HardwareIo => "hardware_io",
            Outcome::Other => "other",
        }
    }

    /// Convert into a Rust `Result` so callers can propagate with `?`.
    #[inline]
    pub fn into_result(self) -> OutcomeResult<()> {
        match OutcomeError::try_from(self) {
            Ok(err) => Err(err),
            Err(_) => Ok(()),
        }
    }
}

/// Description lookup for a raw outcome code.
///
/// Returns `None` for the terminal marker and any larger value. Negative
/// C `int` codes cast with `as u32` wrap to at least `2^31`, so they are
/// rejected the same way.
#[inline]
pub fn describe(raw: u32) -> Option<&'static str> {
    usize::try_from(raw)
        .ok()
        .and_then(|idx| DESCRIPTIONS.get(idx))
        .copied()
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl From<Outcome> for u32 {
    fn from(outcome: Outcome) -> u32 {
        outcome.code()
    }
}

impl TryFrom<u32> for Outcome {
    type Error = InvalidOutcome;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Outcome::from_raw(raw).ok_or(InvalidOutcome { raw })
    }
}

impl From<OutcomeResult<()>> for Outcome {
    fn from(result: OutcomeResult<()>) -> Self {
        match result {
            Ok(()) => Outcome::Ok,
            Err(err) => err.into(),
        }
    }
}
