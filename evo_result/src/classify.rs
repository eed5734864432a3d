//! Classification of platform failures into [`OutcomeError`].
//!
//! Drivers talking to devices through syscalls get errno values or
//! `std::io::Error`s back; these conversions fold them into the outcome
//! vocabulary. Anything without a better match becomes `Other`.

use std::io;

use crate::error::OutcomeError;

impl OutcomeError {
    /// Classify a POSIX errno value.
    pub fn from_errno(errno: i32) -> Self {
        match errno {
            libc::EINVAL | libc::EDOM | libc::ERANGE | libc::EFAULT => {
                OutcomeError::ArgumentInvalid
            }
            libc::ENOMEM | libc::ENOSPC | libc::ENOBUFS => OutcomeError::MemoryNotEnough,
            libc::ENODEV | libc::ENXIO | libc::ENOENT => OutcomeError::HardwareNoDevice,
            libc::EBUSY | libc::EAGAIN => OutcomeError::HardwareBusy,
            libc::EIO | libc::EPIPE | libc::ETIMEDOUT => OutcomeError::HardwareIo,
            _ => OutcomeError::Other,
        }
    }
}

/// Maps `io::ErrorKind` for errors that carry no raw OS code.
fn io_error_kind(kind: io::ErrorKind) -> OutcomeError {
    match kind {
        io::ErrorKind::InvalidInput | io::ErrorKind::InvalidData => OutcomeError::ArgumentInvalid,
        io::ErrorKind::OutOfMemory => OutcomeError::MemoryNotEnough,
        io::ErrorKind::NotFound => OutcomeError::HardwareNoDevice,
        io::ErrorKind::WouldBlock => OutcomeError::HardwareBusy,
        io::ErrorKind::BrokenPipe
        | io::ErrorKind::TimedOut
        | io::ErrorKind::UnexpectedEof
        | io::ErrorKind::Interrupted => OutcomeError::HardwareIo,
        _ => OutcomeError::Other,
    }
}

impl From<io::Error> for OutcomeError {
    /// Prefers the raw OS errno when present, falling back to the kind.
    fn from(err: io::Error) -> Self {
        match err.raw_os_error() {
            Some(errno) => OutcomeError::from_errno(errno),
            None => io_error_kind(err.kind()),
        }
    }
}
