//! EVO Result Library
//!
//! A shared outcome vocabulary for fallible operations across the EVO
//! workspace, plus guard macros for checking conditions and bailing out.
//!
//! # Module Structure
//!
//! - [`outcome`] - The [`Outcome`] code set and its description lookup
//! - [`error`] - Failure-only [`OutcomeError`] and the [`OutcomeResult`] alias
//! - [`classify`] - Mapping of errno / `std::io::Error` into the vocabulary
//! - [`diagnostic`] - The hook invoked by every guard before it bails out
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Guards
//!
//! | Macro | On false condition |
//! |-------|--------------------|
//! | [`err_break!`] | `break` out of a labeled block |
//! | [`err_ret!`] | `return` the given value |
//! | [`err_ret_void!`] | `return` from a `()` function |
//! | [`err_ret_outcome!`] | `return` the failed [`Outcome`] unchanged |
//! | [`ensure!`] | `return Err(kind.into())` |
//!
//! # Usage
//!
//! ```rust
//! use evo_result::prelude::*;
//!
//! fn read_register(bus_ready: bool, addr: u8) -> Outcome {
//!     err_ret!(addr < 0x80, Outcome::ArgumentInvalid);
//!     err_ret!(bus_ready, Outcome::HardwareBusy);
//!     Outcome::Ok
//! }
//!
//! fn configure(bus_ready: bool) -> Outcome {
//!     err_ret_outcome!(read_register(bus_ready, 0x10));
//!     Outcome::Ok
//! }
//!
//! assert_eq!(configure(true), Outcome::Ok);
//! # if !evo_result::diagnostic::ENABLED {
//! assert_eq!(configure(false), Outcome::HardwareBusy);
//! # }
//! assert_eq!(evo_result::describe(4), Some("Hardware is busy"));
//! assert_eq!(evo_result::describe(Outcome::COUNT as u32), None);
//! ```
//!
//! # Feature Flags
//!
//! | Flag     | Effect |
//! |----------|--------|
//! | `assert` | Failing guards panic in builds with `debug_assertions` |
//!
//! Failing-path assertions in the examples are skipped when the trap is
//! compiled in (see [`diagnostic::ENABLED`]).

pub mod classify;
pub mod diagnostic;
pub mod error;
#[macro_use]
mod macros;
pub mod outcome;
pub mod prelude;

pub use error::{InvalidOutcome, OutcomeError, OutcomeResult};
pub use outcome::{Outcome, describe};
