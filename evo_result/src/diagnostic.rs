//! Hook invoked by every guard macro right before it bails out.
//!
//! The hook always emits a `TRACE` event on target `evo_result::guard`
//! carrying the failed condition and the caller's source location. With
//! the `assert` feature in a build with `debug_assertions`, it then panics,
//! so the first failing guard stops the program at the fault site.

use std::panic::Location;

use tracing::{error, trace};

/// True when failing guards trap (the `assert` feature in a debug build).
pub const ENABLED: bool = cfg!(all(feature = "assert", debug_assertions));

/// Report a failed guard condition.
///
/// Called from the guard macros; `condition` is the stringified guard
/// expression.
#[cold]
#[inline(never)]
#[track_caller]
pub fn guard_failed(condition: &'static str) {
    let location = Location::caller();

    if ENABLED {
        error!(
            target: "evo_result::guard",
            condition,
            %location,
            "guard failed, trapping"
        );
        panic!("guard `{condition}` failed at {location}");
    }

    trace!(target: "evo_result::guard", condition, %location, "guard failed");
}
