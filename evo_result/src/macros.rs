//! Guard macros.
//!
//! Each guard evaluates its condition once. On `false` it calls
//! [`diagnostic::guard_failed`](crate::diagnostic::guard_failed) and then
//! leaves the current scope; on `true` it does nothing.

/// Break out of a labeled block if a condition is false.
///
/// The structured replacement for a cleanup `goto`: the label names an
/// enclosing block, optionally yielding a value from it.
///
/// ```
/// use evo_result::{err_break, Outcome};
///
/// fn probe(present: bool) -> Outcome {
///     let outcome = 'probe: {
///         err_break!(present, 'probe, Outcome::HardwareNoDevice);
///         Outcome::Ok
///     };
///     // cleanup runs on both paths
///     outcome
/// }
///
/// assert_eq!(probe(true), Outcome::Ok);
/// # if !evo_result::diagnostic::ENABLED {
/// assert_eq!(probe(false), Outcome::HardwareNoDevice);
/// # }
/// ```
#[macro_export]
macro_rules! err_break {
    ($cond:expr, $label:lifetime $(,)?) => {
        if !$cond {
            $crate::diagnostic::guard_failed(::core::stringify!($cond));
            break $label;
        }
    };
    ($cond:expr, $label:lifetime, $value:expr $(,)?) => {
        if !$cond {
            $crate::diagnostic::guard_failed(::core::stringify!($cond));
            break $label $value;
        }
    };
}

/// Return a value from the enclosing function if a condition is false.
///
/// ```
/// use evo_result::{err_ret, Outcome};
///
/// fn set_speed(rpm: u32) -> Outcome {
///     err_ret!(rpm <= 6000, Outcome::ArgumentInvalid);
///     Outcome::Ok
/// }
///
/// assert_eq!(set_speed(1500), Outcome::Ok);
/// # if !evo_result::diagnostic::ENABLED {
/// assert_eq!(set_speed(9000), Outcome::ArgumentInvalid);
/// # }
/// ```
#[macro_export]
macro_rules! err_ret {
    ($cond:expr, $value:expr $(,)?) => {
        if !$cond {
            $crate::diagnostic::guard_failed(::core::stringify!($cond));
            return $value;
        }
    };
}

/// Return from a `()` function if a condition is false.
#[macro_export]
macro_rules! err_ret_void {
    ($cond:expr $(,)?) => {
        if !$cond {
            $crate::diagnostic::guard_failed(::core::stringify!($cond));
            return;
        }
    };
}

/// Return a failed [`Outcome`](crate::Outcome) unchanged.
///
/// The expression may be anything convertible into `Outcome`, including an
/// `OutcomeResult<()>`. The enclosing function must return `Outcome`.
///
/// ```
/// use evo_result::{err_ret_outcome, Outcome};
///
/// fn reset() -> Outcome { Outcome::HardwareBusy }
///
/// fn init() -> Outcome {
///     err_ret_outcome!(reset());
///     Outcome::Ok
/// }
///
/// # if !evo_result::diagnostic::ENABLED {
/// assert_eq!(init(), Outcome::HardwareBusy);
/// # }
/// ```
#[macro_export]
macro_rules! err_ret_outcome {
    ($outcome:expr $(,)?) => {{
        let outcome: $crate::Outcome = ::core::convert::Into::into($outcome);
        if outcome.is_err() {
            $crate::diagnostic::guard_failed(::core::stringify!($outcome));
            return outcome;
        }
    }};
}

/// Return `Err(kind.into())` if a condition is false.
///
/// For functions returning a `Result` whose error type converts from
/// `kind`, typically [`OutcomeResult`](crate::OutcomeResult).
///
/// ```
/// use evo_result::{ensure, OutcomeError, OutcomeResult};
///
/// fn claim(busy: bool) -> OutcomeResult<()> {
///     ensure!(!busy, OutcomeError::HardwareBusy);
///     Ok(())
/// }
///
/// assert_eq!(claim(false), Ok(()));
/// # if !evo_result::diagnostic::ENABLED {
/// assert_eq!(claim(true), Err(OutcomeError::HardwareBusy));
/// # }
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr $(,)?) => {
        if !$cond {
            $crate::diagnostic::guard_failed(::core::stringify!($cond));
            return ::core::result::Result::Err(::core::convert::From::from($err));
        }
    };
}


#[cfg(all(test, feature = "assert", debug_assertions))]
mod trap_tests {
    use crate::{Outcome, OutcomeError, OutcomeResult};
    use std::cell::Cell;
    use std::panic::{self, AssertUnwindSafe};

    /// Run `f`, returning the panic message if it trapped.
    fn trap_message(f: impl FnOnce()) -> Option<String> {
        let payload = panic::catch_unwind(AssertUnwindSafe(f)).err()?;
        payload
            .downcast_ref::<String>()
            .cloned()
            .or_else(|| payload.downcast_ref::<&str>().map(|s| s.to_string()))
    }

    #[test]
    fn test_true_condition_never_traps() {
        let reached = Cell::new(0);
        let msg = trap_message(|| {
            let ret = || -> Outcome {
                err_ret!(true, Outcome::Other);
                err_ret_outcome!(Outcome::Ok);
                Outcome::Ok
            };
            let void = || {
                err_ret_void!(1 < 2);
            };
            let res = || -> OutcomeResult<()> {
                ensure!(true, OutcomeError::Other);
                Ok(())
            };
            assert_eq!(ret(), Outcome::Ok);
            void();
            assert_eq!(res(), Ok(()));
            'block: {
                err_break!(true, 'block);
                reached.set(reached.get() + 1);
            }
        });
        assert_eq!(msg, None);
        assert_eq!(reached.get(), 1);
    }

    #[test]
    fn test_err_ret_traps_before_return() {
        let reached = Cell::new(false);
        let msg = trap_message(|| {
            let check = || -> u8 {
                err_ret!(reached.get(), 7);
                reached.set(true);
                0
            };
            check();
        });
        assert!(msg.unwrap().contains("guard `reached.get()` failed"));
        assert!(!reached.get());
    }

    #[test]
    fn test_err_ret_void_traps_before_return() {
        let writes = Cell::new(0);
        let msg = trap_message(|| {
            let write = || {
                err_ret_void!(writes.get() > 0);
                writes.set(writes.get() + 1);
            };
            write();
        });
        assert!(msg.unwrap().contains("guard `writes.get() > 0` failed"));
        assert_eq!(writes.get(), 0);
    }

    #[test]
    fn test_err_break_traps_before_jump() {
        let after_guard = Cell::new(false);
        let after_block = Cell::new(false);
        let msg = trap_message(|| {
            'cleanup: {
                err_break!(after_guard.get(), 'cleanup);
                after_guard.set(true);
            }
            after_block.set(true);
        });
        assert!(msg.unwrap().contains("guard `after_guard.get()` failed"));
        assert!(!after_guard.get());
        assert!(!after_block.get());
    }

    #[test]
    fn test_err_ret_outcome_traps_before_return() {
        let reached = Cell::new(false);
        let msg = trap_message(|| {
            let init = || -> Outcome {
                err_ret_outcome!(Outcome::HardwareBusy);
                reached.set(true);
                Outcome::Ok
            };
            init();
        });
        assert!(msg.unwrap().contains("guard `Outcome::HardwareBusy` failed"));
        assert!(!reached.get());
    }

    #[test]
    fn test_ensure_traps_before_return() {
        let reached = Cell::new(false);
        let msg = trap_message(|| {
            let claim = || -> OutcomeResult<()> {
                ensure!(reached.get(), OutcomeError::HardwareBusy);
                reached.set(true);
                Ok(())
            };
            let _ = claim();
        });
        assert!(msg.unwrap().contains("guard `reached.get()` failed"));
        assert!(!reached.get());
    }
}
