//! Prelude module for common re-exports.
//!
//! ```rust
//! use evo_result::prelude::*;
//! ```

// ─── Vocabulary ─────────────────────────────────────────────────────
pub use crate::error::{OutcomeError, OutcomeResult};
pub use crate::outcome::{Outcome, describe};

// ─── Guards ─────────────────────────────────────────────────────────
pub use crate::{ensure, err_break, err_ret, err_ret_outcome, err_ret_void};
