//! Opt-in structural invariant checking.
//!
//! The Pokedex maintains several redundant pieces of bookkeeping (the
//! doubly-linked chain, its counters, the cursor). `DebugInvariants`
//! lets mutating operations cross-check them after the fact: free in
//! release builds, a full recount in debug builds or when the
//! `check-invariants` / `strict-invariants` features are enabled.

use crate::error::PokedexError;

/// Validation hooks for structures with redundant internal state.
pub trait DebugInvariants {
    /// Assert invariants when invariant checking is compiled in; no-op
    /// otherwise.
    fn debug_assert_invariants(&self);

    /// Recheck every invariant and return the first violation found as
    /// [`PokedexError::CorruptChain`].
    fn validate_invariants(&self) -> Result<(), PokedexError>;
}

/// Runs a fallible invariant check and panics with context on failure,
/// but only when invariant checking is compiled in.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
