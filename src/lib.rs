//! # pokedex
//!
//! pokedex is an in-memory catalog library modelled on the classic Pokedex:
//! an ordered, doubly-linked collection of immutable Pokemon records with a
//! selection cursor, per-entry found/not-found visibility, evolution links
//! between entries, and derived sub-catalogs built by filtering or searching.
//!
//! ## Features
//! - Ordered chain with cursor navigation, duplicate-id rejection, and
//!   removal with relinking
//! - Found-state tracking with O(1) aggregate counters
//! - Type listing and a progressive-discovery exploration traversal over the
//!   closed 19-tag type universe
//! - Evolution links with bounded chain traversal (caller-made cycles
//!   terminate and are flagged)
//! - Derived catalogs of deep-cloned found entries: by type, by found state,
//!   and by case-insensitive name search
//!
//! Nodes live in an owned generational arena, so chain and evolution links
//! are stable handles instead of pointers: a link to a removed entry simply
//! stops resolving.
//!
//! ## Invariant checking
//! Mutating operations recheck the chain's redundant bookkeeping in debug
//! builds; enable the `check-invariants` feature to keep the checks in
//! release builds. See [`DebugInvariants`].
//!
//! ## Usage
//! ```rust
//! use pokedex::prelude::*;
//!
//! let mut dex = Pokedex::new();
//! dex.add(Pokemon::new(
//!     PokemonId::new(25),
//!     "Pikachu",
//!     0.4,
//!     6.0,
//!     PokemonType::Electric,
//!     PokemonType::None,
//! )?)?;
//! dex.find_current();
//! assert_eq!(dex.found_count(), 1);
//!
//! let electric = dex.of_type(PokemonType::Electric);
//! assert_eq!(electric.total_count(), 1);
//! # Ok::<(), pokedex::error::PokedexError>(())
//! ```

pub mod debug_invariants;
pub mod dex;
pub mod error;
pub mod matcher;
pub mod pokemon;
pub mod render;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::dex::{
        DexEntry, EvolutionChain, EvolutionStep, FoundStatus, Pokedex, RevealedPokemon,
    };
    pub use crate::error::PokedexError;
    pub use crate::matcher::contains_ignore_ascii_case;
    pub use crate::pokemon::types::{PokemonType, TypeSet};
    pub use crate::pokemon::{Pokemon, PokemonId};
}
