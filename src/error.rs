//! PokedexError: unified error type for pokedex public APIs
//!
//! Every fallible operation in this crate reports failures through this
//! enum rather than terminating the process, so callers can decide
//! whether to abort or retry with corrected input.

use crate::pokemon::types::PokemonType;
use crate::pokemon::PokemonId;
use thiserror::Error;

/// Unified error type for pokedex operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PokedexError {
    /// Insertion would duplicate an id already present in the target Pokedex.
    #[error("there is already a Pokemon with id {0} in this Pokedex")]
    DuplicateId(PokemonId),
    /// Evolution linking referenced an id not present in the Pokedex.
    #[error("evolution link refers to unknown Pokemon id {0}")]
    UnknownEvolutionId(PokemonId),
    /// Evolution linking attempted from an id to itself.
    #[error("a Pokemon cannot evolve into itself (id {0})")]
    SelfEvolution(PokemonId),
    /// Evolution queried on an empty Pokedex.
    #[error("the Pokedex is empty")]
    EmptyPokedex,
    /// Name contains a character outside letters, spaces, and hyphens.
    #[error("invalid Pokemon name `{0}`: only letters, spaces, and hyphens are allowed")]
    InvalidName(String),
    /// Height or weight was not a positive finite value.
    #[error("Pokemon {field} must be a positive finite value, got {value}")]
    NonPositiveMeasure { field: &'static str, value: f64 },
    /// First type tag was `None`.
    #[error("Pokemon first type must not be None")]
    PrimaryTypeNone,
    /// First and second type tags were equal.
    #[error("Pokemon types must differ, got {0} twice")]
    DuplicateType(PokemonType),
    /// A type name did not match any known Pokemon type.
    #[error("unknown Pokemon type `{0}`")]
    UnknownType(String),
    /// Internal chain bookkeeping is inconsistent (invariant checking only).
    #[error("Pokedex chain corruption: {0}")]
    CorruptChain(String),
}
