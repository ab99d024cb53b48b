//! `Pokemon`: the immutable catalog entry, and `PokemonId`, its handle.
//!
//! A `Pokemon` is a validated value object: once constructed its fields
//! never change. The Pokedex chain stores exactly one owner per entry;
//! derived catalogs work on independent clones.

pub mod types;

use crate::error::PokedexError;
use serde::{Deserialize, Serialize};
use std::fmt;
use types::PokemonType;

/// Numeric Pokemon identity, unique within a single Pokedex.
///
/// # Memory layout
/// `repr(transparent)` over `u32`, so the handle costs nothing over the
/// raw number it wraps.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[repr(transparent)]
pub struct PokemonId(u32);

impl PokemonId {
    /// Wraps a raw id value.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        PokemonId(raw)
    }

    /// Returns the raw id value.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for PokemonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PokemonId").field(&self.0).finish()
    }
}

impl fmt::Display for PokemonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PokemonId {
    fn from(raw: u32) -> Self {
        PokemonId(raw)
    }
}

/// An immutable Pokemon record.
///
/// Construction validates every field (see [`Pokemon::new`]); after
/// that the record only exposes accessors. `Clone` yields a fully
/// independent copy with identical field values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    id: PokemonId,
    name: String,
    height: f64,
    weight: f64,
    type1: PokemonType,
    type2: PokemonType,
}

impl Pokemon {
    /// Creates a validated Pokemon record.
    ///
    /// # Errors
    /// - [`PokedexError::InvalidName`] if `name` contains anything but
    ///   ASCII letters, spaces, and hyphens.
    /// - [`PokedexError::NonPositiveMeasure`] if `height` or `weight`
    ///   is not a positive finite number.
    /// - [`PokedexError::PrimaryTypeNone`] if `type1` is `None`.
    /// - [`PokedexError::DuplicateType`] if `type1 == type2`.
    pub fn new(
        id: PokemonId,
        name: &str,
        height: f64,
        weight: f64,
        type1: PokemonType,
        type2: PokemonType,
    ) -> Result<Self, PokedexError> {
        if !valid_name(name) {
            return Err(PokedexError::InvalidName(name.to_string()));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(PokedexError::NonPositiveMeasure {
                field: "height",
                value: height,
            });
        }
        if !(weight.is_finite() && weight > 0.0) {
            return Err(PokedexError::NonPositiveMeasure {
                field: "weight",
                value: weight,
            });
        }
        if !type1.is_concrete() {
            return Err(PokedexError::PrimaryTypeNone);
        }
        if type1 == type2 {
            return Err(PokedexError::DuplicateType(type1));
        }
        Ok(Pokemon {
            id,
            name: name.to_string(),
            height,
            weight,
            type1,
            type2,
        })
    }

    /// The unique id of this Pokemon.
    #[inline]
    pub fn id(&self) -> PokemonId {
        self.id
    }

    /// The name of this Pokemon.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Height in metres.
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Weight in kilograms.
    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// The first type tag; never `None`.
    #[inline]
    pub fn first_type(&self) -> PokemonType {
        self.type1
    }

    /// The second type tag; `None` for mono-type Pokemon.
    #[inline]
    pub fn second_type(&self) -> PokemonType {
        self.type2
    }

    /// Whether either type tag equals `ty`.
    pub fn has_type(&self, ty: PokemonType) -> bool {
        self.type1 == ty || self.type2 == ty
    }
}

/// Whether `name` consists only of ASCII letters, spaces, and hyphens.
pub fn valid_name(name: &str) -> bool {
    name.chars()
        .all(|c| c.is_ascii_alphabetic() || c == ' ' || c == '-')
}
