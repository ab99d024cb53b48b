//! The closed Pokemon type universe and the bounded scratch set over it.
//!
//! `PokemonType` enumerates the 18 concrete type tags plus `None` (the
//! absent second type). `TypeSet` is a fixed-capacity, insertion-ordered
//! set over that universe, used transiently by type-listing and
//! exploration traversals.

use crate::error::PokedexError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One tag from the closed Pokemon type universe.
///
/// `None` marks an absent second type; it is never a valid first type
/// and is never recorded by [`TypeSet`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PokemonType {
    None,
    Normal,
    Fire,
    Fighting,
    Water,
    Flying,
    Grass,
    Poison,
    Electric,
    Ground,
    Psychic,
    Rock,
    Ice,
    Bug,
    Dragon,
    Ghost,
    Dark,
    Steel,
    Fairy,
}

impl PokemonType {
    /// Number of tags in the universe, including `None`.
    pub const COUNT: usize = 19;

    /// Every tag in declaration order, `None` first.
    pub const ALL: [PokemonType; Self::COUNT] = [
        PokemonType::None,
        PokemonType::Normal,
        PokemonType::Fire,
        PokemonType::Fighting,
        PokemonType::Water,
        PokemonType::Flying,
        PokemonType::Grass,
        PokemonType::Poison,
        PokemonType::Electric,
        PokemonType::Ground,
        PokemonType::Psychic,
        PokemonType::Rock,
        PokemonType::Ice,
        PokemonType::Bug,
        PokemonType::Dragon,
        PokemonType::Ghost,
        PokemonType::Dark,
        PokemonType::Steel,
        PokemonType::Fairy,
    ];

    /// Display name of this tag, e.g. `"Water"`.
    pub const fn name(self) -> &'static str {
        match self {
            PokemonType::None => "None",
            PokemonType::Normal => "Normal",
            PokemonType::Fire => "Fire",
            PokemonType::Fighting => "Fighting",
            PokemonType::Water => "Water",
            PokemonType::Flying => "Flying",
            PokemonType::Grass => "Grass",
            PokemonType::Poison => "Poison",
            PokemonType::Electric => "Electric",
            PokemonType::Ground => "Ground",
            PokemonType::Psychic => "Psychic",
            PokemonType::Rock => "Rock",
            PokemonType::Ice => "Ice",
            PokemonType::Bug => "Bug",
            PokemonType::Dragon => "Dragon",
            PokemonType::Ghost => "Ghost",
            PokemonType::Dark => "Dark",
            PokemonType::Steel => "Steel",
            PokemonType::Fairy => "Fairy",
        }
    }

    /// Case-insensitive lookup by display name.
    ///
    /// Returns `None` for names outside the universe; `"none"` resolves
    /// to [`PokemonType::None`].
    pub fn from_name(name: &str) -> Option<PokemonType> {
        Self::ALL
            .iter()
            .copied()
            .find(|ty| ty.name().eq_ignore_ascii_case(name))
    }

    /// Whether this is a concrete tag (anything but `None`).
    #[inline]
    pub const fn is_concrete(self) -> bool {
        !matches!(self, PokemonType::None)
    }
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PokemonType {
    type Err = PokedexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| PokedexError::UnknownType(s.to_string()))
    }
}

/// Fixed-capacity, insertion-ordered set of concrete type tags.
///
/// Capacity is the size of the type universe, so insertion never
/// overflows. `None` tags are rejected by [`TypeSet::insert`] and the
/// set reports tags in first-encounter order, which is what the
/// type-listing and exploration traversals need.
///
/// This is transient scratch state: callers clear it before and after
/// each traversal rather than relying on it persisting.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeSet {
    slots: [Option<PokemonType>; PokemonType::COUNT],
    len: usize,
}

impl TypeSet {
    /// Creates an empty set.
    pub const fn new() -> Self {
        Self {
            slots: [None; PokemonType::COUNT],
            len: 0,
        }
    }

    /// Records `ty` if it is concrete and not yet present.
    ///
    /// Returns `true` iff the tag was newly recorded by this call.
    pub fn insert(&mut self, ty: PokemonType) -> bool {
        if !ty.is_concrete() || self.contains(ty) {
            return false;
        }
        self.slots[self.len] = Some(ty);
        self.len += 1;
        true
    }

    /// Whether `ty` has been recorded.
    pub fn contains(&self, ty: PokemonType) -> bool {
        self.slots[..self.len].iter().any(|slot| *slot == Some(ty))
    }

    /// Recorded tags in first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = PokemonType> + '_ {
        self.slots[..self.len].iter().flatten().copied()
    }

    /// Number of recorded tags.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no tag has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Forgets every recorded tag.
    pub fn clear(&mut self) {
        self.slots = [None; PokemonType::COUNT];
        self.len = 0;
    }
}
