//! `PokeNode`: the chain wrapper around one owned [`Pokemon`].

use super::arena::NodeId;
use crate::pokemon::Pokemon;
use serde::{Deserialize, Serialize};

/// Whether an entry's details have been revealed to the caller.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoundStatus {
    #[default]
    NotFound,
    Found,
}

impl FoundStatus {
    #[inline]
    pub fn is_found(self) -> bool {
        matches!(self, FoundStatus::Found)
    }
}

/// One link in the Pokedex chain.
///
/// `prev`/`next` are the doubly-linked ordering; `evolve` is the single
/// outgoing evolution link. All three are arena handles, so a link to a
/// removed node simply stops resolving.
#[derive(Clone, Debug)]
pub(crate) struct PokeNode {
    pub pokemon: Pokemon,
    pub prev: Option<NodeId>,
    pub next: Option<NodeId>,
    pub evolve: Option<NodeId>,
    pub status: FoundStatus,
}

impl PokeNode {
    /// Wraps `pokemon` in an unlinked, not-yet-found node.
    pub fn new(pokemon: Pokemon) -> Self {
        PokeNode {
            pokemon,
            prev: None,
            next: None,
            evolve: None,
            status: FoundStatus::NotFound,
        }
    }
}
