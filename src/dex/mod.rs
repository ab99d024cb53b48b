//! `Pokedex`: the mutable ordered catalog of Pokemon.
//!
//! The catalog is a doubly-linked chain of nodes living in an owned
//! generational arena ([`arena`]), with a head, a tail, and a single
//! selection cursor. It maintains O(1) aggregate counters (total and
//! found), a transient type scratch set for the exploration traversals,
//! and at most one successor link to the most recently derived catalog.
//!
//! Operations are grouped by concern:
//! - membership, selection, and aggregates here;
//! - type listing and exploration in [`explore`](self);
//! - evolution linking and traversal in [`evolution`](self);
//! - derived-catalog construction in [`derive`](self).

pub(crate) mod arena;
mod derive;
mod evolution;
mod explore;
pub(crate) mod node;

pub use evolution::{EvolutionChain, EvolutionStep, RevealedPokemon};
pub use node::FoundStatus;

use crate::debug_invariants::DebugInvariants;
use crate::error::PokedexError;
use crate::pokemon::types::TypeSet;
use crate::pokemon::{Pokemon, PokemonId};
use arena::{NodeArena, NodeId};
use node::PokeNode;
use std::collections::HashSet;

/// The mutable ordered Pokemon catalog.
///
/// Single-threaded and independently owned: derived catalogs share no
/// nodes with their source, so dropping either side never invalidates
/// the other.
#[derive(Clone, Debug, Default)]
pub struct Pokedex {
    nodes: NodeArena,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    current: Option<NodeId>,
    total: usize,
    found: usize,
    /// Transient scratch for type traversals; empty between operations.
    pub(crate) scratch: TypeSet,
    /// Most recently derived catalog, overwritten on each derivation.
    pub(crate) successor: Option<Box<Pokedex>>,
}

impl Pokedex {
    /// Creates an empty Pokedex.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of Pokemon, found or not. O(1).
    #[inline]
    pub fn total_count(&self) -> usize {
        self.total
    }

    /// Number of Pokemon marked found. O(1).
    #[inline]
    pub fn found_count(&self) -> usize {
        self.found
    }

    /// Whether the catalog holds no Pokemon.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Appends `pokemon` at the tail of the chain, not yet found.
    ///
    /// The first Pokemon added to an empty catalog becomes the current
    /// selection.
    ///
    /// # Errors
    /// [`PokedexError::DuplicateId`] if a Pokemon with the same id is
    /// already present; the catalog is left unchanged.
    pub fn add(&mut self, pokemon: Pokemon) -> Result<(), PokedexError> {
        if self.find_node(pokemon.id()).is_some() {
            return Err(PokedexError::DuplicateId(pokemon.id()));
        }
        self.push_back_node(pokemon, FoundStatus::NotFound);
        self.debug_assert_invariants();
        Ok(())
    }

    /// Inserts `pokemon` keeping the chain sorted by ascending id, not
    /// yet found.
    ///
    /// The alternative to [`Pokedex::add`] for callers maintaining an
    /// id-ordered chain. The first Pokemon added to an empty catalog
    /// becomes the current selection.
    ///
    /// # Errors
    /// [`PokedexError::DuplicateId`] if a Pokemon with the same id is
    /// already present; the catalog is left unchanged.
    pub fn add_sorted(&mut self, pokemon: Pokemon) -> Result<(), PokedexError> {
        if self.find_node(pokemon.id()).is_some() {
            return Err(PokedexError::DuplicateId(pokemon.id()));
        }
        self.insert_sorted_node(pokemon, FoundStatus::NotFound);
        self.debug_assert_invariants();
        Ok(())
    }

    /// The currently selected Pokemon, or `None` when empty.
    pub fn current(&self) -> Option<&Pokemon> {
        let node = self.nodes.get(self.current?)?;
        Some(&node.pokemon)
    }

    /// The id of the currently selected Pokemon, or `None` when empty.
    pub fn current_id(&self) -> Option<PokemonId> {
        self.current().map(Pokemon::id)
    }

    /// Found status of the currently selected Pokemon.
    pub fn current_status(&self) -> Option<FoundStatus> {
        let node = self.nodes.get(self.current?)?;
        Some(node.status)
    }

    /// Marks the current selection as found.
    ///
    /// Idempotent: the found counter is incremented only on the
    /// not-found to found transition. No-op on an empty catalog.
    pub fn find_current(&mut self) {
        let Some(id) = self.current else { return };
        if let Some(node) = self.nodes.get_mut(id)
            && !node.status.is_found()
        {
            node.status = FoundStatus::Found;
            self.found += 1;
        }
    }

    /// Moves the cursor one step toward the tail; no-op at the tail or
    /// on an empty catalog.
    pub fn select_next(&mut self) {
        if let Some(id) = self.current
            && let Some(node) = self.nodes.get(id)
            && let Some(next) = node.next
        {
            self.current = Some(next);
        }
    }

    /// Moves the cursor one step toward the head; no-op at the head or
    /// on an empty catalog.
    pub fn select_prev(&mut self) {
        if let Some(id) = self.current
            && let Some(node) = self.nodes.get(id)
            && let Some(prev) = node.prev
        {
            self.current = Some(prev);
        }
    }

    /// Moves the cursor to the Pokemon with id `id`.
    ///
    /// Silent no-op when no such Pokemon exists; the cursor stays put.
    pub fn select_by_id(&mut self, id: PokemonId) {
        if let Some(node_id) = self.find_node(id) {
            self.current = Some(node_id);
        }
    }

    /// Whether a Pokemon with id `id` is present.
    pub fn contains(&self, id: PokemonId) -> bool {
        self.find_node(id).is_some()
    }

    /// Removes the currently selected Pokemon, relinking its neighbors.
    ///
    /// The cursor moves to the removed node's successor, or to the new
    /// tail when the tail itself was removed. No-op on an empty catalog.
    pub fn remove_current(&mut self) {
        let Some(curr) = self.current else { return };
        let Some(removed) = self.nodes.remove(curr) else {
            return;
        };
        match (removed.prev, removed.next) {
            (None, None) => {
                // Sole node: the catalog becomes empty.
                self.head = None;
                self.tail = None;
                self.current = None;
            }
            (None, Some(next)) => {
                // Head removal: successor becomes the new head.
                if let Some(node) = self.nodes.get_mut(next) {
                    node.prev = None;
                }
                self.head = Some(next);
                self.current = Some(next);
            }
            (Some(prev), None) => {
                // Tail removal: predecessor becomes the new tail.
                if let Some(node) = self.nodes.get_mut(prev) {
                    node.next = None;
                }
                self.tail = Some(prev);
                self.current = Some(prev);
            }
            (Some(prev), Some(next)) => {
                if let Some(node) = self.nodes.get_mut(prev) {
                    node.next = Some(next);
                }
                if let Some(node) = self.nodes.get_mut(next) {
                    node.prev = Some(prev);
                }
                self.current = Some(next);
            }
        }
        self.total -= 1;
        if removed.status.is_found() {
            self.found -= 1;
        }
        self.debug_assert_invariants();
    }

    /// Chain-order iterator over the catalog's entries.
    pub fn iter(&self) -> Entries<'_> {
        Entries {
            dex: self,
            cursor: self.head,
        }
    }

    // --- internal chain plumbing -----------------------------------------

    /// Scans the chain for the node holding id `id`.
    pub(crate) fn find_node(&self, id: PokemonId) -> Option<NodeId> {
        let mut cursor = self.head;
        while let Some(node_id) = cursor {
            let node = self.nodes.get(node_id)?;
            if node.pokemon.id() == id {
                return Some(node_id);
            }
            cursor = node.next;
        }
        None
    }

    /// Appends a node at the tail, bypassing the duplicate-id scan.
    ///
    /// Callers guarantee id uniqueness (either via [`Pokedex::add`] or
    /// by cloning out of a chain whose ids are already unique).
    pub(crate) fn push_back_node(&mut self, pokemon: Pokemon, status: FoundStatus) -> NodeId {
        let mut node = PokeNode::new(pokemon);
        node.status = status;
        node.prev = self.tail;
        let id = self.nodes.insert(node);
        match self.tail {
            Some(tail) => {
                if let Some(tail_node) = self.nodes.get_mut(tail) {
                    tail_node.next = Some(id);
                }
            }
            None => {
                self.head = Some(id);
                self.current = Some(id);
            }
        }
        self.tail = Some(id);
        self.total += 1;
        if status.is_found() {
            self.found += 1;
        }
        id
    }

    /// Splices a node in front of `before`.
    fn insert_before_node(&mut self, before: NodeId, pokemon: Pokemon, status: FoundStatus) -> NodeId {
        let prev = self.nodes.get(before).and_then(|n| n.prev);
        let mut node = PokeNode::new(pokemon);
        node.status = status;
        node.prev = prev;
        node.next = Some(before);
        let id = self.nodes.insert(node);
        match prev {
            Some(prev_id) => {
                if let Some(prev_node) = self.nodes.get_mut(prev_id) {
                    prev_node.next = Some(id);
                }
            }
            None => self.head = Some(id),
        }
        if let Some(before_node) = self.nodes.get_mut(before) {
            before_node.prev = Some(id);
        }
        if self.current.is_none() {
            self.current = Some(id);
        }
        self.total += 1;
        if status.is_found() {
            self.found += 1;
        }
        id
    }

    /// Inserts a node keeping the chain sorted by ascending id.
    ///
    /// Ties cannot arise because callers guarantee id uniqueness.
    pub(crate) fn insert_sorted_node(&mut self, pokemon: Pokemon, status: FoundStatus) -> NodeId {
        let key = pokemon.id();
        let mut cursor = self.head;
        while let Some(node_id) = cursor {
            let Some(node) = self.nodes.get(node_id) else {
                break;
            };
            if node.pokemon.id() > key {
                return self.insert_before_node(node_id, pokemon, status);
            }
            cursor = node.next;
        }
        self.push_back_node(pokemon, status)
    }
}

/// One entry as seen by [`Pokedex::iter`].
#[derive(Copy, Clone, Debug)]
pub struct DexEntry<'a> {
    /// The entry itself.
    pub pokemon: &'a Pokemon,
    /// Whether the entry has been found.
    pub found: bool,
    /// Whether the cursor rests on this entry.
    pub selected: bool,
}

/// Chain-order iterator over a Pokedex.
pub struct Entries<'a> {
    dex: &'a Pokedex,
    cursor: Option<NodeId>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = DexEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let node = self.dex.nodes.get(id)?;
        self.cursor = node.next;
        Some(DexEntry {
            pokemon: &node.pokemon,
            found: node.status.is_found(),
            selected: self.dex.current == Some(id),
        })
    }
}

impl<'a> IntoIterator for &'a Pokedex {
    type Item = DexEntry<'a>;
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl DebugInvariants for Pokedex {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "Pokedex");
    }

    fn validate_invariants(&self) -> Result<(), PokedexError> {
        let corrupt = |msg: String| PokedexError::CorruptChain(msg);

        // Empty iff head, tail, and cursor are all unset.
        if self.head.is_none() {
            if self.tail.is_some() || self.current.is_some() {
                return Err(corrupt("head unset but tail or cursor set".into()));
            }
            if self.total != 0 || self.found != 0 {
                return Err(corrupt(format!(
                    "empty chain with total={} found={}",
                    self.total, self.found
                )));
            }
            return Ok(());
        }
        if self.tail.is_none() || self.current.is_none() {
            return Err(corrupt("head set but tail or cursor unset".into()));
        }

        let mut seen_ids: HashSet<PokemonId> = HashSet::new();
        let mut reachable = 0usize;
        let mut found = 0usize;
        let mut cursor_seen = false;
        let mut prev: Option<NodeId> = None;
        let mut cursor = self.head;
        // Bounded walk: a link cycle would otherwise never terminate.
        let bound = self.nodes.len() + 1;
        while let Some(node_id) = cursor {
            if reachable >= bound {
                return Err(corrupt("next-links form a cycle".into()));
            }
            let node = self
                .nodes
                .get(node_id)
                .ok_or_else(|| corrupt("chain link to a dead arena slot".into()))?;
            if node.prev != prev {
                return Err(corrupt(format!(
                    "prev mirror broken at id {}",
                    node.pokemon.id()
                )));
            }
            if !seen_ids.insert(node.pokemon.id()) {
                return Err(corrupt(format!("duplicate id {}", node.pokemon.id())));
            }
            if node.status.is_found() {
                found += 1;
            }
            if self.current == Some(node_id) {
                cursor_seen = true;
            }
            if node.next.is_none() && self.tail != Some(node_id) {
                return Err(corrupt("chain ends before the recorded tail".into()));
            }
            reachable += 1;
            prev = Some(node_id);
            cursor = node.next;
        }
        if reachable != self.total {
            return Err(corrupt(format!(
                "total={} but {} nodes reachable from head",
                self.total, reachable
            )));
        }
        if found != self.found {
            return Err(corrupt(format!(
                "found={} but {} found nodes in chain",
                self.found, found
            )));
        }
        if !cursor_seen {
            return Err(corrupt("cursor points outside the chain".into()));
        }
        if !self.scratch.is_empty() {
            return Err(corrupt("type scratch set left dirty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pokemon::types::PokemonType;

    fn mon(id: u32, name: &str) -> Pokemon {
        Pokemon::new(
            PokemonId::new(id),
            name,
            1.0,
            10.0,
            PokemonType::Normal,
            PokemonType::None,
        )
        .unwrap()
    }

    #[test]
    fn first_add_selects_itself() {
        let mut dex = Pokedex::new();
        assert!(dex.current().is_none());
        dex.add(mon(1, "Rattata")).unwrap();
        dex.add(mon(2, "Raticate")).unwrap();
        assert_eq!(dex.current_id(), Some(PokemonId::new(1)));
        assert_eq!(dex.total_count(), 2);
    }

    #[test]
    fn duplicate_add_leaves_catalog_unchanged() {
        let mut dex = Pokedex::new();
        dex.add(mon(1, "Rattata")).unwrap();
        let err = dex.add(mon(1, "Impostor")).unwrap_err();
        assert_eq!(err, PokedexError::DuplicateId(PokemonId::new(1)));
        assert_eq!(dex.total_count(), 1);
        assert_eq!(dex.current().unwrap().name(), "Rattata");
        dex.validate_invariants().unwrap();
    }

    #[test]
    fn add_sorted_orders_by_id() {
        let mut dex = Pokedex::new();
        for id in [5u32, 3, 9, 1, 7] {
            dex.add_sorted(mon(id, "Ditto")).unwrap();
        }
        let ids: Vec<u32> = dex.iter().map(|e| e.pokemon.id().get()).collect();
        assert_eq!(ids, vec![1, 3, 5, 7, 9]);
        assert_eq!(dex.current_id(), Some(PokemonId::new(5)));
        dex.validate_invariants().unwrap();
    }

    #[test]
    fn validate_catches_dirty_scratch() {
        let mut dex = Pokedex::new();
        dex.add(mon(1, "Abra")).unwrap();
        dex.scratch.insert(PokemonType::Psychic);
        assert!(matches!(
            dex.validate_invariants(),
            Err(PokedexError::CorruptChain(_))
        ));
    }
}
