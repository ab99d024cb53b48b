//! Derived catalogs: filtered, independently owned clones of a source.
//!
//! Each derivation builds a brand-new [`Pokedex`] of deep-cloned found
//! entries, stores it as the source's successor (overwriting whatever
//! derivation came before) and hands back a borrow of the stored
//! catalog. [`Pokedex::take_successor`] detaches the derivative so it
//! outlives the source.

use super::node::FoundStatus;
use super::Pokedex;
use crate::matcher;
use crate::pokemon::types::PokemonType;
use crate::pokemon::Pokemon;

impl Pokedex {
    /// Derives the catalog of found Pokemon with type `ty` (as either
    /// tag), in source chain order.
    pub fn of_type(&mut self, ty: PokemonType) -> &mut Pokedex {
        self.derive(|dex, entry| {
            if entry.has_type(ty) {
                dex.push_back_node(entry.clone(), FoundStatus::Found);
            }
        })
    }

    /// Derives the catalog of all found Pokemon, in source chain order.
    pub fn found_pokemon(&mut self) -> &mut Pokedex {
        self.derive(|dex, entry| {
            dex.push_back_node(entry.clone(), FoundStatus::Found);
        })
    }

    /// Derives the catalog of found Pokemon whose name contains `text`
    /// as a case-insensitive substring, in source chain order.
    ///
    /// The empty needle matches every found Pokemon.
    pub fn search(&mut self, text: &str) -> &mut Pokedex {
        self.derive(|dex, entry| {
            if matcher::contains_ignore_ascii_case(entry.name(), text) {
                dex.push_back_node(entry.clone(), FoundStatus::Found);
            }
        })
    }

    /// The most recently derived catalog, if still attached.
    pub fn successor(&self) -> Option<&Pokedex> {
        self.successor.as_deref()
    }

    /// Detaches and returns the most recently derived catalog.
    ///
    /// Once detached, source and derivative are fully independent:
    /// dropping one never invalidates the other.
    pub fn take_successor(&mut self) -> Option<Pokedex> {
        self.successor.take().map(|boxed| *boxed)
    }

    /// Shared derivation loop: walk the source chain, offer every found
    /// entry to `transfer`, select the new head, and store the result
    /// as the successor.
    fn derive(&mut self, transfer: impl Fn(&mut Pokedex, &Pokemon)) -> &mut Pokedex {
        let mut derived = Pokedex::new();
        let mut cursor = self.head;
        while let Some(node_id) = cursor {
            let Some(node) = self.nodes.get(node_id) else {
                break;
            };
            if node.status.is_found() {
                transfer(&mut derived, &node.pokemon);
            }
            cursor = node.next;
        }
        derived.current = derived.head;
        let slot = self.successor.insert(Box::new(derived));
        &mut **slot
    }
}
