//! Type listing and the exploration traversal.
//!
//! Both operations run over the whole chain with the catalog's scratch
//! [`TypeSet`](crate::pokemon::types::TypeSet), which is cleared before
//! and after each use.

use super::Pokedex;
use crate::pokemon::types::PokemonType;

impl Pokedex {
    /// Lists every distinct concrete type present in the catalog, found
    /// or not, in first-encounter chain order.
    pub fn list_types(&mut self) -> Vec<PokemonType> {
        self.scratch.clear();
        let mut cursor = self.head;
        while let Some(node_id) = cursor {
            let Some(node) = self.nodes.get(node_id) else {
                break;
            };
            self.scratch.insert(node.pokemon.first_type());
            self.scratch.insert(node.pokemon.second_type());
            cursor = node.next;
        }
        let types: Vec<PokemonType> = self.scratch.iter().collect();
        self.scratch.clear();
        types
    }

    /// Reveals one representative not-found Pokemon per type, in chain
    /// order.
    ///
    /// The traversal walks the chain front to back with a fresh type
    /// scratch set; a not-found Pokemon is marked found iff at least one
    /// of its type tags has not been seen earlier in this same walk, and
    /// all its concrete tags are then recorded as seen. Types carried by
    /// Pokemon found before the call play no part: only types seen
    /// within the walk count.
    ///
    /// The cursor visits each marked node (so the usual found-counter
    /// semantics of [`Pokedex::find_current`] apply) and is restored to
    /// the original selection before returning.
    pub fn explore(&mut self) {
        self.scratch.clear();
        let origin = self.current;
        let mut cursor = self.head;
        while let Some(node_id) = cursor {
            self.current = Some(node_id);
            let Some(node) = self.nodes.get(node_id) else {
                break;
            };
            let next = node.next;
            if !node.status.is_found() {
                let first_unseen = self.scratch.insert(node.pokemon.first_type());
                let second_unseen = self.scratch.insert(node.pokemon.second_type());
                if first_unseen || second_unseen {
                    self.find_current();
                }
            }
            cursor = next;
        }
        self.current = origin;
        self.scratch.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pokemon::{Pokemon, PokemonId};

    fn mon(id: u32, name: &str, t1: PokemonType, t2: PokemonType) -> Pokemon {
        Pokemon::new(PokemonId::new(id), name, 1.0, 10.0, t1, t2).unwrap()
    }

    #[test]
    fn list_types_orders_by_first_encounter() {
        let mut dex = Pokedex::new();
        dex.add(mon(6, "Charizard", PokemonType::Fire, PokemonType::Flying))
            .unwrap();
        dex.add(mon(9, "Blastoise", PokemonType::Water, PokemonType::None))
            .unwrap();
        dex.add(mon(146, "Moltres", PokemonType::Fire, PokemonType::Flying))
            .unwrap();
        assert_eq!(
            dex.list_types(),
            vec![PokemonType::Fire, PokemonType::Flying, PokemonType::Water]
        );
        // Scratch must be clean afterwards: a second listing agrees.
        assert_eq!(dex.list_types().len(), 3);
    }

    #[test]
    fn explore_reveals_first_representative_per_type() {
        let mut dex = Pokedex::new();
        dex.add(mon(1, "Vulpix", PokemonType::Fire, PokemonType::None))
            .unwrap();
        dex.add(mon(2, "Poliwag", PokemonType::Water, PokemonType::None))
            .unwrap();
        dex.add(mon(3, "Growlithe", PokemonType::Fire, PokemonType::None))
            .unwrap();
        dex.explore();

        let found: Vec<bool> = dex.iter().map(|e| e.found).collect();
        assert_eq!(found, vec![true, true, false]);
        assert_eq!(dex.found_count(), 2);
        // Cursor restored to the original selection (the head here).
        assert_eq!(dex.current_id(), Some(PokemonId::new(1)));
    }

    #[test]
    fn explore_ignores_types_of_already_found_pokemon() {
        let mut dex = Pokedex::new();
        dex.add(mon(4, "Charmander", PokemonType::Fire, PokemonType::None))
            .unwrap();
        dex.add(mon(5, "Charmeleon", PokemonType::Fire, PokemonType::None))
            .unwrap();
        // Reveal the first Fire Pokemon ahead of time.
        dex.find_current();
        dex.explore();
        // The scratch starts empty, so the second Fire Pokemon is still
        // the first *not-found* representative of Fire and gets found.
        assert_eq!(dex.found_count(), 2);
    }

    #[test]
    fn explore_marks_dual_type_with_one_new_tag() {
        let mut dex = Pokedex::new();
        dex.add(mon(41, "Zubat", PokemonType::Poison, PokemonType::Flying))
            .unwrap();
        dex.add(mon(42, "Golbat", PokemonType::Poison, PokemonType::Flying))
            .unwrap();
        dex.add(mon(83, "Farfetchd", PokemonType::Normal, PokemonType::Flying))
            .unwrap();
        dex.explore();
        let found: Vec<bool> = dex.iter().map(|e| e.found).collect();
        // Zubat introduces Poison and Flying; Golbat adds nothing;
        // Farfetchd still introduces Normal.
        assert_eq!(found, vec![true, false, true]);
    }
}
