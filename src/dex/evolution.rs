//! Evolution links: establishing them and walking chains.
//!
//! Every node carries at most one outgoing evolution link. The chain
//! walk is bounded by a visited set so a caller-constructed cycle
//! terminates instead of looping forever.

use super::Pokedex;
use crate::debug_invariants::DebugInvariants;
use crate::error::PokedexError;
use crate::pokemon::types::PokemonType;
use crate::pokemon::PokemonId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Detail snapshot of a found Pokemon along an evolution chain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevealedPokemon {
    pub name: String,
    pub first_type: PokemonType,
    pub second_type: PokemonType,
}

/// One step of an evolution chain.
///
/// `revealed` is `Some` only for Pokemon already marked found; callers
/// render unfound steps with placeholders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvolutionStep {
    pub id: PokemonId,
    pub revealed: Option<RevealedPokemon>,
}

/// Ordered evolution chain starting at the cursor.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EvolutionChain {
    /// Steps in evolution order, the cursor's Pokemon first.
    pub steps: Vec<EvolutionStep>,
    /// Set when the walk stopped because it revisited a node.
    pub cycle: bool,
}

impl Pokedex {
    /// Records that `from_id` evolves into `to_id`, overwriting any
    /// previous evolution link out of `from_id`.
    ///
    /// # Errors
    /// - [`PokedexError::UnknownEvolutionId`] if either id is absent.
    /// - [`PokedexError::SelfEvolution`] if `from_id == to_id`.
    ///
    /// No link is modified on failure.
    pub fn link_evolution(
        &mut self,
        from_id: PokemonId,
        to_id: PokemonId,
    ) -> Result<(), PokedexError> {
        if from_id == to_id {
            return Err(PokedexError::SelfEvolution(from_id));
        }
        let from = self
            .find_node(from_id)
            .ok_or(PokedexError::UnknownEvolutionId(from_id))?;
        let to = self
            .find_node(to_id)
            .ok_or(PokedexError::UnknownEvolutionId(to_id))?;
        if let Some(node) = self.nodes.get_mut(from) {
            node.evolve = Some(to);
        }
        self.debug_assert_invariants();
        Ok(())
    }

    /// The id one evolution hop from the cursor, or `None` when the
    /// current Pokemon does not evolve.
    ///
    /// # Errors
    /// [`PokedexError::EmptyPokedex`] on an empty catalog.
    pub fn next_evolution(&self) -> Result<Option<PokemonId>, PokedexError> {
        let current = self.current.ok_or(PokedexError::EmptyPokedex)?;
        let Some(node) = self.nodes.get(current) else {
            return Err(PokedexError::EmptyPokedex);
        };
        let Some(evolved) = node.evolve.and_then(|id| self.nodes.get(id)) else {
            return Ok(None);
        };
        Ok(Some(evolved.pokemon.id()))
    }

    /// Walks the evolution chain starting at the cursor.
    ///
    /// Returns the visited Pokemon in order, each reporting its found
    /// state (details only when found). The walk stops when a node has
    /// no outgoing link, when a link no longer resolves (its target was
    /// removed), or when it would revisit a node, in which case
    /// [`EvolutionChain::cycle`] is set. Empty catalog yields an empty
    /// chain.
    pub fn evolution_chain(&self) -> EvolutionChain {
        let mut chain = EvolutionChain::default();
        let mut visited = HashSet::new();
        let mut cursor = self.current;
        while let Some(node_id) = cursor {
            let Some(node) = self.nodes.get(node_id) else {
                break;
            };
            if !visited.insert(node_id) {
                log::warn!(
                    "evolution cycle detected at id {}; truncating chain",
                    node.pokemon.id()
                );
                chain.cycle = true;
                break;
            }
            let revealed = node.status.is_found().then(|| RevealedPokemon {
                name: node.pokemon.name().to_string(),
                first_type: node.pokemon.first_type(),
                second_type: node.pokemon.second_type(),
            });
            chain.steps.push(EvolutionStep {
                id: node.pokemon.id(),
                revealed,
            });
            cursor = node.evolve;
        }
        chain
    }
}
