//! Text rendering for catalog queries.
//!
//! The catalog core only hands out ordered data; these helpers turn it
//! into the classic display strings (masked names for unfound Pokemon,
//! roster lines with a selection marker, evolution chains). Pure string
//! builders, no I/O.

use crate::dex::{EvolutionChain, Pokedex};
use crate::pokemon::types::PokemonType;
use crate::pokemon::Pokemon;
use itertools::Itertools;
use std::fmt::Write;

/// One `*` per character of the Pokemon's name.
pub fn masked_name(pokemon: &Pokemon) -> String {
    "*".repeat(pokemon.name().chars().count())
}

fn type_pair(first: PokemonType, second: PokemonType) -> String {
    if second.is_concrete() {
        format!("{first} {second}")
    } else {
        first.to_string()
    }
}

/// Detail block for the currently selected Pokemon, or `None` when the
/// catalog is empty.
///
/// Unfound Pokemon show their id and a masked name; height, weight, and
/// type are replaced by `--`.
pub fn detail_current(dex: &Pokedex) -> Option<String> {
    let pokemon = dex.current()?;
    let found = dex.current_status().is_some_and(|s| s.is_found());
    let mut out = String::new();
    let _ = writeln!(out, "ID: {:03}", pokemon.id().get());
    if found {
        let _ = writeln!(out, "Name: {}", pokemon.name());
        let _ = writeln!(out, "Height: {:.1}m", pokemon.height());
        let _ = writeln!(out, "Weight: {:.1}kg", pokemon.weight());
        let _ = writeln!(
            out,
            "Type: {}",
            type_pair(pokemon.first_type(), pokemon.second_type())
        );
    } else {
        let _ = writeln!(out, "Name: {}", masked_name(pokemon));
        let _ = writeln!(out, "Height: --");
        let _ = writeln!(out, "Weight: --");
        let _ = writeln!(out, "Type: --");
    }
    Some(out)
}

/// Full roster, one line per entry in chain order.
///
/// The selected entry is prefixed with `--> `; unfound names are
/// masked.
pub fn roster(dex: &Pokedex) -> String {
    let mut out = String::new();
    for entry in dex.iter() {
        let marker = if entry.selected { "--> " } else { "    " };
        let name = if entry.found {
            entry.pokemon.name().to_string()
        } else {
            masked_name(entry.pokemon)
        };
        let _ = writeln!(out, "{marker}#{:03}: {name}", entry.pokemon.id().get());
    }
    out
}

/// Renders an evolution chain as arrow-joined steps.
///
/// Found steps show `#NNN Name [Type1 Type2]`; unfound steps show
/// `#NNN ???? [????]`.
pub fn evolution_line(chain: &EvolutionChain) -> String {
    chain
        .steps
        .iter()
        .map(|step| match &step.revealed {
            Some(revealed) => format!(
                "#{:03} {} [{}]",
                step.id.get(),
                revealed.name,
                type_pair(revealed.first_type, revealed.second_type)
            ),
            None => format!("#{:03} ???? [????]", step.id.get()),
        })
        .join(" --> ")
}
