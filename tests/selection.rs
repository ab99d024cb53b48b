use pokedex::prelude::*;

fn mon(id: u32, name: &str) -> Pokemon {
    Pokemon::new(
        PokemonId::new(id),
        name,
        1.0,
        10.0,
        PokemonType::Normal,
        PokemonType::None,
    )
    .expect("valid test Pokemon")
}

fn seeded() -> Pokedex {
    let mut dex = Pokedex::new();
    for id in [1u32, 2, 3] {
        dex.add(mon(id, "Ditto")).unwrap();
    }
    dex
}

#[test]
fn navigation_stops_at_the_boundaries() {
    let mut dex = seeded();
    dex.select_prev(); // already at the head
    assert_eq!(dex.current_id(), Some(PokemonId::new(1)));

    dex.select_next();
    dex.select_next();
    assert_eq!(dex.current_id(), Some(PokemonId::new(3)));
    dex.select_next(); // already at the tail
    assert_eq!(dex.current_id(), Some(PokemonId::new(3)));

    dex.select_prev();
    assert_eq!(dex.current_id(), Some(PokemonId::new(2)));
}

#[test]
fn navigation_on_empty_is_a_no_op() {
    let mut dex = Pokedex::new();
    dex.select_next();
    dex.select_prev();
    dex.find_current();
    assert!(dex.current().is_none());
    assert_eq!(dex.found_count(), 0);
}

#[test]
fn select_by_unknown_id_leaves_cursor_unchanged() {
    let mut dex = seeded();
    dex.select_by_id(PokemonId::new(2));
    dex.select_by_id(PokemonId::new(42));
    assert_eq!(dex.current_id(), Some(PokemonId::new(2)));
}

#[test]
fn find_current_is_idempotent() {
    let mut dex = seeded();
    dex.find_current();
    dex.find_current();
    assert_eq!(dex.found_count(), 1);
    assert!(dex.current_status().unwrap().is_found());
}

#[test]
fn cursor_always_references_a_member() {
    let mut dex = seeded();
    dex.select_by_id(PokemonId::new(3));
    dex.select_prev();
    dex.remove_current();
    dex.select_next();
    dex.remove_current();
    dex.select_by_id(PokemonId::new(99));

    let current = dex.current_id().unwrap();
    assert!(dex.iter().any(|e| e.pokemon.id() == current));
    dex.validate_invariants().unwrap();
}

#[test]
fn iterator_flags_the_selected_entry() {
    let mut dex = seeded();
    dex.select_by_id(PokemonId::new(2));
    let selected: Vec<bool> = dex.iter().map(|e| e.selected).collect();
    assert_eq!(selected, vec![false, true, false]);
}
