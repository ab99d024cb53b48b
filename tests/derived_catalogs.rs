use pokedex::prelude::*;

fn mon(id: u32, name: &str, t1: PokemonType, t2: PokemonType) -> Pokemon {
    Pokemon::new(PokemonId::new(id), name, 1.0, 10.0, t1, t2).expect("valid test Pokemon")
}

fn find_all(dex: &mut Pokedex) {
    for _ in 0..dex.total_count() {
        dex.find_current();
        dex.select_next();
    }
}

fn chain_ids(dex: &Pokedex) -> Vec<u32> {
    dex.iter().map(|e| e.pokemon.id().get()).collect()
}

fn starters() -> Pokedex {
    let mut dex = Pokedex::new();
    dex.add(mon(5, "Charmeleon", PokemonType::Fire, PokemonType::None))
        .unwrap();
    dex.add(mon(3, "Venusaur", PokemonType::Grass, PokemonType::Poison))
        .unwrap();
    dex.add(mon(9, "Blastoise", PokemonType::Water, PokemonType::None))
        .unwrap();
    dex
}

#[test]
fn found_subset_preserves_chain_order_not_id_order() {
    let mut dex = starters();
    find_all(&mut dex);
    let derived = dex.found_pokemon();
    assert_eq!(chain_ids(derived), vec![5, 3, 9]);
    assert_eq!(derived.found_count(), 3);
    assert_eq!(derived.current_id(), Some(PokemonId::new(5)));
}

#[test]
fn by_type_matches_either_type_tag() {
    let mut dex = Pokedex::new();
    dex.add(mon(1, "Bulbasaur", PokemonType::Grass, PokemonType::Poison))
        .unwrap();
    dex.add(mon(41, "Zubat", PokemonType::Poison, PokemonType::Flying))
        .unwrap();
    dex.add(mon(7, "Squirtle", PokemonType::Water, PokemonType::None))
        .unwrap();
    find_all(&mut dex);

    let derived = dex.of_type(PokemonType::Poison);
    assert_eq!(chain_ids(derived), vec![1, 41]);
    assert!(derived.iter().all(|e| e.found));
}

#[test]
fn derivations_skip_unfound_entries() {
    let mut dex = starters();
    dex.find_current(); // only Charmeleon

    assert_eq!(dex.of_type(PokemonType::Water).total_count(), 0);
    assert_eq!(dex.search("saur").total_count(), 0);
    assert_eq!(chain_ids(dex.found_pokemon()), vec![5]);
}

#[test]
fn empty_needle_search_clones_the_found_subset() {
    let mut dex = starters();
    find_all(&mut dex);
    dex.search("");
    let derived = dex.take_successor().unwrap();

    assert_eq!(derived.total_count(), dex.found_count());
    assert_eq!(chain_ids(&derived), chain_ids(&dex));
    assert!(derived.iter().all(|e| e.found));
    derived.validate_invariants().unwrap();
}

#[test]
fn derived_entries_are_independent_copies() {
    let mut dex = starters();
    find_all(&mut dex);
    dex.search("");
    let derived = dex.take_successor().unwrap();

    // Mutating the source must not reach into the derivative.
    dex.select_by_id(PokemonId::new(3));
    dex.remove_current();
    drop(dex);
    assert_eq!(chain_ids(&derived), vec![5, 3, 9]);
    assert_eq!(derived.current().unwrap().name(), "Charmeleon");
}

#[test]
fn search_matches_case_insensitively() {
    let mut dex = starters();
    find_all(&mut dex);
    let names: Vec<String> = dex
        .search("SaUr")
        .iter()
        .map(|e| e.pokemon.name().to_string())
        .collect();
    assert_eq!(names, vec!["Venusaur"]);
}

#[test]
fn each_derivation_overwrites_the_successor() {
    let mut dex = starters();
    find_all(&mut dex);
    dex.of_type(PokemonType::Fire);
    dex.of_type(PokemonType::Grass);
    assert_eq!(chain_ids(dex.successor().unwrap()), vec![3]);

    let taken = dex.take_successor().unwrap();
    assert_eq!(chain_ids(&taken), vec![3]);
    assert!(dex.successor().is_none());
    assert!(dex.take_successor().is_none());
}

#[test]
fn deriving_from_an_empty_catalog_yields_an_empty_catalog() {
    let mut dex = Pokedex::new();
    let derived = dex.found_pokemon();
    assert!(derived.is_empty());
    assert!(derived.current().is_none());
}

#[test]
fn derivations_chain_off_derivations() {
    let mut dex = Pokedex::new();
    dex.add(mon(6, "Charizard", PokemonType::Fire, PokemonType::Flying))
        .unwrap();
    dex.add(mon(146, "Moltres", PokemonType::Fire, PokemonType::Flying))
        .unwrap();
    find_all(&mut dex);

    dex.of_type(PokemonType::Fire);
    let mut fire = dex.take_successor().unwrap();
    let char_only = fire.search("char");
    assert_eq!(chain_ids(char_only), vec![6]);
}
