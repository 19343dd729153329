//! Small compendium shared by unit tests

use std::sync::Arc;

use super::Compendium;

pub(crate) const POKEDEX: &str = include_str!("../../tests/fixtures/pokedex.json");
pub(crate) const MOVEDEX: &str = include_str!("../../tests/fixtures/movedex.json");
pub(crate) const ITEMDEX: &str = include_str!("../../tests/fixtures/itemdex.json");

pub(crate) fn test_dex() -> Arc<Compendium> {
    Arc::new(Compendium::from_json(POKEDEX, MOVEDEX, ITEMDEX).unwrap())
}
