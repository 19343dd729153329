#[cfg(test)]
mod tests {
    use crate::dex::fixtures::{ITEMDEX, MOVEDEX, POKEDEX, test_dex};
    use crate::dex::{Accuracy, Compendium, DexError, EntryKind};
    use crate::types::{MoveCategory, Type};

    #[test]
    fn test_species_entry() {
        let dex = test_dex();
        let heatran = dex.species("heatran").unwrap();
        assert_eq!(heatran.abilities, vec!["flashfire", "flamebody"]);
        assert_eq!(heatran.types, vec![Type::Fire, Type::Steel]);
        assert_eq!(heatran.base_stats.spa, 130);
    }

    #[test]
    fn test_ability_slot_order() {
        let dex = test_dex();
        let snorlax = dex.species("snorlax").unwrap();
        assert_eq!(snorlax.abilities, vec!["immunity", "thickfat", "gluttony"]);
    }

    #[test]
    fn test_unreleased_hidden_ability_dropped() {
        let dex = test_dex();
        let dragonite = dex.species("dragonite").unwrap();
        assert_eq!(dragonite.abilities, vec!["innerfocus"]);
    }

    #[test]
    fn test_nonstandard_entries_filtered() {
        let dex = test_dex();
        assert!(dex.species("missingno").is_err());
        assert!(!dex.has_move("magikarpsrevenge"));
        assert!(!dex.has_move("lightofruin"));
        assert!(dex.item("crucibellite").is_err());
    }

    #[test]
    fn test_move_entry() {
        let dex = test_dex();
        let protect = dex.move_entry("protect").unwrap();
        assert_eq!(protect.priority, 4);
        assert_eq!(protect.category, MoveCategory::Status);
        assert_eq!(protect.accuracy, Accuracy::AlwaysHits);

        let raid = dex.move_entry("sinisterarrowraid").unwrap();
        assert_eq!(raid.z_crystal.as_deref(), Some("decidiumz"));
    }

    #[test]
    fn test_recharge_is_synthetic() {
        let dex = test_dex();
        let recharge = dex.move_entry("recharge").unwrap();
        assert_eq!(recharge.pp, 30);
        assert_eq!(recharge.target, "self");
        assert_eq!(recharge.move_type, Type::Normal);
    }

    #[test]
    fn test_hidden_power_suffix() {
        let dex = test_dex();
        assert_eq!(dex.resolve_move_id("hiddenpowerfire60"), "hiddenpowerfire");
        assert_eq!(dex.resolve_move_id("hiddenpowerice60"), "hiddenpowerice60");
        assert_eq!(dex.resolve_move_id("tackle"), "tackle");
        assert!(dex.has_move("hiddenpowerfire60"));
    }

    #[test]
    fn test_unknown_entry() {
        let dex = test_dex();
        let err = dex.move_entry("notamove").unwrap_err();
        assert!(matches!(
            err,
            DexError::UnknownEntry {
                kind: EntryKind::Move,
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "unknown compendium entry: move \"notamove\""
        );
    }

    #[test]
    fn test_z_crystal_for_type() {
        let dex = test_dex();
        assert_eq!(dex.z_crystal_for_type(Type::Fighting), Some("fightiniumz"));
        assert_eq!(dex.z_crystal_for_type(Type::Normal), Some("normaliumz"));
        assert_eq!(dex.z_crystal_for_type(Type::Fairy), None);

        let decidium = dex.item("decidiumz").unwrap();
        assert_eq!(decidium.z_move_type, None);
        assert_eq!(decidium.z_move_from.as_deref(), Some("Spirit Shackle"));
    }

    #[test]
    fn test_malformed_json() {
        let err = Compendium::from_json("{", MOVEDEX, ITEMDEX).unwrap_err();
        assert!(matches!(
            err,
            DexError::Json {
                kind: EntryKind::Species,
                ..
            }
        ));

        let err = Compendium::from_json(POKEDEX, MOVEDEX, "[]").unwrap_err();
        assert!(matches!(
            err,
            DexError::Json {
                kind: EntryKind::Item,
                ..
            }
        ));
    }

    #[test]
    fn test_load_missing_directory() {
        let err = Compendium::load("/nonexistent/compendium").unwrap_err();
        let DexError::Io { path, .. } = err else {
            panic!("expected io error");
        };
        assert!(path.ends_with("pokedex.json"));
    }

    #[test]
    fn test_load_directory() {
        let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");
        let dex = Compendium::load(dir).unwrap();
        assert!(dex.has_move("uturn"));
        assert!(dex.species("jirachi").is_ok());
    }
}
