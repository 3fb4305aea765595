use crate::carddb::{CardDB, LandSelection};
use crate::config::{parse_land_list, DbConfig, DEFAULT_DATASET};
use crate::spawn_error::{LoadError, SpawnError};
use common::card_behavior::TapPurpose;
use common::card_entities::CardKind;
use common::mana::Color;
use common::zones::Zone;
use once_cell::sync::OnceCell;
use std::path::PathBuf;

static CARDDB: OnceCell<CardDB> = OnceCell::new();

fn db() -> &'static CardDB {
    CARDDB.get_or_init(|| {
        CardDB::from_json_str(include_str!("fixtures/atomic_cards.json"))
            .expect("fixture dataset parses")
    })
}

#[test_log::test]
fn loads_fixture_dataset() {
    assert_eq!(db().len(), 12);
    let forest = db().get("Forest").unwrap();
    assert_eq!(forest.text.as_deref(), Some("({T}: Add {G}.)"));
    assert!(db().get("forest").is_none());
    let names: Vec<&str> = db().names().take(2).collect();
    assert_eq!(names, vec!["Backup Plan", "Dimir Guildgate"]);
}

#[test_log::test]
fn loads_trimmed_export_shape() {
    let json = r#"{"library": {"Island": [{"name": "Island", "types": ["Land"], "supertypes": ["Basic"], "colorIdentity": ["U"], "text": "({T}: Add {U}.)"}]}}"#;
    let db = CardDB::from_reader(json.as_bytes()).unwrap();
    assert_eq!(db.len(), 1);
    let island = db.spawn_card("Island").unwrap();
    assert_eq!(island.mana_tap_profile().unwrap().get(Color::Blue), 1);
}

#[test_log::test]
fn bad_datasets_fail_to_load() {
    assert!(matches!(
        CardDB::from_json_str("{\"cards\": {}}"),
        Err(LoadError::Json(_))
    ));
    assert!(matches!(
        CardDB::from_path("does/not/exist.json"),
        Err(LoadError::Io(_))
    ));
}

#[test_log::test]
fn spawn_errors() {
    assert_eq!(
        db().spawn_card("Black Lotus").unwrap_err(),
        SpawnError::CardNotFound("Black Lotus".to_string())
    );
    assert_eq!(
        db().spawn_card("Unprinted Oddity").unwrap_err(),
        SpawnError::NoPrintings("Unprinted Oddity".to_string())
    );
    assert_eq!(
        db().spawn_card("Backup Plan").unwrap_err(),
        SpawnError::UnknownType("Backup Plan".to_string())
    );
}

#[test_log::test]
fn spawned_lands() {
    let bastion = db().spawn_card("Wooded Bastion").unwrap();
    assert_eq!(bastion.colors, vec![Color::Green, Color::White]);
    let mana = bastion.mana_tap_profile().unwrap();
    assert_eq!(mana.get(Color::Colorless), 1);
    assert_eq!(mana.get(Color::Green), 3);
    assert_eq!(mana.get(Color::White), 3);
    assert!(mana.mutually_exclusive);

    let gate = db().spawn_card("Dimir Guildgate").unwrap();
    assert!(gate.behavior.entrance.enters_tapped);
    assert_eq!(gate.colors, vec![Color::Black, Color::Blue]);
    assert_eq!(gate.mana_tap_profile().unwrap().to_string(), "1 blue or 1 black");

    let encampment = db().spawn_card("Ghitu Encampment").unwrap();
    assert!(encampment.behavior.entrance.enters_tapped);
    assert_eq!(encampment.mana_tap_profile().unwrap().get(Color::Red), 1);

    let elves = db().spawn_card("Llanowar Elves").unwrap();
    assert!(!elves.is_land());
    assert_eq!(elves.cost.to_string(), "white: 0, blue: 0, black: 0, red: 0, green: 1, colorless: 0");
    assert_eq!(elves.behavior.battlefield.tap_purpose, TapPurpose::Mana);
}

#[test_log::test]
fn repository_splits_basic_and_selected_lands() {
    let all = db().build_repository(&LandSelection::All);
    let basics: Vec<&str> = all.library.iter().map(|card| card.name.as_str()).collect();
    assert_eq!(basics, vec!["Forest", "Plains", "Snow-Covered Swamp"]);
    let lands: Vec<&str> = all.lands.iter().map(|card| card.name.as_str()).collect();
    assert_eq!(
        lands,
        vec!["Dimir Guildgate", "Ghitu Encampment", "Mishra's Factory", "Wooded Bastion"]
    );
    assert_eq!(all.len(), 7);
    assert!(all.find("Lightning Bolt").is_none());
    assert!(all.library.iter().all(|card| card.is_basic_land()));
    assert!(all.library.iter().all(|card| card.zone == Zone::Library));

    let factory = all.find("Mishra's Factory").unwrap();
    match &factory.kind {
        CardKind::NonbasicLand { tap_purposes, .. } => {
            assert_eq!(tap_purposes, &vec![TapPurpose::Mana, TapPurpose::Action])
        }
        kind => panic!("expected a nonbasic land, got {:?}", kind),
    }

    let named = db().build_repository(&LandSelection::named(["Wooded Bastion", "Lost Land"]));
    assert_eq!(named.library.len(), 3);
    assert_eq!(named.lands.len(), 1);
    assert_eq!(named.lands[0].name, "Wooded Bastion");
}

#[test_log::test]
fn repository_cards_move_between_zones() {
    let mut repository = db().build_repository(&LandSelection::All);
    let forest = &mut repository.library[0];
    assert!(!forest.can_tap_for_mana());
    forest.move_to(Zone::Battlefield);
    assert!(forest.can_tap_for_mana());
    forest.set_tapped(true);
    assert!(!forest.can_tap_for_mana());
    forest.move_to(Zone::Exile);
    assert_eq!(forest.behavior.zone(), Zone::Exile);
    assert!(!forest.can_tap_for_mana());
}

#[test_log::test]
fn cards_build_in_parallel() {
    let names = ["Forest", "Wooded Bastion", "Dimir Guildgate", "Llanowar Elves"];
    let sequential: Vec<_> = names
        .iter()
        .map(|name| db().spawn_card(name).unwrap())
        .collect();
    let parallel: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = names
            .iter()
            .map(|name| scope.spawn(move || db().spawn_card(name).unwrap()))
            .collect();
        handles.into_iter().map(|handle| handle.join().unwrap()).collect()
    });
    assert_eq!(sequential, parallel);
    let repository = std::thread::scope(|scope| {
        let first = scope.spawn(|| db().build_repository(&LandSelection::All));
        let second = scope.spawn(|| db().build_repository(&LandSelection::All));
        let first = first.join().unwrap();
        assert_eq!(first, second.join().unwrap());
        first
    });
    assert_eq!(repository.len(), 7);
}

#[test_log::test]
fn serializes_repository() {
    let repository = db().build_repository(&LandSelection::named(["Dimir Guildgate"]));
    let json = serde_json::to_value(&repository).unwrap();
    let gate = &json["lands"][0];
    assert_eq!(gate["name"], "Dimir Guildgate");
    assert_eq!(gate["card_type"], "Land");
    assert_eq!(gate["kind"]["variant"], "NonbasicLand");
    assert_eq!(gate["kind"]["mana"]["mutually_exclusive"], true);
    assert_eq!(gate["kind"]["tap_purposes"][0], "Mana");
    assert!(gate.get("raw").is_none());
    let schema = schemars::schema_for!(crate::carddb::CardRepository);
    let schema = serde_json::to_value(schema).unwrap();
    assert!(schema["definitions"]["Card"].is_object());
}

#[test_log::test]
fn config_from_vars() {
    let config = DbConfig::from_vars(None, None);
    assert_eq!(config.dataset_path, PathBuf::from(DEFAULT_DATASET));
    assert_eq!(config.land_selection, LandSelection::All);

    let config = DbConfig::from_vars(
        Some("data/Atomic.json".to_string()),
        Some("Wooded Bastion; Dimir Guildgate;".to_string()),
    );
    assert_eq!(config.dataset_path, PathBuf::from("data/Atomic.json"));
    assert_eq!(
        config.land_selection,
        LandSelection::named(["Dimir Guildgate", "Wooded Bastion"])
    );
    assert_eq!(parse_land_list(" ; "), LandSelection::All);
    assert_eq!(DbConfig::from_vars(Some("  ".to_string()), None), DbConfig::default());
}
