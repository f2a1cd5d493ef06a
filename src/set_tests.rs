//! Tests for set parsing, display names, and pool materialization

use crate::error::ConvertError;
use crate::set::{CardSet, SetType};
use serde_json::json;

fn record(cards: serde_json::Value, booster: serde_json::Value) -> serde_json::Value {
    json!({
        "name": "Test Set",
        "code": "TST",
        "releaseDate": "2011-09-30",
        "type": "expansion",
        "booster": booster,
        "cards": cards,
    })
}

#[test]
fn test_set_type_from_source() {
    assert_eq!(SetType::from_source("expansion"), Some(SetType::Expansion));
    assert_eq!(SetType::from_source("core"), Some(SetType::Core));
    assert_eq!(SetType::from_source("un"), Some(SetType::Joke));
    assert_eq!(SetType::from_source("promo"), None);
    assert_eq!(SetType::from_source("Expansion"), None);
}

#[test]
fn test_unrecognized_type_is_skipped_not_errored() {
    let mut rec = record(json!([]), json!([]));
    rec["type"] = json!("commander");
    let result = CardSet::from_record("TST", rec).unwrap();
    assert!(result.is_none());
}

#[test]
fn test_display_name_with_block() {
    let mut rec = record(json!([]), json!([]));
    rec["name"] = json!("Eventide");
    rec["block"] = json!("Shadowmoor");
    let set = CardSet::from_record("EVE", rec).unwrap().unwrap();
    assert_eq!(set.display_name(), "Shadowmoor - Eventide");
}

#[test]
fn test_display_name_block_equals_name() {
    let mut rec = record(json!([]), json!([]));
    rec["name"] = json!("Shards of Alara");
    rec["block"] = json!("Shards of Alara");
    let set = CardSet::from_record("ALA", rec).unwrap().unwrap();
    assert_eq!(set.display_name(), "Shards of Alara");
}

#[test]
fn test_display_name_without_block() {
    let mut rec = record(json!([]), json!([]));
    rec["name"] = json!("Lorwyn");
    let set = CardSet::from_record("LRW", rec).unwrap().unwrap();
    assert_eq!(set.display_name(), "Lorwyn");
}

#[test]
fn test_missing_field_names_the_set() {
    let rec = json!({
        "name": "Broken Set",
        "code": "BRK",
        "type": "expansion",
        "cards": [],
    });
    let err = CardSet::from_record("BRK", rec).unwrap_err();
    match err {
        ConvertError::MalformedRecord { set_code, detail } => {
            assert_eq!(set_code, "BRK");
            assert!(detail.contains("releaseDate"), "detail was: {}", detail);
        }
        other => panic!("expected MalformedRecord, got {:?}", other),
    }
}

#[test]
fn test_malformed_card_names_the_card() {
    let rec = record(
        json!([
            {"name": "Good Card", "rarity": "Common", "layout": "normal", "manaCost": "{1}"},
            {"name": "Bad Card", "layout": "normal"},
        ]),
        json!([]),
    );
    let err = CardSet::from_record("TST", rec).unwrap_err();
    match err {
        ConvertError::MalformedRecord { set_code, detail } => {
            assert_eq!(set_code, "TST");
            assert!(detail.contains("Bad Card"), "detail was: {}", detail);
        }
        other => panic!("expected MalformedRecord, got {:?}", other),
    }
}

#[test]
fn test_bad_release_date() {
    let mut rec = record(json!([]), json!([]));
    rec["releaseDate"] = json!("September 2011");
    let err = CardSet::from_record("TST", rec).unwrap_err();
    match err {
        ConvertError::BadReleaseDate { set_code, value } => {
            assert_eq!(set_code, "TST");
            assert_eq!(value, "September 2011");
        }
        other => panic!("expected BadReleaseDate, got {:?}", other),
    }
}

#[test]
fn test_to_output_pools_are_sorted_and_deduplicated() {
    let rec = record(
        json!([
            {"name": "Zebra Unicorn", "rarity": "Common", "layout": "normal", "manaCost": "{W}{G}"},
            {"name": "Ajani's Pridemate", "rarity": "Common", "layout": "normal", "manaCost": "{1}{W}"},
            // Same name twice (two printings) must collapse to one entry
            {"name": "Ajani's Pridemate", "rarity": "Common", "layout": "normal", "manaCost": "{1}{W}"},
        ]),
        json!([["common"]]),
    );
    let set = CardSet::from_record("TST", rec).unwrap().unwrap();
    let output = set.to_output().unwrap();
    assert_eq!(
        output.cards_by_type["common"],
        vec!["Ajani's Pridemate", "Zebra Unicorn"]
    );
}

#[test]
fn test_empty_land_pool_substitutes_basic_lands() {
    let rec = record(
        json!([
            {"name": "Filler", "rarity": "Common", "layout": "normal", "manaCost": "{1}"},
        ]),
        json!([["common"], "land"]),
    );
    let set = CardSet::from_record("TST", rec).unwrap().unwrap();
    let output = set.to_output().unwrap();
    assert_eq!(
        output.cards_by_type["land"],
        vec!["Forest", "Island", "Mountain", "Plains", "Swamp"]
    );
}

#[test]
fn test_basic_land_cards_fill_the_land_pool_when_present() {
    let rec = record(
        json!([
            {"name": "Snow-Covered Forest", "rarity": "Basic Land", "layout": "normal"},
            {"name": "Filler", "rarity": "Common", "layout": "normal", "manaCost": "{1}"},
        ]),
        json!([["common"], "basic land"]),
    );
    let set = CardSet::from_record("TST", rec).unwrap().unwrap();
    let output = set.to_output().unwrap();
    assert_eq!(output.cards_by_type["basic land"], vec!["Snow-Covered Forest"]);
}

#[test]
fn test_unsatisfiable_booster_identifies_set_and_category() {
    let rec = record(
        json!([
            {"name": "Only Common", "rarity": "Common", "layout": "normal", "manaCost": "{1}"},
        ]),
        json!([["common"], ["rare", "rare", "rare", "rare", "mythic rare"]]),
    );
    let set = CardSet::from_record("TST", rec).unwrap().unwrap();
    let err = set.to_output().unwrap_err();
    match err {
        ConvertError::UnsatisfiableBooster { set_code, category } => {
            assert_eq!(set_code, "TST");
            // "mythic rare" sorts before "rare", so it is reported first
            assert_eq!(category, "mythic rare");
        }
        other => panic!("expected UnsatisfiableBooster, got {:?}", other),
    }
}

#[test]
fn test_booster_format_serialization_shape() {
    let rec = record(
        json!([
            {"name": "C1", "rarity": "Common", "layout": "normal", "manaCost": "{1}"},
            {"name": "U1", "rarity": "Uncommon", "layout": "normal", "manaCost": "{2}"},
            {"name": "R1", "rarity": "Rare", "layout": "normal", "manaCost": "{3}"},
            {"name": "M1", "rarity": "Mythic Rare", "layout": "normal", "manaCost": "{4}"},
        ]),
        json!([["common", "common"], ["uncommon"], ["rare", "rare", "rare", "rare", "mythic rare"]]),
    );
    let set = CardSet::from_record("TST", rec).unwrap().unwrap();
    let output = set.to_output().unwrap();

    assert_eq!(output.booster_format.len(), 3);
    assert_eq!(output.booster_format[0]["common"], 1.0);
    assert_eq!(output.booster_format[1]["uncommon"], 1.0);
    assert!((output.booster_format[2]["rare"] - 0.8).abs() < 1e-9);
    assert!((output.booster_format[2]["mythic rare"] - 0.2).abs() < 1e-9);

    let json = serde_json::to_value(&output).unwrap();
    assert!(json.get("boosterFormat").is_some());
    assert!(json.get("cardsByType").is_some());
    assert_eq!(json["name"], "Test Set");
}
