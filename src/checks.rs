//! Embedded self-checks
//!
//! A small battery of example-based checks runnable from the installed binary
//! (`--check`), covering the same ground as the unit tests without needing a
//! test harness. Each check returns an error string on failure so the caller
//! can report every failure, not just the first.

use crate::booster::BoosterFormat;
use crate::card::make_card_type;
use crate::convert::{convert, UnsatisfiablePolicy};
use crate::probability::{ProbabilityTable, SlotTree};

type Check = (&'static str, fn() -> Result<(), String>);

fn expect_eq<T: PartialEq + std::fmt::Debug>(what: &str, got: T, want: T) -> Result<(), String> {
    if got == want {
        Ok(())
    } else {
        Err(format!("{}: got {:?}, want {:?}", what, got, want))
    }
}

fn tree(json: &str) -> Result<SlotTree, String> {
    serde_json::from_str(json).map_err(|e| format!("bad check fixture: {}", e))
}

fn check_tree_probabilities() -> Result<(), String> {
    let table = ProbabilityTable::from_tree(&tree(r#"["A", ["X", "Y"]]"#)?)
        .map_err(|e| e.to_string())?;
    expect_eq("mass of A", table.get("A"), Some(0.5))?;
    expect_eq("mass of X", table.get("X"), Some(0.25))?;
    expect_eq("mass of Y", table.get("Y"), Some(0.25))?;

    let empty = ProbabilityTable::from_tree(&tree("[]")?).map_err(|e| e.to_string())?;
    expect_eq("empty tree size", empty.len(), 0)?;

    if ProbabilityTable::from_tree(&tree(r#""common""#)?).is_ok() {
        return Err("bare label root was accepted".to_string());
    }
    Ok(())
}

fn check_junk_filtering() -> Result<(), String> {
    let slots: Vec<SlotTree> =
        serde_json::from_str(r#"[["marketing"], ["common", "checklist"]]"#)
            .map_err(|e| e.to_string())?;
    let format = BoosterFormat::from_slots(&slots).map_err(|e| e.to_string())?;
    expect_eq("retained slots", format.slots().len(), 1)?;
    expect_eq("common mass", format.slots()[0].get("common"), Some(0.5))?;
    expect_eq("checklist removed", format.slots()[0].get("checklist"), None)
}

fn check_card_type_derivation() -> Result<(), String> {
    expect_eq(
        "timeshifted purple",
        make_card_type("TSP", "special", "normal", Some("{1}{W}")),
        "timeshifted purple".to_string(),
    )?;
    expect_eq(
        "plain rarity",
        make_card_type("ABC", "common", "normal", Some("{2}{U}")),
        "common".to_string(),
    )?;
    expect_eq(
        "basic land",
        make_card_type("M11", "Basic Land", "normal", None),
        "land".to_string(),
    )
}

fn check_end_to_end() -> Result<(), String> {
    let input = r#"{
        "TST": {
            "name": "Eventide",
            "code": "TST",
            "releaseDate": "2008-07-25",
            "type": "expansion",
            "block": "Shadowmoor",
            "booster": [["common", "common"], ["uncommon"],
                        ["rare", "rare", "rare", "rare", "mythic rare"]],
            "cards": [
                {"name": "C1", "rarity": "Common", "layout": "normal", "manaCost": "{1}"},
                {"name": "U1", "rarity": "Uncommon", "layout": "normal", "manaCost": "{2}"},
                {"name": "R1", "rarity": "Rare", "layout": "normal", "manaCost": "{3}"},
                {"name": "M1", "rarity": "Mythic Rare", "layout": "normal", "manaCost": "{4}"}
            ]
        }
    }"#;
    let plain = convert(input, UnsatisfiablePolicy::FailFast, false).map_err(|e| e.to_string())?;
    let parsed: Vec<serde_json::Value> =
        serde_json::from_str(&plain).map_err(|e| e.to_string())?;
    expect_eq("set count", parsed.len(), 1)?;
    expect_eq(
        "display name",
        parsed[0]["name"].as_str(),
        Some("Shadowmoor - Eventide"),
    )?;
    expect_eq(
        "slot count",
        parsed[0]["boosterFormat"].as_array().map(Vec::len),
        Some(3),
    )?;

    let wrapped = convert(input, UnsatisfiablePolicy::FailFast, true).map_err(|e| e.to_string())?;
    expect_eq("jsonp envelope", wrapped, format!("mtgJSON({})", plain))
}

const CHECKS: &[Check] = &[
    ("tree probabilities", check_tree_probabilities),
    ("junk filtering", check_junk_filtering),
    ("card type derivation", check_card_type_derivation),
    ("end to end", check_end_to_end),
];

/// Runs every embedded check, logging each outcome. Returns the number of
/// failures.
pub fn run_checks() -> usize {
    let mut failures = 0;
    for (name, check) in CHECKS {
        match check() {
            Ok(()) => log::info!("check {}: ok", name),
            Err(msg) => {
                log::error!("check {}: FAILED: {}", name, msg);
                failures += 1;
            }
        }
    }
    failures
}
