//! Set records, aggregation, and the per-set output shape
//!
//! A raw set record from the dump is parsed into a [`CardSet`], which binds a
//! booster format to the set's card pool. `to_output` materializes one card
//! pool per category the format requires and enforces that none is empty.

use crate::booster::BoosterFormat;
use crate::card::Card;
use crate::error::{ConvertError, Result};
use crate::probability::SlotTree;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// The five basic land names, substituted when a "land" slot has no pool.
pub const BASIC_LANDS: &[&str] = &["Plains", "Island", "Swamp", "Mountain", "Forest"];

/// Set types eligible for conversion. Anything else in the dump is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetType {
    Expansion,
    Core,
    Joke,
}

impl SetType {
    /// Parse the dump's `type` field. Unknown values yield None, not an error.
    pub fn from_source(value: &str) -> Option<Self> {
        match value {
            "expansion" => Some(SetType::Expansion),
            "core" => Some(SetType::Core),
            "un" => Some(SetType::Joke),
            _ => None,
        }
    }
}

/// Raw set record as it appears in the dump, before validation.
#[derive(Debug, Deserialize)]
pub struct SetRecord {
    pub name: String,
    pub code: String,
    #[serde(rename = "releaseDate")]
    pub release_date: String,
    #[serde(rename = "type")]
    pub set_type: String,
    #[serde(default)]
    pub block: Option<String>,
    #[serde(default)]
    pub booster: Vec<SlotTree>,
    pub cards: Vec<serde_json::Value>,
}

/// One converted set: booster format plus the cards that can fill it.
#[derive(Debug)]
pub struct CardSet {
    pub name: String,
    pub code: String,
    pub release_date: NaiveDate,
    pub set_type: SetType,
    pub block: Option<String>,
    pub booster_format: BoosterFormat,
    pub cards: Vec<Card>,
}

/// Per-set output object: `{name, boosterFormat, cardsByType}`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SetOutput {
    pub name: String,
    #[serde(rename = "boosterFormat")]
    pub booster_format: Vec<BTreeMap<String, f64>>,
    #[serde(rename = "cardsByType")]
    pub cards_by_type: BTreeMap<String, Vec<String>>,
}

impl CardSet {
    /// Builds a CardSet from one raw record.
    ///
    /// Returns Ok(None) when the record's type is not eligible. Field-level
    /// failures name the offending set (and card) so a bad record in a large
    /// dump is findable.
    pub fn from_record(code: &str, record: serde_json::Value) -> Result<Option<Self>> {
        let record: SetRecord =
            serde_json::from_value(record).map_err(|e| ConvertError::MalformedRecord {
                set_code: code.to_string(),
                detail: e.to_string(),
            })?;

        let set_type = match SetType::from_source(&record.set_type) {
            Some(t) => t,
            None => {
                log::debug!("Skipping set {} with type {:?}", record.code, record.set_type);
                return Ok(None);
            }
        };

        let release_date = NaiveDate::parse_from_str(&record.release_date, "%Y-%m-%d")
            .map_err(|_| ConvertError::BadReleaseDate {
                set_code: record.code.clone(),
                value: record.release_date.clone(),
            })?;

        let booster_format = BoosterFormat::from_slots(&record.booster)?;

        let mut cards = Vec::with_capacity(record.cards.len());
        for (idx, value) in record.cards.into_iter().enumerate() {
            // Pull the name out before the strict parse so the error can say
            // which card was at fault, not just which index.
            let name = value
                .get("name")
                .and_then(|n| n.as_str())
                .map(str::to_string);
            let card: Card =
                serde_json::from_value(value).map_err(|e| ConvertError::MalformedRecord {
                    set_code: record.code.clone(),
                    detail: match name {
                        Some(name) => format!("card {:?}: {}", name, e),
                        None => format!("card #{}: {}", idx, e),
                    },
                })?;
            cards.push(card);
        }

        Ok(Some(CardSet {
            name: record.name,
            code: record.code,
            release_date,
            set_type,
            block: record.block,
            booster_format,
            cards,
        }))
    }

    /// Display name: the set name, prefixed with its block when that adds
    /// information.
    pub fn display_name(&self) -> String {
        match &self.block {
            Some(block) if block != &self.name => format!("{} - {}", block, self.name),
            _ => self.name.clone(),
        }
    }

    /// Materializes the per-category card pools and the output object.
    ///
    /// Every category the booster format requires must resolve to a non-empty
    /// pool; an empty "land" pool falls back to the five basic lands, any
    /// other empty pool is an UnsatisfiableBooster error. Pools are
    /// de-duplicated and sorted so output is stable across runs.
    pub fn to_output(&self) -> Result<SetOutput> {
        let mut cards_by_type = BTreeMap::new();
        for category in self.booster_format.required_categories() {
            let pool: BTreeSet<&str> = self
                .cards
                .iter()
                .filter(|card| card.is_card_type(&self.code, &category))
                .map(|card| card.name.as_str())
                .collect();

            let mut names: Vec<String> = pool.into_iter().map(str::to_string).collect();
            if names.is_empty() && category == "land" {
                names = BASIC_LANDS.iter().map(|s| s.to_string()).collect();
                names.sort();
            }
            if names.is_empty() {
                return Err(ConvertError::UnsatisfiableBooster {
                    set_code: self.code.clone(),
                    category,
                });
            }
            cards_by_type.insert(category, names);
        }

        let booster_format = self
            .booster_format
            .slots()
            .iter()
            .map(|table| table.entries().clone())
            .collect();

        Ok(SetOutput {
            name: self.display_name(),
            booster_format,
            cards_by_type,
        })
    }
}

#[cfg(test)]
#[path = "set_tests.rs"]
mod tests;
