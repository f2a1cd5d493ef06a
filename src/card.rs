//! Card records and category classification
//!
//! A booster slot names a category ("common", "double faced rare", ...) and a
//! set's cards are matched against that category here. The rules are mostly
//! rarity matching with a handful of domain special cases, kept in named
//! constants so they are auditable in one place.

use serde::Deserialize;

/// The one joke card that gets its own booster category.
pub const STEAMFLOGGER_BOSS: &str = "Steamflogger Boss";

/// Layout value marking a two-sided card. Only one face carries a mana cost.
pub const DOUBLE_FACED_LAYOUT: &str = "double-faced";

/// Set codes whose "Special"-rarity cards are the timeshifted purple sheet.
pub const TIMESHIFTED_SET_CODES: &[&str] = &["TSP", "TSB"];

/// One card of a set: the attributes classification needs, nothing more.
#[derive(Debug, Clone, Deserialize)]
pub struct Card {
    pub name: String,
    pub rarity: String,
    pub layout: String,
    #[serde(rename = "manaCost", default)]
    pub mana_cost: Option<String>,
}

impl Card {
    /// Tests whether this card belongs to a booster slot category.
    ///
    /// "double faced" categories match only the costless half of a two-sided
    /// card (the back face); every other category is the card's rarity,
    /// lower-cased. `set_code` is unused today but kept in the signature so
    /// set-scoped categories can be added without touching every caller.
    pub fn is_card_type(&self, _set_code: &str, category: &str) -> bool {
        match category {
            STEAMFLOGGER_BOSS => self.name == STEAMFLOGGER_BOSS,
            "double faced common"
            | "double faced uncommon"
            | "double faced rare"
            | "double faced mythic rare" => {
                let rarity = category.trim_start_matches("double faced ");
                self.layout == DOUBLE_FACED_LAYOUT
                    && self.mana_cost.is_none()
                    && self.rarity.to_lowercase() == rarity
            }
            "double faced" => self.layout == DOUBLE_FACED_LAYOUT && self.mana_cost.is_none(),
            _ => self.rarity.to_lowercase() == category,
        }
    }
}

/// Derives a category label from card attributes, the inverse of
/// [`Card::is_card_type`].
///
/// The "double faced" case here requires a mana cost to be PRESENT, while
/// `is_card_type`'s requires it absent: this function labels front faces,
/// the predicate matches back faces. Pool building uses `is_card_type`; the
/// two are kept separate on purpose.
pub fn make_card_type(
    set_code: &str,
    rarity: &str,
    layout: &str,
    mana_cost: Option<&str>,
) -> String {
    if TIMESHIFTED_SET_CODES.contains(&set_code) && rarity.eq_ignore_ascii_case("special") {
        return "timeshifted purple".to_string();
    }
    if rarity == "Basic Land" {
        return "land".to_string();
    }
    if layout == DOUBLE_FACED_LAYOUT && mana_cost.is_some() {
        return "double faced".to_string();
    }
    rarity.to_lowercase()
}

#[cfg(test)]
#[path = "card_tests.rs"]
mod tests;
