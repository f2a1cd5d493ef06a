//! Booster format: the ordered slot tables of one pack
//!
//! Builds one probability table per physical slot, then strips labels that
//! describe pack filler rather than gameplay cards.

use crate::error::Result;
use crate::probability::{ProbabilityTable, SlotTree};
use std::collections::BTreeSet;

/// Slot labels that describe pack filler, not playable cards.
pub const JUNK_LABELS: &[&str] = &["marketing", "checklist", "token"];

/// Ordered sequence of per-slot probability tables, junk-filtered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoosterFormat {
    slots: Vec<ProbabilityTable>,
}

impl BoosterFormat {
    /// Builds a format from one slot description per physical slot.
    ///
    /// A bare label is a one-card slot; it gets wrapped in a singleton list
    /// so every slot goes through the same tree flattening. Junk labels are
    /// then removed and slots left empty by that removal are dropped,
    /// preserving the order of the remaining slots. Masses are not
    /// renormalized after removal: a table summing below 1.0 means the slot
    /// sometimes yields nothing of interest.
    pub fn from_slots(slots: &[SlotTree]) -> Result<Self> {
        let mut retained = Vec::with_capacity(slots.len());
        for slot in slots {
            let mut table = match slot {
                SlotTree::Leaf(_) => {
                    ProbabilityTable::from_tree(&SlotTree::Branch(vec![slot.clone()]))?
                }
                SlotTree::Branch(_) => ProbabilityTable::from_tree(slot)?,
            };
            for junk in JUNK_LABELS {
                table.remove(junk);
            }
            if !table.is_empty() {
                retained.push(table);
            }
        }
        Ok(BoosterFormat { slots: retained })
    }

    /// The retained slot tables, in pack order.
    pub fn slots(&self) -> &[ProbabilityTable] {
        &self.slots
    }

    /// Every category label any retained slot can draw from.
    ///
    /// This is exactly the set of card pools a set must be able to fill.
    pub fn required_categories(&self) -> BTreeSet<String> {
        let mut categories = BTreeSet::new();
        for table in &self.slots {
            for label in table.labels() {
                categories.insert(label.to_string());
            }
        }
        categories
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
#[path = "booster_tests.rs"]
mod tests;
