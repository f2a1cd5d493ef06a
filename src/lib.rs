//! Booster Convert - MTG set dump → simulator booster models
//!
//! Converts a set dump (set code → record with booster composition and card
//! list) into a compact per-set model: one probability table per booster slot
//! and the pool of card names each slot category can draw from.

pub mod booster;
pub mod card;
pub mod checks;
pub mod convert;
pub mod error;
pub mod probability;
pub mod set;

pub use booster::{BoosterFormat, JUNK_LABELS};
pub use card::{make_card_type, Card};
pub use convert::{convert, AllSets, UnsatisfiablePolicy, EXCLUDED_SET_CODES};
pub use error::{ConvertError, Result};
pub use probability::{ProbabilityTable, SlotTree};
pub use set::{CardSet, SetOutput, SetType, BASIC_LANDS};
