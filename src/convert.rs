//! Whole-dump conversion
//!
//! Parses the set-code → record mapping, builds one [`CardSet`] per eligible
//! record, orders them by release date, and renders the export (most recent
//! set first), optionally wrapped in the `mtgJSON(...)` callback envelope.

use crate::error::{ConvertError, Result};
use crate::set::{CardSet, SetOutput};
use serde_json::Value;
use std::collections::BTreeMap;

/// Set codes deleted from the input before any record is parsed. These are
/// starter products whose booster data in the dump is unusable.
pub const EXCLUDED_SET_CODES: &[&str] = &["ITP", "RQS"];

/// What to do when a set's booster requires a category no card satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsatisfiablePolicy {
    /// Propagate the error and abort the whole run (default).
    FailFast,
    /// Drop the offending set, warn, and keep going.
    Skip,
}

/// All converted sets, ordered ascending by release date.
#[derive(Debug)]
pub struct AllSets {
    sets: Vec<CardSet>,
}

impl AllSets {
    /// Parses a full dump. Records with an unrecognized type are skipped;
    /// excluded codes are deleted up front; everything else must parse.
    pub fn from_json(input: &str) -> Result<Self> {
        // BTreeMap so record iteration order is deterministic before sorting.
        let mut records: BTreeMap<String, Value> = serde_json::from_str(input)?;

        for code in EXCLUDED_SET_CODES {
            if records.remove(*code).is_some() {
                log::debug!("Dropped excluded set {}", code);
            }
        }

        let mut sets = Vec::new();
        for (code, record) in records {
            if let Some(set) = CardSet::from_record(&code, record)? {
                sets.push(set);
            }
        }
        // Stable sort: ties keep the code order from the BTreeMap.
        sets.sort_by_key(|set| set.release_date);

        log::info!("Parsed {} eligible sets", sets.len());
        Ok(AllSets { sets })
    }

    /// The sets, ascending by release date.
    pub fn sets(&self) -> &[CardSet] {
        &self.sets
    }

    /// Renders the export list, most recent release first.
    pub fn to_output(&self, policy: UnsatisfiablePolicy) -> Result<Vec<SetOutput>> {
        let mut out = Vec::with_capacity(self.sets.len());
        for set in self.sets.iter().rev() {
            match set.to_output() {
                Ok(output) => out.push(output),
                Err(e @ ConvertError::UnsatisfiableBooster { .. })
                    if policy == UnsatisfiablePolicy::Skip =>
                {
                    log::warn!("Skipping set: {}", e);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(out)
    }
}

/// Runs the whole conversion: dump in, serialized export out.
///
/// With `jsonp` the JSON is wrapped as `mtgJSON(<json>)` by plain string
/// concatenation.
pub fn convert(input: &str, policy: UnsatisfiablePolicy, jsonp: bool) -> Result<String> {
    let all_sets = AllSets::from_json(input)?;
    let output = all_sets.to_output(policy)?;
    let json = serde_json::to_string(&output)?;
    if jsonp {
        Ok(format!("mtgJSON({})", json))
    } else {
        Ok(json)
    }
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;
