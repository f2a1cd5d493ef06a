//! Probability tables for booster slots
//!
//! A slot description is an arbitrarily nested tree of category labels. Each
//! level splits its probability mass evenly among its children, so nesting and
//! label repetition are how the source data skews the odds.

use crate::error::{ConvertError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;

/// One node of a slot description: a category label or a list of sub-trees.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SlotTree {
    Leaf(String),
    Branch(Vec<SlotTree>),
}

/// Flat category → probability mass mapping for a single booster slot.
///
/// Backed by a BTreeMap so iteration (and serialization) order is stable
/// across runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProbabilityTable {
    entries: BTreeMap<String, f64>,
}

impl ProbabilityTable {
    /// Flattens a slot tree into a probability table.
    ///
    /// The root carries mass 1.0; a branch with k children hands each child
    /// a kth of its own mass; a leaf adds its incoming mass to its label,
    /// summing when the same label appears at several leaves. An empty branch
    /// swallows its mass with nothing to pass it to, so totals can come out
    /// below 1.0 — that remainder means "this share of draws yields nothing".
    ///
    /// A bare label at the root is rejected: slot descriptions are lists.
    pub fn from_tree(tree: &SlotTree) -> Result<Self> {
        let children = match tree {
            SlotTree::Leaf(label) => {
                return Err(ConvertError::InvalidTreeShape(label.clone()));
            }
            SlotTree::Branch(children) => children,
        };

        let mut table = ProbabilityTable::default();
        table.accumulate(children, 1.0);
        Ok(table)
    }

    fn accumulate(&mut self, children: &[SlotTree], mass: f64) {
        if children.is_empty() {
            return;
        }
        let share = mass / children.len() as f64;
        for child in children {
            match child {
                SlotTree::Leaf(label) => {
                    *self.entries.entry(label.clone()).or_insert(0.0) += share;
                }
                SlotTree::Branch(sub) => self.accumulate(sub, share),
            }
        }
    }

    /// Removes a label from the table. Absent labels are a no-op.
    pub fn remove(&mut self, label: &str) {
        self.entries.remove(label);
    }

    /// Mass assigned to a label, if present.
    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries.get(label).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Labels in sorted order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Sum of all masses in the table.
    pub fn total_mass(&self) -> f64 {
        self.entries.values().sum()
    }

    /// The label → mass mapping, for serialization.
    pub fn entries(&self) -> &BTreeMap<String, f64> {
        &self.entries
    }
}

#[cfg(test)]
#[path = "probability_tests.rs"]
mod tests;
