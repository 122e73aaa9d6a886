//! Block and efficiency-score filters.
//!
//! Filters never touch the source tables: they return new vectors of cloned rows.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::dataset::{BlockRecord, SystemBreakdownRecord};
use crate::name::HasBlock;

/// Inclusive efficiency-score band in %.
///
/// A band with `min > max` is accepted and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EfficiencyRange {
    pub min: u32,
    pub max: u32,
}

impl EfficiencyRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// The full 0..=100 slider range.
    pub fn full() -> Self {
        Self::new(0, 100)
    }

    pub fn contains(&self, score_pct: u32) -> bool {
        self.min <= score_pct && score_pct <= self.max
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

impl Default for EfficiencyRange {
    fn default() -> Self {
        Self::new(60, 95)
    }
}

/// User selection applied to the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    selected: HashSet<String>,
    efficiency: EfficiencyRange,
}

impl FilterCriteria {
    pub fn new<I, S>(selected: I, efficiency: EfficiencyRange) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selected: selected.into_iter().map(Into::into).collect(),
            efficiency,
        }
    }

    pub fn efficiency(&self) -> EfficiencyRange {
        self.efficiency
    }

    pub fn set_efficiency(&mut self, efficiency: EfficiencyRange) {
        self.efficiency = efficiency;
    }

    pub fn is_selected(&self, block: &str) -> bool {
        self.selected.contains(block)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    fn keeps_block(&self, row: &BlockRecord) -> bool {
        self.is_selected(row.block()) && self.efficiency.contains(row.efficiency_score_pct())
    }
}

/// Rows of `items` whose block is in `criteria`'s selection.
pub fn filter_by_block<T: HasBlock + Clone>(items: &[T], criteria: &FilterCriteria) -> Vec<T> {
    items
        .iter()
        .filter(|item| criteria.is_selected(item.block()))
        .cloned()
        .collect()
}

/// Block rows that are selected and fall into the efficiency band.
pub fn filter_blocks(rows: &[BlockRecord], criteria: &FilterCriteria) -> Vec<BlockRecord> {
    let filtered: Vec<BlockRecord> = rows
        .iter()
        .filter(|row| criteria.keeps_block(row))
        .cloned()
        .collect();
    tracing::debug!(
        total = rows.len(),
        kept = filtered.len(),
        min = criteria.efficiency.min,
        max = criteria.efficiency.max,
        "filtered block rows"
    );
    filtered
}

/// Breakdown rows of selected blocks.
///
/// The efficiency band is not applied here: a block excluded from the
/// overview by its score still shows up in the system breakdown.
pub fn filter_systems(
    rows: &[SystemBreakdownRecord],
    criteria: &FilterCriteria,
) -> Vec<SystemBreakdownRecord> {
    let filtered = filter_by_block(rows, criteria);
    tracing::debug!(total = rows.len(), kept = filtered.len(), "filtered system rows");
    filtered
}
