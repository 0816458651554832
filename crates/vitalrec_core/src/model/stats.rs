//! Transcription statistics model.
//!
//! # Responsibility
//! - Define the per-category count row supplied by the query layer.
//! - Accumulate running totals across a report page in caller order.
//!
//! # Invariants
//! - Accumulation never divides; percentage math lives in the service
//!   layer so an empty category can still be folded safely.
//! - Id bounds participate in the fold only when the row carries them.

use serde::{Deserialize, Serialize};

/// One per-category count row as fetched by the external query layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRow {
    /// Grouping key of the row (township, district, year, ...).
    pub category_key: String,
    /// Transcribed records in this category.
    pub count: u32,
    /// Records linked to a family tree entry.
    pub linked_count: u32,
    /// Lowest registration number seen in the category, when known.
    pub low_id: Option<u32>,
    /// Highest registration number seen in the category, when known.
    pub high_id: Option<u32>,
}

impl StatRow {
    /// Creates a row with no id range.
    pub fn new(category_key: impl Into<String>, count: u32, linked_count: u32) -> Self {
        Self {
            category_key: category_key.into(),
            count,
            linked_count,
            low_id: None,
            high_id: None,
        }
    }

    /// Attaches the registration-number range observed for the category.
    pub fn with_id_range(mut self, low_id: u32, high_id: u32) -> Self {
        self.low_id = Some(low_id);
        self.high_id = Some(high_id);
        self
    }
}

/// Running totals folded over the rows of one report invocation.
///
/// Fold order is the order the caller supplies; the accumulator performs
/// no sorting or grouping of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AggregateTotals {
    /// Sum of `StatRow::count`.
    pub total_count: u64,
    /// Sum of `StatRow::linked_count`.
    pub total_linked: u64,
    /// Minimum of all present `low_id` values.
    pub lowest_id: Option<u32>,
    /// Maximum of all present `high_id` values.
    pub highest_id: Option<u32>,
}

impl AggregateTotals {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one row into the running totals.
    pub fn accumulate(&mut self, row: &StatRow) {
        self.total_count += u64::from(row.count);
        self.total_linked += u64::from(row.linked_count);
        if let Some(low) = row.low_id {
            self.lowest_id = Some(self.lowest_id.map_or(low, |current| current.min(low)));
        }
        if let Some(high) = row.high_id {
            self.highest_id = Some(self.highest_id.map_or(high, |current| current.max(high)));
        }
    }
}
