//! Transcription statistics aggregation and report assembly.
//!
//! # Responsibility
//! - Compute per-category and overall completion percentages.
//! - Assemble the grid, totals, and pagination metadata for one
//!   statistics report invocation.
//!
//! # Invariants
//! - Zero-denominator inputs produce `0`, never a fault: an empty
//!   category still renders a "0% complete" row.
//! - Percentages stay `f64` through accumulation; rounding happens only
//!   in the display strings built here at the presentation boundary.
//! - Row order is the caller's order; nothing is sorted or grouped.

use crate::locator::codec::pad_to_5;
use crate::model::stats::{AggregateTotals, StatRow};
use crate::report::classify::{classify, CompletionBand};
use crate::report::grid::{layout, GridRow, LayoutError};
use crate::report::pagination::PaginationState;
use log::debug;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for statistics report assembly.
#[derive(Debug)]
pub enum ReportError {
    /// Display grid cannot be laid out.
    Layout(LayoutError),
}

impl Display for ReportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Layout(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ReportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Layout(err) => Some(err),
        }
    }
}

impl From<LayoutError> for ReportError {
    fn from(value: LayoutError) -> Self {
        Self::Layout(value)
    }
}

/// Share of transcribed records that are linked, as a percentage.
///
/// `0` when nothing is transcribed yet.
pub fn percent_linked(count: u64, linked: u64) -> f64 {
    if count == 0 {
        0.0
    } else {
        100.0 * linked as f64 / count as f64
    }
}

/// Share of the id range that is transcribed, as a percentage.
///
/// `0` when the category is empty, the range is unknown, or the bounds
/// are inverted. Double-counted source rows can push the result past
/// 100; that is the classifier's problem, not an error here.
pub fn percent_done(count: u64, low: Option<u32>, high: Option<u32>) -> f64 {
    match (low, high) {
        (Some(low), Some(high)) if count > 0 && high >= low => {
            let span = u64::from(high) - u64::from(low) + 1;
            100.0 * count as f64 / span as f64
        }
        _ => 0.0,
    }
}

/// Formats a percentage for display with one decimal place.
///
/// This is the presentation boundary: values are carried raw everywhere
/// else so rounding error never compounds across rows.
pub fn format_percent(pct: f64) -> String {
    format!("{pct:.1}")
}

/// Finalized totals with the overall percentages applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateSummary {
    pub total_count: u64,
    pub total_linked: u64,
    pub lowest_id: Option<u32>,
    pub highest_id: Option<u32>,
    /// Overall linked percentage, same guarded formula as per-row.
    pub percent_linked: f64,
    /// Overall transcription percentage over the combined id range.
    pub percent_done: f64,
    /// Band for the overall linked percentage; drives the footer
    /// progress indicator.
    pub band: CompletionBand,
}

/// Applies the guarded percentage formulas to accumulated totals.
///
/// Pure function of the accumulator: calling it again without further
/// `accumulate` calls returns an identical summary.
pub fn finalize(totals: &AggregateTotals) -> AggregateSummary {
    let pct_linked = percent_linked(totals.total_count, totals.total_linked);
    let pct_done = percent_done(totals.total_count, totals.lowest_id, totals.highest_id);
    AggregateSummary {
        total_count: totals.total_count,
        total_linked: totals.total_linked,
        lowest_id: totals.lowest_id,
        highest_id: totals.highest_id,
        percent_linked: pct_linked,
        percent_done: pct_done,
        band: classify(pct_linked),
    }
}

/// One category row prepared for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatRowView {
    pub category_key: String,
    pub count: u32,
    pub linked_count: u32,
    /// Lowest id padded for display, when the range is known.
    pub low_display: Option<String>,
    /// Highest id padded for display, when the range is known.
    pub high_display: Option<String>,
    pub percent_linked: f64,
    pub percent_done: f64,
    pub linked_display: String,
    pub done_display: String,
    pub linked_band: CompletionBand,
    pub done_band: CompletionBand,
}

impl StatRowView {
    fn from_row(row: &StatRow) -> Self {
        let pct_linked = percent_linked(u64::from(row.count), u64::from(row.linked_count));
        let pct_done = percent_done(u64::from(row.count), row.low_id, row.high_id);
        Self {
            category_key: row.category_key.clone(),
            count: row.count,
            linked_count: row.linked_count,
            low_display: row.low_id.map(pad_to_5),
            high_display: row.high_id.map(pad_to_5),
            percent_linked: pct_linked,
            percent_done: pct_done,
            linked_display: format_percent(pct_linked),
            done_display: format_percent(pct_done),
            linked_band: classify(pct_linked),
            done_band: classify(pct_done),
        }
    }
}

/// Complete view model for one statistics report page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    /// Category rows laid out row-major into display columns.
    pub grid: Vec<GridRow<StatRowView>>,
    pub totals: AggregateSummary,
    pub pagination: PaginationState,
}

/// Use-case facade the statistics page controllers call once per
/// request.
#[derive(Debug)]
pub struct StatsReportService {
    columns: usize,
}

impl StatsReportService {
    /// Creates a service rendering `columns` categories per display row.
    ///
    /// # Errors
    /// - `Layout(InvalidColumnCount)` when `columns < 1`, so a
    ///   misconfigured page fails at construction rather than mid-render.
    pub fn new(columns: usize) -> Result<Self, ReportError> {
        if columns < 1 {
            return Err(LayoutError::InvalidColumnCount(columns).into());
        }
        Ok(Self { columns })
    }

    /// Display columns this service lays rows out into.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Builds the full report view model for one fetched window.
    ///
    /// `rows` is the already-fetched window in query order; `total` is
    /// the category count across all windows, supplied by the query
    /// layer.
    pub fn build_report(
        &self,
        rows: &[StatRow],
        offset: i64,
        limit: u32,
        total: u32,
    ) -> Result<StatsReport, ReportError> {
        let mut totals = AggregateTotals::new();
        let mut views = Vec::with_capacity(rows.len());
        for row in rows {
            totals.accumulate(row);
            views.push(StatRowView::from_row(row));
        }

        let count_returned = u32::try_from(rows.len()).unwrap_or(u32::MAX);
        let report = StatsReport {
            grid: layout(views, self.columns)?,
            totals: finalize(&totals),
            pagination: PaginationState::new(offset, limit, total, count_returned),
        };

        debug!(
            "event=stats_report_built module=core status=ok rows={} columns={} total_count={} total_linked={}",
            rows.len(),
            self.columns,
            report.totals.total_count,
            report.totals.total_linked
        );

        Ok(report)
    }
}
