//! Core report/locator logic for VitalRec.
//! This crate is the single source of truth for pagination, layout and
//! registration-number invariants shared by every report page.

pub mod locator;
pub mod logging;
pub mod model;
pub mod report;
pub mod service;

pub use locator::codec::{LocatorError, LocatorResult};
pub use locator::parse::{parse_sequence, parse_year};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::locator::{CountyPosition, RegistrationLocator, SequenceNumber, VolumePosition};
pub use model::stats::{AggregateTotals, StatRow};
pub use report::classify::CompletionBand;
pub use report::grid::{GridRow, LayoutError};
pub use report::pagination::PaginationState;
pub use service::stats_service::{
    AggregateSummary, ReportError, StatRowView, StatsReport, StatsReportService,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
