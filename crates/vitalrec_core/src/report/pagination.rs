//! Offset/limit pagination windows.
//!
//! # Responsibility
//! - Derive previous/next window offsets and the 1-based display range
//!   from (offset, limit, total, count returned).
//!
//! # Invariants
//! - Every function is total: request parameters arrive unvalidated, so
//!   out-of-range values are clamped, never rejected.

use serde::Serialize;

/// Clamps a raw request offset to a usable non-negative value.
pub fn clamp_offset(offset: i64) -> u32 {
    if offset <= 0 {
        0
    } else {
        u32::try_from(offset).unwrap_or(u32::MAX)
    }
}

/// Offset of the window before the current one, if any.
pub fn previous_window(offset: u32, limit: u32) -> Option<u32> {
    if offset == 0 {
        None
    } else {
        Some(offset.saturating_sub(limit))
    }
}

/// Offset of the window after the current one, if any rows remain.
pub fn next_window(offset: u32, limit: u32, total: u32) -> Option<u32> {
    let end = u64::from(offset) + u64::from(limit);
    if end >= u64::from(total) {
        None
    } else {
        Some(offset + limit)
    }
}

/// 1-based inclusive row range shown as "rows start to end of total".
///
/// `end < start` signals an empty window.
pub fn display_range(offset: u32, count_returned: u32, total: u32) -> (u32, u32) {
    let start = offset.saturating_add(1);
    let end = total.min(offset.saturating_add(count_returned));
    (start, end)
}

/// Previous printed page number, if one exists.
///
/// Page-number mode pages by a secondary field rather than row offset,
/// so page numbers are 1-based.
pub fn previous_page(page: u32) -> Option<u32> {
    if page >= 2 {
        Some(page - 1)
    } else {
        None
    }
}

/// Next printed page number.
///
/// The upper bound is unknown without a count query; the caller treats a
/// next page that yields zero rows as the terminal case.
pub fn next_page(page: u32) -> u32 {
    page.saturating_add(1)
}

/// Navigation metadata bundle handed to the template layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    pub offset: u32,
    pub limit: u32,
    pub total: u32,
    /// Offset for the "previous page" link, absent on the first window.
    pub previous_offset: Option<u32>,
    /// Offset for the "next page" link, absent on the last window.
    pub next_offset: Option<u32>,
    /// First displayed row, 1-based.
    pub display_start: u32,
    /// Last displayed row, 1-based inclusive.
    pub display_end: u32,
}

impl PaginationState {
    /// Derives the full navigation state for one fetched window.
    ///
    /// `offset` is taken raw from the request and clamped; a zero
    /// `limit` is lifted to 1 so the window math stays defined.
    pub fn new(offset: i64, limit: u32, total: u32, count_returned: u32) -> Self {
        let offset = clamp_offset(offset);
        let limit = limit.max(1);
        let (display_start, display_end) = display_range(offset, count_returned, total);
        Self {
            offset,
            limit,
            total,
            previous_offset: previous_window(offset, limit),
            next_offset: next_window(offset, limit, total),
            display_start,
            display_end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        clamp_offset, display_range, next_page, next_window, previous_page, previous_window,
        PaginationState,
    };

    #[test]
    fn clamp_offset_handles_raw_request_values() {
        assert_eq!(clamp_offset(-20), 0);
        assert_eq!(clamp_offset(0), 0);
        assert_eq!(clamp_offset(35), 35);
        assert_eq!(clamp_offset(i64::MAX), u32::MAX);
    }

    #[test]
    fn windows_near_the_end_of_the_result_set() {
        assert_eq!(previous_window(25, 20), Some(5));
        assert_eq!(next_window(25, 20, 30), None);
        assert_eq!(display_range(25, 5, 30), (26, 30));
    }

    #[test]
    fn first_window_has_no_previous() {
        assert_eq!(previous_window(0, 20), None);
        assert_eq!(next_window(0, 20, 30), Some(20));
    }

    #[test]
    fn short_first_window_is_also_last() {
        assert_eq!(next_window(0, 20, 20), None);
        assert_eq!(display_range(0, 20, 20), (1, 20));
    }

    #[test]
    fn page_mode_is_open_ended_forward() {
        assert_eq!(previous_page(1), None);
        assert_eq!(previous_page(7), Some(6));
        assert_eq!(next_page(7), 8);
    }

    #[test]
    fn state_bundles_derived_values() {
        let state = PaginationState::new(25, 20, 30, 5);
        assert_eq!(state.offset, 25);
        assert_eq!(state.previous_offset, Some(5));
        assert_eq!(state.next_offset, None);
        assert_eq!(state.display_start, 26);
        assert_eq!(state.display_end, 30);
    }

    #[test]
    fn state_clamps_hostile_input() {
        let state = PaginationState::new(-400, 0, 10, 0);
        assert_eq!(state.offset, 0);
        assert_eq!(state.limit, 1);
        assert_eq!(state.previous_offset, None);
        assert_eq!(state.next_offset, Some(1));
    }
}
