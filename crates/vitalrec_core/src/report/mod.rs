//! Report presentation primitives.
//!
//! # Responsibility
//! - Window math for offset-paged listings.
//! - Row-major grid layout for dense statistics tables.
//! - Completion-percentage bucketing for the rendering layer.
//!
//! # Invariants
//! - Pagination clamps out-of-range request input instead of failing, so
//!   a report stays renderable whatever the query string carried.
//! - Layout is a pure partition: cell order is always preserved.

pub mod classify;
pub mod grid;
pub mod pagination;
