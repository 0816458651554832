//! Boundary parsing of form-supplied registration numbers and years.
//!
//! Identifiers reach the engine as raw strings from web forms and query
//! parameters. Parsing happens here, once, returning a typed failure
//! instead of letting loose text flow into arithmetic.

use crate::locator::codec::{LocatorError, LocatorResult};
use crate::model::locator::SequenceNumber;
use once_cell::sync::Lazy;
use regex::Regex;

// Nine digits keep every accepted value inside u32.
static SEQUENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{1,9}$").expect("valid sequence regex"));
static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{1,5}$").expect("valid year regex"));

/// Earliest registration year any series in the index reaches back to.
pub const MIN_REGISTRATION_YEAR: u16 = 1800;
/// Latest year accepted from a form before it is treated as a typo.
pub const MAX_REGISTRATION_YEAR: u16 = 2100;

/// Parses a registration sequence number from form text.
///
/// Surrounding whitespace is ignored and leading zeros are accepted,
/// since padded numbers round-trip through display fields.
///
/// # Errors
/// - `Unparseable` for empty, non-numeric, or oversized input.
/// - `NonPositive` for an explicit zero.
pub fn parse_sequence(text: &str) -> LocatorResult<SequenceNumber> {
    let trimmed = text.trim();
    if !SEQUENCE_RE.is_match(trimmed) {
        return Err(LocatorError::Unparseable(text.to_string()));
    }
    let value: SequenceNumber = trimmed
        .parse()
        .map_err(|_| LocatorError::Unparseable(text.to_string()))?;
    if value == 0 {
        return Err(LocatorError::NonPositive(value));
    }
    Ok(value)
}

/// Parses a registration year from form text.
///
/// # Errors
/// - `Unparseable` for empty or non-numeric input.
/// - `YearOutOfRange` for values outside the supported range.
pub fn parse_year(text: &str) -> LocatorResult<u16> {
    let trimmed = text.trim();
    if !YEAR_RE.is_match(trimmed) {
        return Err(LocatorError::Unparseable(text.to_string()));
    }
    let value: u32 = trimmed
        .parse()
        .map_err(|_| LocatorError::Unparseable(text.to_string()))?;
    if value < u32::from(MIN_REGISTRATION_YEAR) || value > u32::from(MAX_REGISTRATION_YEAR) {
        return Err(LocatorError::YearOutOfRange(value));
    }
    Ok(value as u16)
}
