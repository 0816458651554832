//! Pre-1873 column-scheme codec and record navigation.
//!
//! # Responsibility
//! - Decode flat sequence numbers into volume/page/column positions for
//!   registrations filed under the 1870-1872 three-column ledgers.
//! - Compute the immediate predecessor/successor sequence number for
//!   "previous/next record" links.
//!
//! # Invariants
//! - The column scheme applies only when `year <= 1872` and
//!   `seq > 10000`; every other number is plain sequential.
//! - Column digits are 1..=3; anything else is rejected, never guessed.
//! - Decomposition is `seq = volume * 10000 + page * 10 + column`, which
//!   is also why registration numbers display with a 5-digit pad.

use crate::model::locator::{RegistrationLocator, SequenceNumber, VolumePosition};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Last registration year filed under the three-column ledgers.
pub const COLUMN_SCHEME_FINAL_YEAR: u16 = 1872;
/// Exclusive lower bound of column-scheme sequence numbers.
pub const COLUMN_SCHEME_MIN_SEQ: SequenceNumber = 10_000;
/// First and last column on a ledger page. Three entries per page is a
/// fixed historical constant of the format, not a tunable.
pub const FIRST_COLUMN: u8 = 1;
pub const LAST_COLUMN: u8 = 3;
/// Step between column 1 of a page and column 3 of the previous page.
pub const PAGE_WRAP_STEP: SequenceNumber = 8;

const SEQ_VOLUME_UNIT: SequenceNumber = 10_000;
const SEQ_PAGE_UNIT: SequenceNumber = 10;
/// Pages occupy the three digits between the column and volume digits.
const MAX_PAGE: u32 = 999;

/// Result type for locator codec and parse APIs.
pub type LocatorResult<T> = Result<T, LocatorError>;

/// Typed failure for numbers that cannot be classified into a scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocatorError {
    /// Sequence numbers are 1-based; zero cannot name a record.
    NonPositive(SequenceNumber),
    /// Column digit outside the three-column page layout.
    UnsupportedColumn { seq: SequenceNumber, column: u8 },
    /// Volume/page pair that cannot be packed into a sequence number.
    PositionOutOfRange { volume: u32, page: u32 },
    /// County item digit outside 0..=9.
    ItemOutOfRange(u8),
    /// Number too small to carry the county page/item encoding.
    NotCountyEncoded(SequenceNumber),
    /// Form-supplied text that is not a positive integer.
    Unparseable(String),
    /// Year outside the supported registration range.
    YearOutOfRange(u32),
}

impl Display for LocatorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositive(seq) => {
                write!(f, "invalid record number {seq}: sequence numbers start at 1")
            }
            Self::UnsupportedColumn { seq, column } => write!(
                f,
                "invalid record number {seq}: column digit {column} is outside the three-column page"
            ),
            Self::PositionOutOfRange { volume, page } => write!(
                f,
                "invalid locator position: volume {volume} page {page} cannot be encoded"
            ),
            Self::ItemOutOfRange(item) => {
                write!(f, "invalid county item {item}: items run 0..=9")
            }
            Self::NotCountyEncoded(seq) => write!(
                f,
                "invalid record number {seq}: not a county page/item encoding"
            ),
            Self::Unparseable(text) => write!(f, "invalid record number `{text}`"),
            Self::YearOutOfRange(year) => write!(f, "invalid registration year {year}"),
        }
    }
}

impl Error for LocatorError {}

/// Returns whether the column scheme governs this year/sequence pair.
pub fn uses_column_scheme(year: u16, seq: SequenceNumber) -> bool {
    year <= COLUMN_SCHEME_FINAL_YEAR && seq > COLUMN_SCHEME_MIN_SEQ
}

/// Decodes a flat sequence number into its structured locator.
///
/// Outside the column scheme decoding is identity: the locator carries
/// the sequence number and no position.
///
/// # Errors
/// - `NonPositive` when `seq` is zero.
/// - `UnsupportedColumn` when the scheme applies but the column digit is
///   not 1..=3.
pub fn decode(year: u16, seq: SequenceNumber) -> LocatorResult<RegistrationLocator> {
    if seq == 0 {
        return Err(LocatorError::NonPositive(seq));
    }
    if !uses_column_scheme(year, seq) {
        return Ok(RegistrationLocator::sequential(year, seq));
    }

    let column = (seq % SEQ_PAGE_UNIT) as u8;
    if !(FIRST_COLUMN..=LAST_COLUMN).contains(&column) {
        return Err(LocatorError::UnsupportedColumn { seq, column });
    }

    let position = VolumePosition {
        volume: seq / SEQ_VOLUME_UNIT,
        page: (seq % SEQ_VOLUME_UNIT) / SEQ_PAGE_UNIT,
        column,
    };
    Ok(RegistrationLocator::with_position(year, seq, position))
}

/// Packs a volume/page/column position back into its sequence number.
///
/// Inverse of [`decode`]: `decode(year, encode(&pos)?)` reproduces `pos`
/// for every valid position.
///
/// # Errors
/// - `PositionOutOfRange` when `volume` is zero or `page` exceeds the
///   three page digits.
/// - `UnsupportedColumn` when the column digit is not 1..=3.
pub fn encode(position: &VolumePosition) -> LocatorResult<SequenceNumber> {
    let VolumePosition {
        volume,
        page,
        column,
    } = *position;

    if volume == 0 || page > MAX_PAGE {
        return Err(LocatorError::PositionOutOfRange { volume, page });
    }
    let packed = u64::from(volume) * u64::from(SEQ_VOLUME_UNIT)
        + u64::from(page) * u64::from(SEQ_PAGE_UNIT)
        + u64::from(column);
    let seq = u32::try_from(packed)
        .map_err(|_| LocatorError::PositionOutOfRange { volume, page })?;
    if !(FIRST_COLUMN..=LAST_COLUMN).contains(&column) {
        return Err(LocatorError::UnsupportedColumn { seq, column });
    }
    Ok(seq)
}

/// Sequence number of the record preceding `seq` in ledger order.
///
/// Under the column scheme, column 1 wraps back to column 3 of the prior
/// page; otherwise the predecessor is `seq - 1`. The result may be 0 for
/// the first sequential record; callers treat an empty fetch for it as
/// the terminal case.
///
/// # Errors
/// - `NonPositive` when `seq` is zero.
/// - `UnsupportedColumn` when the scheme applies but the column digit is
///   not 1..=3.
pub fn previous(year: u16, seq: SequenceNumber) -> LocatorResult<SequenceNumber> {
    if seq == 0 {
        return Err(LocatorError::NonPositive(seq));
    }
    if !uses_column_scheme(year, seq) {
        return Ok(seq - 1);
    }
    match (seq % SEQ_PAGE_UNIT) as u8 {
        1 => Ok(seq - PAGE_WRAP_STEP),
        2 | 3 => Ok(seq - 1),
        column => Err(LocatorError::UnsupportedColumn { seq, column }),
    }
}

/// Sequence number of the record following `seq` in ledger order.
///
/// Under the column scheme, column 3 wraps forward to column 1 of the
/// next page; otherwise the successor is `seq + 1`.
///
/// # Errors
/// - `NonPositive` when `seq` is zero.
/// - `UnsupportedColumn` when the scheme applies but the column digit is
///   not 1..=3.
pub fn next(year: u16, seq: SequenceNumber) -> LocatorResult<SequenceNumber> {
    if seq == 0 {
        return Err(LocatorError::NonPositive(seq));
    }
    if !uses_column_scheme(year, seq) {
        return Ok(seq.saturating_add(1));
    }
    match (seq % SEQ_PAGE_UNIT) as u8 {
        1 | 2 => Ok(seq.saturating_add(1)),
        3 => Ok(seq.saturating_add(PAGE_WRAP_STEP)),
        column => Err(LocatorError::UnsupportedColumn { seq, column }),
    }
}

/// Zero-pads a sequence number to the 5-digit display width.
///
/// Numbers already 5 digits or wider are returned unchanged.
pub fn pad_to_5(seq: SequenceNumber) -> String {
    format!("{seq:05}")
}
